use payloads::IdeaSort;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{IdeaSource, IdeaSubmissionForm, IdeasList};
use crate::hooks::use_title;
use crate::{Route, State};

#[function_component]
pub fn HomePage() -> Html {
    use_title("IdeaForge");
    let (state, _) = use_store::<State>();

    html! {
        <div class="space-y-8">
            <section class="text-center py-8">
                <h1 class="text-4xl font-bold text-neutral-900 \
                           dark:text-white">
                    {"Welcome to IdeaForge 💡"}
                </h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-300 \
                          mt-2">
                    {"Collect, vote on, and improve ideas together."}
                </p>
            </section>

            if state.is_authenticated() {
                <IdeaSubmissionForm />
            } else {
                <section class="bg-white dark:bg-neutral-800 rounded-lg \
                                shadow p-6 text-center">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Sign in to post your own ideas and vote."}
                    </p>
                    <div class="mt-4 space-x-4">
                        <Link<Route>
                            to={Route::Login}
                            classes="font-medium underline \
                                     text-neutral-900 dark:text-neutral-100"
                        >
                            {"Sign in"}
                        </Link<Route>>
                        <Link<Route>
                            to={Route::Register}
                            classes="font-medium underline \
                                     text-neutral-900 dark:text-neutral-100"
                        >
                            {"Register"}
                        </Link<Route>>
                    </div>
                </section>
            }

            <IdeasList
                source={IdeaSource::All}
                header="Vote on Current Ideas"
                limit={5}
                sort={Some(IdeaSort::Trending)}
                show_explore_button={true}
            />

            <section
                id="about-project-section"
                class="bg-white dark:bg-neutral-800 rounded-lg shadow p-6"
            >
                <h2 class="text-lg font-semibold text-neutral-900 \
                           dark:text-neutral-100 mb-4">
                    {"About the project"}
                </h2>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"A collaborative brainstorming board where users can \
                      post new ideas or feature requests, upvote and \
                      suggest improvements for ideas, and see trending or \
                      implemented ideas."}
                </p>
                <div class="grid sm:grid-cols-3 gap-4 mt-6">
                    <div class="p-4 rounded-md bg-neutral-50 \
                                dark:bg-neutral-700">
                        <h3 class="font-medium text-neutral-900 \
                                   dark:text-neutral-100">
                            {"Post New Ideas"}
                        </h3>
                        <p class="text-sm text-neutral-600 \
                                  dark:text-neutral-400 mt-1">
                            {"Easily submit your innovative ideas or \
                              feature requests to the board."}
                        </p>
                    </div>
                    <div class="p-4 rounded-md bg-neutral-50 \
                                dark:bg-neutral-700">
                        <h3 class="font-medium text-neutral-900 \
                                   dark:text-neutral-100">
                            {"Vote & Improve"}
                        </h3>
                        <p class="text-sm text-neutral-600 \
                                  dark:text-neutral-400 mt-1">
                            {"Engage with ideas by voting and suggesting \
                              improvements."}
                        </p>
                    </div>
                    <div class="p-4 rounded-md bg-neutral-50 \
                                dark:bg-neutral-700">
                        <h3 class="font-medium text-neutral-900 \
                                   dark:text-neutral-100">
                            {"Track Trending Ideas"}
                        </h3>
                        <p class="text-sm text-neutral-600 \
                                  dark:text-neutral-400 mt-1">
                            {"Discover the most popular ideas within the \
                              community."}
                        </p>
                    </div>
                </div>
            </section>
        </div>
    }
}
