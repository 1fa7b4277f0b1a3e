use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_logout;
use crate::{AuthState, Route, State};

#[function_component]
pub fn Header() -> Html {
    let (state, _) = use_store::<State>();
    let on_logout = use_logout();

    let nav_link_class = "text-sm font-medium text-neutral-600 \
                          dark:text-neutral-400 hover:text-neutral-900 \
                          dark:hover:text-white";

    let auth_area = match &state.auth_state {
        // Don't flash login buttons before the session check settles
        AuthState::Unknown => html! {},
        AuthState::LoggedOut => html! {
            <div class="flex items-center space-x-4">
                <Link<Route> to={Route::Login} classes={nav_link_class}>
                    {"Sign in"}
                </Link<Route>>
                <Link<Route>
                    to={Route::Register}
                    classes="px-3 py-1.5 rounded-md text-sm font-medium \
                             text-white bg-neutral-900 hover:bg-neutral-800 \
                             dark:bg-neutral-100 dark:text-neutral-900 \
                             dark:hover:bg-neutral-200"
                >
                    {"Register"}
                </Link<Route>>
            </div>
        },
        AuthState::LoggedIn(user) => html! {
            <div class="flex items-center space-x-4">
                if user.is_admin {
                    <Link<Route> to={Route::Users} classes={nav_link_class}>
                        {"Users"}
                    </Link<Route>>
                }
                <Link<Route> to={Route::Profile} classes={nav_link_class}>
                    {&user.name}
                </Link<Route>>
                <button onclick={on_logout} class={nav_link_class}>
                    {"Logout"}
                </button>
            </div>
        },
    };

    html! {
        <header class="bg-white dark:bg-neutral-800 border-b \
                       border-neutral-200 dark:border-neutral-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center space-x-8">
                        <Link<Route>
                            to={Route::Home}
                            classes="text-xl font-semibold text-neutral-900 \
                                     dark:text-white"
                        >
                            {"IdeaForge"}
                        </Link<Route>>
                        <nav class="flex items-center space-x-4">
                            <Link<Route>
                                to={Route::Ideas}
                                classes={nav_link_class}
                            >
                                {"Explore"}
                            </Link<Route>>
                            <Link<Route>
                                to={Route::AddIdea}
                                classes={nav_link_class}
                            >
                                {"Post Idea"}
                            </Link<Route>>
                        </nav>
                    </div>
                    {auth_area}
                </div>
            </div>
        </header>
    }
}
