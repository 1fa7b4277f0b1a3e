use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::RequireAuth;
use crate::hooks::use_title;
use crate::utils::time::format_date;

#[function_component]
pub fn ProfilePage() -> Html {
    use_title("My Profile - IdeaForge");

    html! {
        <RequireAuth render={Callback::from(|user: payloads::responses::UserMe| html! {
            <div class="max-w-xl mx-auto bg-white dark:bg-neutral-800 \
                        rounded-lg shadow p-6">
                <h1 class="text-2xl font-bold text-neutral-900 \
                           dark:text-neutral-100 mb-4">
                    {format!("{}'s Profile", user.name)}
                </h1>

                <div class="space-y-2 text-neutral-700 \
                            dark:text-neutral-300">
                    <p>
                        <span class="font-semibold">{"Account Name: "}</span>
                        {&user.username}
                        if user.is_admin {
                            <span class="ml-2 px-2 py-0.5 rounded text-xs \
                                         font-medium bg-neutral-200 \
                                         dark:bg-neutral-600">
                                {"Admin"}
                            </span>
                        }
                    </p>
                    <p>
                        <span class="font-semibold">{"Member since: "}</span>
                        {format_date(user.created_at)}
                    </p>
                    <p>
                        <span class="font-semibold">{"Upvotes: "}</span>
                        {user.upvotes.len()}
                    </p>
                    <p>
                        <span class="font-semibold">{"Downvotes: "}</span>
                        {user.downvotes.len()}
                    </p>
                </div>

                <div class="flex flex-col space-y-1 mt-6">
                    <Link<Route>
                        to={Route::MyIdeas}
                        classes="underline text-neutral-900 \
                                 dark:text-neutral-100"
                    >
                        {"My ideas"}
                    </Link<Route>>
                    <Link<Route>
                        to={Route::ProfileEdit}
                        classes="underline text-neutral-900 \
                                 dark:text-neutral-100"
                    >
                        {"Edit Profile"}
                    </Link<Route>>
                </div>
            </div>
        })} />
    }
}
