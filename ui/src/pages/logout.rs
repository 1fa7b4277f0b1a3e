use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

#[function_component]
pub fn LogoutPage() -> Html {
    use_title("Logged out - IdeaForge");

    html! {
        <div class="max-w-md mx-auto mt-16 p-6 bg-white dark:bg-neutral-800 \
                    rounded-lg shadow text-center">
            <h2 class="text-xl font-semibold text-neutral-900 \
                       dark:text-neutral-100 mb-4">
                {"👋 You've been logged out"}
            </h2>
            <p class="text-neutral-600 dark:text-neutral-400 mb-6">
                {"Thanks for visiting IdeaForge!"}
            </p>
            <Link<Route>
                to={Route::Login}
                classes="inline-block px-4 py-2 rounded-md text-sm \
                         font-medium text-white bg-neutral-900 \
                         hover:bg-neutral-800 dark:bg-neutral-100 \
                         dark:text-neutral-900 dark:hover:bg-neutral-200"
            >
                {"Back to Login"}
            </Link<Route>>
        </div>
    }
}
