use yew::prelude::*;

/// Small inline loading indicator.
#[function_component]
pub fn Spinner() -> Html {
    html! {
        <div class="flex items-center justify-center py-4">
            <div
                class="h-6 w-6 rounded-full border-2 border-neutral-300
                       dark:border-neutral-600 border-t-neutral-900
                       dark:border-t-neutral-100 animate-spin"
                role="status"
                aria-label="Loading"
            />
        </div>
    }
}
