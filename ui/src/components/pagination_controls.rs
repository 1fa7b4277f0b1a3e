use payloads::Page;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Currently displayed page
    pub page: Page,
    /// Total number of pages, from the result envelope
    pub total_pages: i64,
    /// Callback when the user picks a different page
    pub on_navigate: Callback<Page>,
    /// Whether currently loading (to disable buttons)
    #[prop_or(false)]
    pub is_loading: bool,
}

#[function_component]
pub fn PaginationControls(props: &Props) -> Html {
    let Props {
        page,
        total_pages,
        is_loading,
        ..
    } = *props;

    // A single page of results needs no controls.
    if total_pages <= 1 {
        return html! {};
    }

    let is_first_page = page.is_first();
    let is_last_page = page.display_number() >= total_pages;

    let on_previous = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            on_navigate.emit(page.previous());
        })
    };

    let on_next = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            on_navigate.emit(page.next());
        })
    };

    let prev_disabled = is_first_page || is_loading;
    let next_disabled = is_last_page || is_loading;

    let button_class = |disabled: bool| {
        if disabled {
            "px-4 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-400 \
             dark:text-neutral-500 bg-neutral-100 dark:bg-neutral-800 \
             cursor-not-allowed"
        } else {
            "px-4 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-700 \
             dark:text-neutral-300 bg-white dark:bg-neutral-700 \
             hover:bg-neutral-50 dark:hover:bg-neutral-600 \
             transition-colors duration-200"
        }
    };

    html! {
        <div class="flex items-center justify-between mt-4 pt-4 \
                    border-t border-neutral-200 dark:border-neutral-700">
            <button
                onclick={on_previous}
                disabled={prev_disabled}
                class={button_class(prev_disabled)}
            >
                {"Previous"}
            </button>

            <span class="text-sm text-neutral-600 dark:text-neutral-400">
                {format!(
                    "Page {} of {}",
                    page.display_number(),
                    total_pages
                )}
            </span>

            <button
                onclick={on_next}
                disabled={next_disabled}
                class={button_class(next_disabled)}
            >
                {"Next"}
            </button>
        </div>
    }
}
