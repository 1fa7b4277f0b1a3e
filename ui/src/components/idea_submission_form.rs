use payloads::requests;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::get_api_client;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Emitted with the created idea after a successful submission.
    #[prop_or_default]
    pub on_created: Callback<payloads::responses::Idea>,
}

#[function_component]
pub fn IdeaSubmissionForm(props: &Props) -> Html {
    let name_ref = use_node_ref();
    let description_ref = use_node_ref();
    let success_message = use_state(|| None::<String>);
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let on_submit = {
        let name_ref = name_ref.clone();
        let description_ref = description_ref.clone();
        let success_message = success_message.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name_input = name_ref.cast::<HtmlInputElement>().unwrap();
            let description_input =
                description_ref.cast::<HtmlTextAreaElement>().unwrap();

            let name = name_input.value().trim().to_string();
            let description = description_input.value().trim().to_string();

            success_message.set(None);
            error_message.set(None);

            if name.is_empty() || description.is_empty() {
                error_message.set(Some(
                    "Please fill in both a name and a description"
                        .to_string(),
                ));
                return;
            }

            if name.len() > requests::IDEA_NAME_MAX_LEN {
                error_message.set(Some(
                    "Idea name must be at most 255 characters".to_string(),
                ));
                return;
            }

            let success_message = success_message.clone();
            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let on_created = on_created.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);

                let api_client = get_api_client();
                let request = requests::CreateIdea { name, description };

                match api_client.create_idea(&request).await {
                    Ok(idea) => {
                        success_message.set(Some(
                            "Idea submitted successfully!".to_string(),
                        ));
                        // Clear the form only on success; a failed submit
                        // keeps the user's text for another attempt.
                        name_input.set_value("");
                        description_input.set_value("");
                        on_created.emit(idea);
                    }
                    Err(e) => {
                        error_message.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    let input_class = "w-full px-3 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded-md shadow-sm \
                       bg-white dark:bg-neutral-700 \
                       text-neutral-900 dark:text-neutral-100 \
                       focus:outline-none focus:ring-2 \
                       focus:ring-neutral-500 focus:border-neutral-500";

    html! {
        <section class="bg-white dark:bg-neutral-800 rounded-lg shadow p-6">
            <h3 class="text-lg font-semibold text-neutral-900 \
                       dark:text-neutral-100 mb-4">
                {"Submit Your Idea"}
            </h3>

            <form onsubmit={on_submit} class="space-y-4">
                <div>
                    <label
                        for="idea-name"
                        class="block text-sm font-medium text-neutral-700 \
                               dark:text-neutral-300 mb-2"
                    >
                        {"Idea Name"}
                    </label>
                    <input
                        ref={name_ref}
                        type="text"
                        id="idea-name"
                        required={true}
                        class={input_class}
                        placeholder="A short, punchy name"
                    />
                </div>

                <div>
                    <label
                        for="idea-description"
                        class="block text-sm font-medium text-neutral-700 \
                               dark:text-neutral-300 mb-2"
                    >
                        {"Description"}
                    </label>
                    <textarea
                        ref={description_ref}
                        id="idea-description"
                        required={true}
                        rows="4"
                        class={input_class}
                        placeholder="What should be built, and why?"
                    />
                </div>

                <button
                    type="submit"
                    disabled={*is_loading}
                    class="px-4 py-2 rounded-md shadow-sm text-sm \
                           font-medium text-white bg-neutral-900 \
                           hover:bg-neutral-800 dark:bg-neutral-100 \
                           dark:text-neutral-900 dark:hover:bg-neutral-200 \
                           disabled:opacity-50 disabled:cursor-not-allowed \
                           transition-colors duration-200"
                >
                    {if *is_loading { "Submitting..." } else { "Submit Idea" }}
                </button>
            </form>

            if let Some(message) = &*success_message {
                <p class="text-sm text-green-600 dark:text-green-400 mt-4">
                    {message}
                </p>
            }
            if let Some(error) = &*error_message {
                <p class="text-sm text-red-600 dark:text-red-400 mt-4">
                    {error}
                </p>
            }
        </section>
    }
}
