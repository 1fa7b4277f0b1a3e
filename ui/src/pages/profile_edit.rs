use payloads::{requests, responses};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::RequireAuth;
use crate::hooks::use_title;
use crate::{State, get_api_client};

#[function_component]
pub fn ProfileEditPage() -> Html {
    use_title("Edit Profile - IdeaForge");

    html! {
        <RequireAuth render={Callback::from(|user: responses::UserMe| html! {
            <div class="max-w-xl mx-auto">
                <ProfileEditForm user={user} />
            </div>
        })} />
    }
}

#[derive(Properties, PartialEq)]
struct FormProps {
    pub user: responses::UserMe,
}

#[function_component]
fn ProfileEditForm(props: &FormProps) -> Html {
    let (_state, dispatch) = use_store::<State>();

    let name_ref = use_node_ref();
    let old_password_ref = use_node_ref();
    let new_password_ref = use_node_ref();
    let confirm_password_ref = use_node_ref();
    let success_message = use_state(|| None::<String>);
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    // Prefill the name once; a `value` attribute would reset the field on
    // every re-render.
    {
        let name_ref = name_ref.clone();
        let initial_name = props.user.name.clone();
        use_effect_with((), move |_| {
            if let Some(input) = name_ref.cast::<HtmlInputElement>() {
                input.set_value(&initial_name);
            }
        });
    }

    let on_submit = {
        let name_ref = name_ref.clone();
        let old_password_ref = old_password_ref.clone();
        let new_password_ref = new_password_ref.clone();
        let confirm_password_ref = confirm_password_ref.clone();
        let success_message = success_message.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let dispatch = dispatch.clone();
        let current_name = props.user.name.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name = name_ref
                .cast::<HtmlInputElement>()
                .unwrap()
                .value()
                .trim()
                .to_string();
            let old_password =
                old_password_ref.cast::<HtmlInputElement>().unwrap().value();
            let new_password =
                new_password_ref.cast::<HtmlInputElement>().unwrap().value();
            let confirm_password = confirm_password_ref
                .cast::<HtmlInputElement>()
                .unwrap()
                .value();

            success_message.set(None);
            error_message.set(None);

            let wants_name_change =
                !name.is_empty() && name != current_name;
            let wants_password_change = !new_password.is_empty();

            if !wants_name_change && !wants_password_change {
                error_message
                    .set(Some("Nothing to update yet".to_string()));
                return;
            }

            if wants_password_change {
                if old_password.is_empty() {
                    error_message.set(Some(
                        "Enter your current password to set a new one"
                            .to_string(),
                    ));
                    return;
                }
                if let Some(error) =
                    requests::validate_password(&new_password)
                {
                    error_message.set(Some(error.to_string()));
                    return;
                }
                if new_password != confirm_password {
                    error_message
                        .set(Some("Passwords do not match".to_string()));
                    return;
                }
            }

            let request = requests::UpdateProfile {
                name: wants_name_change.then_some(name),
                old_password: wants_password_change
                    .then_some(old_password),
                new_password: wants_password_change
                    .then_some(new_password),
            };

            let success_message = success_message.clone();
            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let dispatch = dispatch.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);

                let api_client = get_api_client();
                match api_client.update_me(&request).await {
                    Ok(updated) => {
                        dispatch.reduce_mut(|state| {
                            state.set_logged_in(updated);
                        });
                        success_message
                            .set(Some("Profile updated".to_string()));
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
        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow p-6">
            <h1 class="text-2xl font-bold text-neutral-900 \
                       dark:text-neutral-100 mb-6">
                {"Edit Profile"}
            </h1>

            <form onsubmit={on_submit} class="space-y-4">
                if let Some(message) = &*success_message {
                    <p class="text-sm text-green-600 dark:text-green-400">
                        {message}
                    </p>
                }
                if let Some(error) = &*error_message {
                    <p class="text-sm text-red-600 dark:text-red-400">
                        {error}
                    </p>
                }

                <div>
                    <label
                        for="name"
                        class="block text-sm font-medium text-neutral-700 \
                               dark:text-neutral-300 mb-2"
                    >
                        {"Name"}
                    </label>
                    <input
                        ref={name_ref}
                        type="text"
                        id="name"
                        class={input_class}
                    />
                </div>

                <div>
                    <label
                        for="old-password"
                        class="block text-sm font-medium text-neutral-700 \
                               dark:text-neutral-300 mb-2"
                    >
                        {"Current Password"}
                    </label>
                    <input
                        ref={old_password_ref}
                        type="password"
                        id="old-password"
                        autocomplete="current-password"
                        class={input_class}
                        placeholder="Only needed to change your password"
                    />
                </div>

                <div>
                    <label
                        for="new-password"
                        class="block text-sm font-medium text-neutral-700 \
                               dark:text-neutral-300 mb-2"
                    >
                        {"New Password"}
                    </label>
                    <input
                        ref={new_password_ref}
                        type="password"
                        id="new-password"
                        autocomplete="new-password"
                        class={input_class}
                        placeholder="Leave blank to keep your password"
                    />
                </div>

                <div>
                    <label
                        for="confirm-password"
                        class="block text-sm font-medium text-neutral-700 \
                               dark:text-neutral-300 mb-2"
                    >
                        {"Confirm New Password"}
                    </label>
                    <input
                        ref={confirm_password_ref}
                        type="password"
                        id="confirm-password"
                        autocomplete="new-password"
                        class={input_class}
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
                    {if *is_loading { "Saving..." } else { "Save Changes" }}
                </button>
            </form>
        </div>
    }
}
