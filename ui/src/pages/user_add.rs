use payloads::requests;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::RequireAuth;
use crate::hooks::use_title;
use crate::{Route, get_api_client};

#[function_component]
pub fn UserAddPage() -> Html {
    use_title("Add User - IdeaForge");

    html! {
        <RequireAuth admin_only={true} render={Callback::from(|_admin| html! {
            <div class="max-w-xl mx-auto">
                <UserAddForm />
            </div>
        })} />
    }
}

#[function_component]
fn UserAddForm() -> Html {
    let navigator = use_navigator().unwrap();

    let username_ref = use_node_ref();
    let name_ref = use_node_ref();
    let password_ref = use_node_ref();
    let is_admin = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let on_toggle_admin = {
        let is_admin = is_admin.clone();
        Callback::from(move |_: Event| {
            is_admin.set(!*is_admin);
        })
    };

    let on_submit = {
        let username_ref = username_ref.clone();
        let name_ref = name_ref.clone();
        let password_ref = password_ref.clone();
        let is_admin = is_admin.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let username =
                username_ref.cast::<HtmlInputElement>().unwrap().value();
            let name = name_ref
                .cast::<HtmlInputElement>()
                .unwrap()
                .value()
                .trim()
                .to_string();
            let password =
                password_ref.cast::<HtmlInputElement>().unwrap().value();

            error_message.set(None);

            if let Some(error) =
                requests::validate_username(&username).error_message()
            {
                error_message.set(Some(error.to_string()));
                return;
            }
            if name.is_empty() {
                error_message
                    .set(Some("Please enter a name".to_string()));
                return;
            }
            if let Some(error) = requests::validate_password(&password) {
                error_message.set(Some(error.to_string()));
                return;
            }

            let request = requests::AdminCreateUser {
                username,
                name,
                password,
                is_admin: *is_admin,
            };

            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let navigator = navigator.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);

                let api_client = get_api_client();
                match api_client.admin_create_user(&request).await {
                    Ok(_) => {
                        navigator.push(&Route::Users);
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
                {"Add User"}
            </h1>

            <form onsubmit={on_submit} class="space-y-4">
                if let Some(error) = &*error_message {
                    <p class="text-sm text-red-600 dark:text-red-400">
                        {error}
                    </p>
                }

                <div>
                    <label
                        for="username"
                        class="block text-sm font-medium text-neutral-700 \
                               dark:text-neutral-300 mb-2"
                    >
                        {"Username"}
                    </label>
                    <input
                        ref={username_ref}
                        type="text"
                        id="username"
                        required={true}
                        class={input_class}
                    />
                </div>

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
                        required={true}
                        class={input_class}
                    />
                </div>

                <div>
                    <label
                        for="password"
                        class="block text-sm font-medium text-neutral-700 \
                               dark:text-neutral-300 mb-2"
                    >
                        {"Password"}
                    </label>
                    <input
                        ref={password_ref}
                        type="password"
                        id="password"
                        autocomplete="new-password"
                        required={true}
                        class={input_class}
                    />
                </div>

                <label class="flex items-center gap-2 text-sm \
                              text-neutral-700 dark:text-neutral-300">
                    <input
                        type="checkbox"
                        checked={*is_admin}
                        onchange={on_toggle_admin}
                    />
                    {"Administrator"}
                </label>

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
                    {if *is_loading { "Creating..." } else { "Create User" }}
                </button>
            </form>
        </div>
    }
}
