use payloads::{requests, responses};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, get_api_client};

#[derive(Clone, Copy, PartialEq)]
pub enum AuthMode {
    Login,
    Register,
}

#[derive(Properties, PartialEq)]
pub struct AuthFormProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub submit_text: AttrValue,
    pub mode: AuthMode,
    pub on_success: Callback<responses::UserMe>,
}

#[function_component]
pub fn AuthForm(props: &AuthFormProps) -> Html {
    let (_state, dispatch) = use_store::<State>();

    let username_ref = use_node_ref();
    let name_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_password_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    // Shared login flow: also used to sign in right after registration.
    let perform_login = {
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let on_success = props.on_success.clone();
        let dispatch = dispatch.clone();

        Callback::from(move |credentials: requests::LoginCredentials| {
            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let on_success = on_success.clone();
            let dispatch = dispatch.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);

                let api_client = get_api_client();
                match api_client.login(&credentials).await {
                    Ok(_) => {
                        // Fetch the account after a successful login
                        match api_client.me().await {
                            Ok(user) => {
                                dispatch.reduce_mut(|state| {
                                    state.set_logged_in(user.clone());
                                });
                                on_success.emit(user);
                            }
                            Err(_) => {
                                error_message.set(Some(
                                    "Login succeeded but failed to load \
                                     your account"
                                        .to_string(),
                                ));
                            }
                        }
                    }
                    Err(e) => {
                        dispatch.reduce_mut(|state| {
                            state.logout();
                        });
                        error_message.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    let on_submit = {
        let username_ref = username_ref.clone();
        let name_ref = name_ref.clone();
        let password_ref = password_ref.clone();
        let confirm_password_ref = confirm_password_ref.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let mode = props.mode;
        let perform_login = perform_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let username_input =
                username_ref.cast::<HtmlInputElement>().unwrap();
            let password_input =
                password_ref.cast::<HtmlInputElement>().unwrap();

            let username = username_input.value();
            let password = password_input.value();

            if username.is_empty() || password.is_empty() {
                error_message.set(Some(
                    "Please enter both username and password".to_string(),
                ));
                return;
            }

            match mode {
                AuthMode::Login => {
                    let credentials =
                        requests::LoginCredentials { username, password };
                    perform_login.emit(credentials);
                }
                AuthMode::Register => {
                    let name_input =
                        name_ref.cast::<HtmlInputElement>().unwrap();
                    let confirm_password_input = confirm_password_ref
                        .cast::<HtmlInputElement>()
                        .unwrap();

                    let name = name_input.value();
                    let confirm_password = confirm_password_input.value();

                    if let Some(error) =
                        requests::validate_username(&username)
                            .error_message()
                    {
                        error_message.set(Some(error.to_string()));
                        return;
                    }

                    if name.trim().is_empty() {
                        error_message
                            .set(Some("Please enter your name".to_string()));
                        return;
                    }

                    if let Some(error) =
                        requests::validate_password(&password)
                    {
                        error_message.set(Some(error.to_string()));
                        return;
                    }

                    if password != confirm_password {
                        error_message
                            .set(Some("Passwords do not match".to_string()));
                        return;
                    }

                    let register_request = requests::Register {
                        username: username.clone(),
                        name: name.trim().to_string(),
                        password: password.clone(),
                    };

                    let error_message = error_message.clone();
                    let is_loading = is_loading.clone();
                    let perform_login = perform_login.clone();

                    yew::platform::spawn_local(async move {
                        is_loading.set(true);
                        error_message.set(None);

                        let api_client = get_api_client();
                        match api_client.register(&register_request).await {
                            Ok(_) => {
                                // Account created, sign the user in with the
                                // same credentials
                                perform_login.emit(
                                    requests::LoginCredentials {
                                        username: register_request.username,
                                        password: register_request.password,
                                    },
                                );
                            }
                            Err(e) => {
                                error_message.set(Some(e.to_string()));
                                is_loading.set(false);
                            }
                        }
                    });
                }
            }
        })
    };

    let input_class = "w-full px-3 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded-md shadow-sm \
                       bg-white dark:bg-neutral-700 \
                       text-neutral-900 dark:text-neutral-100 \
                       focus:outline-none focus:ring-2 \
                       focus:ring-neutral-500 focus:border-neutral-500";

    html! {
        <div class="max-w-md w-full bg-white dark:bg-neutral-800 p-8 \
                    rounded-lg shadow-md">
            <div class="mb-8 text-center">
                <h1 class="text-2xl font-bold text-neutral-900 \
                           dark:text-neutral-100 mb-2">
                    {&props.title}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {&props.description}
                </p>
            </div>

            <form onsubmit={on_submit} class="space-y-6">
                if let Some(error) = &*error_message {
                    <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 \
                                border border-red-200 dark:border-red-800">
                        <p class="text-sm text-red-700 dark:text-red-400">
                            {error}
                        </p>
                    </div>
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
                        name="username"
                        autocomplete="username"
                        required={true}
                        class={input_class}
                        placeholder="Enter your username"
                    />
                </div>

                if props.mode == AuthMode::Register {
                    <div>
                        <label
                            for="name"
                            class="block text-sm font-medium \
                                   text-neutral-700 dark:text-neutral-300 \
                                   mb-2"
                        >
                            {"Name"}
                        </label>
                        <input
                            ref={name_ref}
                            type="text"
                            id="name"
                            name="name"
                            autocomplete="name"
                            required={true}
                            class={input_class}
                            placeholder="The name shown to other users"
                        />
                    </div>
                }

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
                        name="password"
                        autocomplete={if props.mode == AuthMode::Register { "new-password" } else { "current-password" }}
                        required={true}
                        class={input_class}
                        placeholder={if props.mode == AuthMode::Register { "Choose a password" } else { "Enter your password" }}
                    />
                </div>

                if props.mode == AuthMode::Register {
                    <div>
                        <label
                            for="confirm-password"
                            class="block text-sm font-medium \
                                   text-neutral-700 dark:text-neutral-300 \
                                   mb-2"
                        >
                            {"Confirm Password"}
                        </label>
                        <input
                            ref={confirm_password_ref}
                            type="password"
                            id="confirm-password"
                            name="confirm-password"
                            autocomplete="new-password"
                            required={true}
                            class={input_class}
                            placeholder="Confirm your password"
                        />
                    </div>
                }

                <button
                    type="submit"
                    disabled={*is_loading}
                    class="w-full flex justify-center py-2 px-4 border \
                           border-transparent rounded-md shadow-sm text-sm \
                           font-medium text-white bg-neutral-900 \
                           hover:bg-neutral-800 dark:bg-neutral-100 \
                           dark:text-neutral-900 dark:hover:bg-neutral-200 \
                           disabled:opacity-50 disabled:cursor-not-allowed \
                           transition-colors duration-200"
                >
                    if *is_loading {
                        {match props.mode {
                            AuthMode::Login => "Signing in...",
                            AuthMode::Register => "Creating account...",
                        }}
                    } else {
                        {&props.submit_text}
                    }
                </button>
            </form>
        </div>
    }
}
