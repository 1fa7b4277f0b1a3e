use payloads::{UserId, requests, responses};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{RequireAuth, Spinner};
use crate::hooks::{use_api, use_title};
use crate::{Route, get_api_client};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: UserId,
}

#[function_component]
pub fn UserEditPage(props: &Props) -> Html {
    use_title("Edit User - IdeaForge");
    let id = props.id;

    html! {
        <RequireAuth admin_only={true} render={Callback::from(move |_admin| html! {
            <UserEditContent id={id} />
        })} />
    }
}

#[function_component]
fn UserEditContent(props: &Props) -> Html {
    let user = use_api(true, |id: UserId| async move {
        get_api_client().get_user(&id).await
    });

    {
        let trigger = user.trigger.clone();
        use_effect_with(props.id, move |id| {
            trigger.emit(*id);
        });
    }

    if user.is_initial_loading() {
        return html! { <Spinner /> };
    }

    match user.data.as_ref() {
        Some(user_data) => html! {
            <div class="max-w-xl mx-auto">
                <UserEditForm user={user_data.clone()} />
            </div>
        },
        None => html! {
            <div class="max-w-xl mx-auto bg-white dark:bg-neutral-800 \
                        rounded-lg shadow p-6 text-center">
                <p class="text-red-600 dark:text-red-400">
                    {user
                        .error
                        .as_ref()
                        .map(|e| e.message.clone())
                        .unwrap_or_else(|| {
                            "Could not load user data".to_string()
                        })}
                </p>
                <Link<Route>
                    to={Route::Users}
                    classes="inline-block mt-4 underline text-neutral-900 \
                             dark:text-neutral-100"
                >
                    {"Back to All Users"}
                </Link<Route>>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct FormProps {
    pub user: responses::UserMe,
}

#[function_component]
fn UserEditForm(props: &FormProps) -> Html {
    let navigator = use_navigator().unwrap();

    let name_ref = use_node_ref();
    let password_ref = use_node_ref();
    let is_active = use_state(|| props.user.is_active);
    let is_admin = use_state(|| props.user.is_admin);
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

    let on_toggle_active = {
        let is_active = is_active.clone();
        Callback::from(move |_: Event| {
            is_active.set(!*is_active);
        })
    };

    let on_toggle_admin = {
        let is_admin = is_admin.clone();
        Callback::from(move |_: Event| {
            is_admin.set(!*is_admin);
        })
    };

    let on_submit = {
        let name_ref = name_ref.clone();
        let password_ref = password_ref.clone();
        let is_active = is_active.clone();
        let is_admin = is_admin.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let navigator = navigator.clone();
        let user = props.user.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name = name_ref
                .cast::<HtmlInputElement>()
                .unwrap()
                .value()
                .trim()
                .to_string();
            let password =
                password_ref.cast::<HtmlInputElement>().unwrap().value();

            error_message.set(None);

            if !password.is_empty()
                && let Some(error) = requests::validate_password(&password)
            {
                error_message.set(Some(error.to_string()));
                return;
            }

            let request = requests::AdminEditUser {
                name: (!name.is_empty() && name != user.name)
                    .then_some(name),
                password: (!password.is_empty()).then_some(password),
                is_active: (*is_active != user.is_active)
                    .then_some(*is_active),
                is_admin: (*is_admin != user.is_admin)
                    .then_some(*is_admin),
            };

            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let navigator = navigator.clone();
            let user_id = user.id;

            yew::platform::spawn_local(async move {
                is_loading.set(true);

                let api_client = get_api_client();
                match api_client
                    .admin_update_user(&user_id, &request)
                    .await
                {
                    Ok(_) => {
                        navigator.push(&Route::UserDetail { id: user_id });
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
                       dark:text-neutral-100 mb-2">
                {format!("Edit User: {}", props.user.username)}
            </h1>
            <p class="text-sm text-neutral-600 dark:text-neutral-400 mb-6">
                {"Usernames can't be changed."}
            </p>

            <form onsubmit={on_submit} class="space-y-4">
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
                        for="password"
                        class="block text-sm font-medium text-neutral-700 \
                               dark:text-neutral-300 mb-2"
                    >
                        {"New Password"}
                    </label>
                    <input
                        ref={password_ref}
                        type="password"
                        id="password"
                        autocomplete="new-password"
                        class={input_class}
                        placeholder="Leave blank to keep the password"
                    />
                </div>

                <label class="flex items-center gap-2 text-sm \
                              text-neutral-700 dark:text-neutral-300">
                    <input
                        type="checkbox"
                        checked={*is_active}
                        onchange={on_toggle_active}
                    />
                    {"Account is active"}
                </label>

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
                    {if *is_loading { "Saving..." } else { "Save Changes" }}
                </button>
            </form>
        </div>
    }
}
