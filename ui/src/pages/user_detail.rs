use payloads::UserId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ConfirmationModal, RequireAuth, Spinner};
use crate::hooks::{use_api, use_title};
use crate::{Route, get_api_client};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: UserId,
}

#[function_component]
pub fn UserDetailPage(props: &Props) -> Html {
    use_title("User - IdeaForge");
    let id = props.id;

    html! {
        <RequireAuth admin_only={true} render={Callback::from(move |_admin| html! {
            <UserDetailContent id={id} />
        })} />
    }
}

#[function_component]
fn UserDetailContent(props: &Props) -> Html {
    let navigator = use_navigator().unwrap();
    let show_deactivate_modal = use_state(|| false);
    let deactivate_error = use_state(|| None::<String>);
    let is_deactivating = use_state(|| false);

    let user = use_api(true, |id: UserId| async move {
        get_api_client().get_user(&id).await
    });

    {
        let trigger = user.trigger.clone();
        use_effect_with(props.id, move |id| {
            trigger.emit(*id);
        });
    }

    let on_deactivate_click = {
        let show_deactivate_modal = show_deactivate_modal.clone();
        Callback::from(move |_: MouseEvent| {
            show_deactivate_modal.set(true);
        })
    };

    let on_modal_close = {
        let show_deactivate_modal = show_deactivate_modal.clone();
        let deactivate_error = deactivate_error.clone();
        Callback::from(move |_| {
            show_deactivate_modal.set(false);
            deactivate_error.set(None);
        })
    };

    let on_confirm_deactivate = {
        let id = props.id;
        let navigator = navigator.clone();
        let deactivate_error = deactivate_error.clone();
        let is_deactivating = is_deactivating.clone();

        Callback::from(move |_| {
            let navigator = navigator.clone();
            let deactivate_error = deactivate_error.clone();
            let is_deactivating = is_deactivating.clone();

            yew::platform::spawn_local(async move {
                is_deactivating.set(true);
                deactivate_error.set(None);

                let api_client = get_api_client();
                match api_client.deactivate_user(&id).await {
                    Ok(_) => {
                        navigator.push(&Route::Users);
                    }
                    Err(e) => {
                        deactivate_error.set(Some(e.to_string()));
                    }
                }

                is_deactivating.set(false);
            });
        })
    };

    if user.is_initial_loading() {
        return html! { <Spinner /> };
    }

    let Some(user_data) = user.data.as_ref() else {
        let message = user
            .error
            .as_ref()
            .map(|e| e.message.clone())
            .unwrap_or_else(|| "Could not load user data".to_string());
        return html! {
            <div class="max-w-xl mx-auto bg-white dark:bg-neutral-800 \
                        rounded-lg shadow p-6 text-center">
                <h1 class="text-xl font-semibold text-red-600 \
                           dark:text-red-400 mb-4">
                    {"Error"}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400 mb-6">
                    {message}
                </p>
                <Link<Route>
                    to={Route::Users}
                    classes="underline text-neutral-900 \
                             dark:text-neutral-100"
                >
                    {"Back to All Users"}
                </Link<Route>>
            </div>
        };
    };

    let button_class = "px-4 py-2 rounded-md text-sm font-medium \
                        text-white bg-neutral-900 hover:bg-neutral-800 \
                        dark:bg-neutral-100 dark:text-neutral-900 \
                        dark:hover:bg-neutral-200";

    html! {
        <div class="max-w-xl mx-auto bg-white dark:bg-neutral-800 \
                    rounded-lg shadow p-6">
            <h1 class="text-2xl font-bold text-neutral-900 \
                       dark:text-neutral-100 mb-4">
                {format!("User Profile: {}", user_data.name)}
            </h1>

            <div class="space-y-2 text-neutral-700 dark:text-neutral-300">
                <p>
                    <span class="font-semibold">{"Username: "}</span>
                    {&user_data.username}
                </p>
                <p>
                    <span class="font-semibold">{"Name: "}</span>
                    {&user_data.name}
                </p>
                <p>
                    <span class="font-semibold">{"Active: "}</span>
                    {if user_data.is_active { "Yes" } else { "No" }}
                </p>
                <p>
                    <span class="font-semibold">{"Admin: "}</span>
                    {if user_data.is_admin { "Yes" } else { "No" }}
                </p>
            </div>

            <div class="flex flex-col sm:flex-row gap-4 mt-6">
                <Link<Route>
                    to={Route::UserEdit { id: user_data.id }}
                    classes={button_class}
                >
                    {"Edit User"}
                </Link<Route>>
                <Link<Route>
                    to={Route::UserIdeas { id: user_data.id }}
                    classes={button_class}
                >
                    {"View All Ideas"}
                </Link<Route>>
                <button
                    onclick={on_deactivate_click}
                    disabled={*is_deactivating}
                    class="px-4 py-2 rounded-md text-sm font-medium \
                           text-white bg-red-600 hover:bg-red-700 \
                           disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {"Deactivate Account"}
                </button>
            </div>

            if *show_deactivate_modal {
                <ConfirmationModal
                    title="Confirm Deactivation"
                    message={format!(
                        "Are you sure you want to deactivate {}'s account?",
                        user_data.name
                    )}
                    confirm_text="Confirm Deactivate"
                    on_confirm={on_confirm_deactivate}
                    on_close={on_modal_close}
                    is_loading={*is_deactivating}
                    error_message={
                        deactivate_error.as_ref().map(|e| AttrValue::from(e.clone()))
                    }
                />
            }
        </div>
    }
}
