use payloads::responses;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{AuthForm, AuthMode};
use crate::hooks::use_title;
use crate::{Route, State};

#[function_component]
pub fn RegisterPage() -> Html {
    use_title("Register - IdeaForge");
    let navigator = use_navigator().unwrap();
    let (state, _) = use_store::<State>();

    // Already signed in, nothing to register
    {
        let navigator = navigator.clone();
        let is_authenticated = state.is_authenticated();

        use_effect_with(is_authenticated, move |is_auth| {
            if *is_auth {
                navigator.push(&Route::Home);
            }
        });
    }

    let on_auth_success = {
        let navigator = navigator.clone();
        Callback::from(move |_user: responses::UserMe| {
            navigator.push(&Route::Home);
        })
    };

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-4">
                <AuthForm
                    title="Create your account"
                    description="Join IdeaForge to get started"
                    submit_text="Create account"
                    mode={AuthMode::Register}
                    on_success={on_auth_success}
                />

                <p class="text-center text-sm text-neutral-600 \
                          dark:text-neutral-400">
                    {"Already have an account? "}
                    <Link<Route>
                        to={Route::Login}
                        classes="text-neutral-900 dark:text-neutral-100 \
                                 font-medium underline"
                    >
                        {"Sign in"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
