use payloads::responses;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::Spinner;
use crate::{AuthState, Route, State};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Rendered once the session is known to be authenticated.
    pub render: Callback<responses::UserMe, Html>,
    /// Additionally require the admin flag; others are sent home.
    #[prop_or(false)]
    pub admin_only: bool,
}

/// Gate on the session state: waits for the startup session check, then
/// either renders the protected content or redirects.
#[function_component]
pub fn RequireAuth(props: &Props) -> Html {
    let (state, _) = use_store::<State>();
    let navigator = use_navigator().unwrap();

    {
        let admin_only = props.admin_only;
        use_effect_with(state.auth_state.clone(), move |auth_state| {
            match auth_state {
                AuthState::LoggedOut => navigator.push(&Route::Login),
                AuthState::LoggedIn(user)
                    if admin_only && !user.is_admin =>
                {
                    navigator.push(&Route::Home)
                }
                _ => {}
            }
        });
    }

    match &state.auth_state {
        AuthState::Unknown => html! { <Spinner /> },
        AuthState::LoggedIn(user)
            if !props.admin_only || user.is_admin =>
        {
            props.render.emit(user.clone())
        }
        // Redirect is in flight
        _ => html! {},
    }
}
