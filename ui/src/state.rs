use payloads::{UserId, responses};
use yewdux::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    /// Session status not yet checked against the backend.
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(responses::UserMe),
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Authentication (managed by use_authentication) ===
    pub auth_state: AuthState,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::LoggedIn(_))
    }

    pub fn is_admin(&self) -> bool {
        matches!(&self.auth_state, AuthState::LoggedIn(user) if user.is_admin)
    }

    pub fn current_user(&self) -> Option<&responses::UserMe> {
        match &self.auth_state {
            AuthState::LoggedIn(user) => Some(user),
            _ => None,
        }
    }

    pub fn current_user_id(&self) -> Option<UserId> {
        self.current_user().map(|user| user.id)
    }

    pub fn set_logged_in(&mut self, user: responses::UserMe) {
        self.auth_state = AuthState::LoggedIn(user);
    }

    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
        // Future: clear other user-specific state here
    }
}
