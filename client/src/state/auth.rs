//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` as `RwSignal<AuthState>`. Route guards, the navbar,
//! and the home page read it; the login page fills it and logout clears it.
//! Nothing is persisted, so a reload always starts signed out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Session;

/// Authentication state: the session returned by the token endpoint, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// Bearer token for authenticated requests.
    pub fn access_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access_token.as_str())
    }

    pub fn login(&mut self, session: Session) {
        self.session = Some(session);
    }

    pub fn logout(&mut self) {
        self.session = None;
    }
}
