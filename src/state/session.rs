//! Session store: the single source of truth for "who is logged in".
//!
//! Held in an `RwSignal` provided via context; the struct itself stays a
//! plain value so the whole lifecycle — hydration, login, logout, forced
//! teardown — is unit-testable over an in-memory store.
//!
//! The in-memory user is the authoritative authentication source. Durable
//! storage is written only through `apply_login` and `clear_persisted`, and
//! read only during hydration, so the two can never disagree mid-session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{LoginResponse, User};
use crate::util::storage::Store;

/// Durable storage key holding the opaque bearer credential.
pub const TOKEN_KEY: &str = "token";
/// Durable storage key holding the JSON-encoded user record.
pub const USER_KEY: &str = "user";

/// Authentication state: the current user and the initial hydration flag.
///
/// `loading` is true only between startup and the single hydration pass;
/// it is never set back to true for the life of the process.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    /// Empty session awaiting hydration.
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// Hydrate the session from durable storage. Runs once at startup,
    /// synchronously, before the first render.
    ///
    /// A persisted user record that fails to parse is a corrupted session:
    /// both durable entries are cleared and the session starts
    /// unauthenticated instead of failing the application.
    pub fn initialize(store: &Store) -> Self {
        let user = match (store.get(TOKEN_KEY), store.get(USER_KEY)) {
            (Some(_), Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    log::warn!("registro de usuário persistido corrompido, limpando sessão: {err}");
                    clear_persisted(store);
                    None
                }
            },
            _ => None,
        };
        Self {
            user,
            loading: false,
        }
    }

    /// Install a successful login.
    ///
    /// The credential and user record are persisted before the in-memory
    /// user is set, so a reader that observes the new user never finds
    /// storage missing the credential.
    pub fn apply_login(&mut self, store: &Store, payload: &LoginResponse) {
        store.set(TOKEN_KEY, &payload.token);
        if let Ok(raw) = serde_json::to_string(&payload.user) {
            store.set(USER_KEY, &raw);
        }
        self.user = Some(payload.user.clone());
    }

    /// Clear the session, durably and in memory. Idempotent.
    pub fn logout(&mut self, store: &Store) {
        clear_persisted(store);
        self.user = None;
    }

    /// Whether a user is currently logged in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Remove the durable credential and user record.
///
/// Single chokepoint shared by `logout` and the 401 handler in `net::api`.
pub fn clear_persisted(store: &Store) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}

/// What a protected route should do for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Hydration has not finished; show a neutral placeholder, no redirect.
    Loading,
    /// Render the protected content.
    Render,
    /// Send the visitor to the login page, replacing history.
    RedirectToLogin,
}

/// Evaluate the route guard. Called fresh on every render of a protected
/// route; no decision is cached.
pub fn guard(state: &SessionState) -> GuardDecision {
    if state.loading {
        GuardDecision::Loading
    } else if state.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::RedirectToLogin
    }
}
