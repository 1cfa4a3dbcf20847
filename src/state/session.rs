//! Session lifecycle: the single source of truth for "is someone signed
//! in, and who".
//!
//! DESIGN
//! ======
//! A `{loading, authenticated}` boolean pair invites guard bugs, so the
//! session is a three-variant union and route gating matches on it
//! exhaustively. `Undecided` exists only between process start and the
//! one-time storage bootstrap; it never recurs.
//!
//! CONCURRENCY
//! ===========
//! Two overlapping `login` calls are last-resolved-wins on the shared
//! signal. That race is accepted rather than serialized here: the auth
//! form disables its submit control while a call is in flight.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::auth;
use crate::net::http::{ApiClient, ApiError};
use crate::net::types::{AuthResponse, RegisterRequest, RegisterResponse, User};
use crate::util::geolocation::GeoPoint;
use crate::util::storage;

/// Authentication state for the whole application.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    /// Durable storage has not been read yet. Route guards must neither
    /// render a protected view nor redirect while here.
    Undecided,
    /// A credential is present; the record is the cached server identity.
    Authenticated(User),
    Unauthenticated,
}

impl SessionState {
    /// Decide the post-bootstrap state from raw storage contents.
    ///
    /// A present credential with a missing or unreadable user record still
    /// authenticates, with a placeholder identity; the record is a cache,
    /// not the source of truth. Parse failures are absorbed, never fatal.
    pub fn from_storage(token: Option<String>, raw_user: Option<String>) -> Self {
        if token.is_none() {
            return SessionState::Unauthenticated;
        }
        let user = raw_user
            .as_deref()
            .and_then(|raw| match serde_json::from_str::<User>(raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    log::warn!("stored user record unreadable, using placeholder: {err}");
                    None
                }
            })
            .unwrap_or_else(User::placeholder);
        SessionState::Authenticated(user)
    }

    /// Whether the bootstrap has settled.
    pub fn is_decided(&self) -> bool {
        !matches!(self, SessionState::Undecided)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Handle to the session store.
///
/// Constructed once in `App` and handed down explicitly (context plus
/// component props); every mutation goes through these methods so durable
/// storage and in-memory state stay consistent. Cheap to copy; the only
/// field is a signal id.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::Undecided),
        }
    }

    /// Reactive read of the current state.
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    /// Non-reactive read, for event handlers and tests.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// One-time synchronous bootstrap from durable storage.
    ///
    /// Always leaves the state decided, even when storage is empty or
    /// corrupt. Calling it again after the state has settled is a no-op,
    /// so a stray second invocation cannot clobber a later login.
    pub fn initialize(&self) {
        if self.state.get_untracked().is_decided() {
            return;
        }
        let token = storage::read(storage::TOKEN_KEY);
        let raw_user = storage::read(storage::USER_KEY);
        self.state.set(SessionState::from_storage(token, raw_user));
    }

    /// Sign in and persist the session.
    ///
    /// On success the credential and user record are written to durable
    /// storage before the in-memory state flips to `Authenticated`. On any
    /// failure the state is left exactly as it was, with no partial login.
    ///
    /// # Errors
    ///
    /// Propagates the classified [`ApiError`] for the form to display.
    pub async fn login(
        &self,
        client: &ApiClient,
        email: &str,
        password: &str,
        location: Option<GeoPoint>,
    ) -> Result<AuthResponse, ApiError> {
        let response = auth::login(client, email, password, location).await?;
        auth::persist_session(&response.token, &response.user);
        self.state.set(SessionState::Authenticated(response.user.clone()));
        Ok(response)
    }

    /// Create an account. Deliberately leaves the session untouched:
    /// registration requires a subsequent explicit login.
    ///
    /// # Errors
    ///
    /// Propagates the classified [`ApiError`] for the form to display.
    pub async fn register(&self, client: &ApiClient, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        auth::register(client, request).await
    }

    /// Sign out: clear durable storage and become `Unauthenticated`.
    ///
    /// Callable at any time, idempotent, and infallible.
    pub fn logout(&self) {
        auth::clear_session();
        self.state.set(SessionState::Unauthenticated);
    }

    /// Forced sign-out, wired to the HTTP client's 401 signal. Clears
    /// storage and in-memory state together; clearing one without the
    /// other is a defect.
    pub fn invalidate(&self) {
        self.logout();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
