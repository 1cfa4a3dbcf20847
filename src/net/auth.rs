//! Authentication collaborator: login, registration, and the persisted
//! session record.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is the only caller of the mutating functions here;
//! pages go through `state::session::Session` so in-memory state and
//! durable storage never diverge.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::http::{ApiClient, ApiError};
use super::types::{AuthResponse, LoginRequest, RegisterRequest, RegisterResponse, User};
use crate::util::geolocation::GeoPoint;
use crate::util::storage;

/// Build the login payload. Location is an opaque best-effort pass-through;
/// the backend may store it against the user record.
fn login_request(email: &str, password: &str, location: Option<GeoPoint>) -> LoginRequest {
    LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
        location: location.map(GeoPoint::to_geojson),
    }
}

/// Exchange credentials for a bearer token and user record.
///
/// # Errors
///
/// `InvalidCredentials` on rejection, `Network` on transport failure.
pub async fn login(
    client: &ApiClient,
    email: &str,
    password: &str,
    location: Option<GeoPoint>,
) -> Result<AuthResponse, ApiError> {
    client.post_unauth("/auth/login", &login_request(email, password, location)).await
}

/// Create an account. Never yields a token; the caller signs in explicitly
/// afterwards.
///
/// # Errors
///
/// `DuplicateAccount`, `Validation`, or `Network`.
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    client.post_unauth("/auth/signup", request).await
}

/// Persist a successful login to durable storage.
pub fn persist_session(token: &str, user: &User) {
    storage::write(storage::TOKEN_KEY, token);
    storage::write_json(storage::USER_KEY, user);
}

/// Remove the persisted session. Local cleanup only; no network call.
pub fn clear_session() {
    storage::remove(storage::TOKEN_KEY);
    storage::remove(storage::USER_KEY);
}

/// Storage-derived synchronous check: a credential is present.
pub fn is_authenticated() -> bool {
    storage::read(storage::TOKEN_KEY).is_some()
}

/// Storage-derived synchronous read of the cached user record. `None`
/// when nothing is stored or the record does not parse.
pub fn current_user() -> Option<User> {
    storage::read(storage::USER_KEY).and_then(|raw| serde_json::from_str(&raw).ok())
}
