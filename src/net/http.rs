//! REST plumbing: bearer attachment, error classification, 401 signaling.
//!
//! ERROR HANDLING
//! ==============
//! Every request resolves to `Result<T, ApiError>` so pages can show a
//! classified, human-readable message next to the form that caused it. A
//! 401 on an authenticated request additionally fires the injected
//! session-invalidated callback; ownership of the forced logout stays with
//! the session store that callback points at, not with this module.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Default mount point of the REST backend.
const API_BASE: &str = "/api";

/// Classified request failure, ready for display.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ApiError {
    /// Login rejected by the backend. No retry automation; the user
    /// resubmits.
    #[error("Invalid email or password.")]
    InvalidCredentials,
    /// Registration hit an existing account.
    #[error("An account with this email already exists.")]
    DuplicateAccount,
    /// The backend rejected the request; carries the server-supplied
    /// message verbatim when one was present.
    #[error("{0}")]
    Validation(String),
    /// Transport-level failure reaching the backend.
    #[error("Cannot connect to server. Please check your connection.")]
    Network(String),
    /// The stored credential is no longer accepted. Surfaced only as the
    /// forced-logout side effect, not for inline handling.
    #[error("Your session has expired. Please sign in again.")]
    SessionExpired,
    /// Request issued outside the browser build (SSR or native tests).
    #[error("Network requests are only available in the browser.")]
    Unsupported,
}

impl PartialEq for ApiError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ApiError::Validation(a), ApiError::Validation(b)) | (ApiError::Network(a), ApiError::Network(b)) => a == b,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

/// Error body shape used across the backend: `{ "message": "..." }`.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Map a non-2xx status to an `ApiError`.
///
/// `auth_attempt` marks login/register calls, whose 401 means "wrong
/// credentials" rather than "session expired".
fn classify_status(status: u16, message: Option<String>, auth_attempt: bool) -> ApiError {
    match status {
        401 if auth_attempt => ApiError::InvalidCredentials,
        401 => ApiError::SessionExpired,
        409 => ApiError::DuplicateAccount,
        _ => ApiError::Validation(message.unwrap_or_else(|| format!("Request failed ({status})."))),
    }
}

/// `Authorization` header value for a stored credential.
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Join the API base with an endpoint path.
fn join_url(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
enum Verb {
    Get,
    Post,
    Put,
    Patch,
}

/// Shared REST client handed to every service call.
///
/// Cloneable and cheap; the only state is the base path and the wired
/// session-invalidated callback. Lives in context, so the callback is
/// `Send + Sync` even though requests only run on the browser thread.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    on_session_invalidated: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl ApiClient {
    /// Client with no invalidation wiring (tests, tools).
    pub fn new() -> Self {
        Self {
            base: API_BASE.to_owned(),
            on_session_invalidated: None,
        }
    }

    /// Client that reports 401s on authenticated requests to `callback`.
    pub fn with_session_invalidated(callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            base: API_BASE.to_owned(),
            on_session_invalidated: Some(Arc::new(callback)),
        }
    }

    fn notify_session_invalidated(&self) {
        if let Some(callback) = &self.on_session_invalidated {
            callback();
        }
    }

    /// Authenticated GET.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.request(Verb::Get, path, None, false).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unsupported)
        }
    }

    /// Authenticated POST with a JSON body.
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = to_body(body)?;
            self.request(Verb::Post, path, Some(body), false).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unsupported)
        }
    }

    /// Unauthenticated POST for login/register: no bearer header, and a 401
    /// classifies as `InvalidCredentials` without firing the invalidation
    /// callback.
    pub async fn post_unauth<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = to_body(body)?;
            self.request(Verb::Post, path, Some(body), true).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unsupported)
        }
    }

    /// Authenticated PUT with a JSON body.
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = to_body(body)?;
            self.request(Verb::Put, path, Some(body), false).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unsupported)
        }
    }

    /// Authenticated PATCH without a body.
    pub async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.request(Verb::Patch, path, None, false).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unsupported)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn request<T: DeserializeOwned>(
        &self,
        verb: Verb,
        path: &str,
        body: Option<serde_json::Value>,
        auth_attempt: bool,
    ) -> Result<T, ApiError> {
        use gloo_net::http::Request;

        let url = join_url(&self.base, path);
        let builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Patch => Request::patch(&url),
        };

        let builder = match crate::util::storage::read(crate::util::storage::TOKEN_KEY) {
            Some(token) if !auth_attempt => builder.header("Authorization", &bearer_value(&token)),
            _ => builder,
        };

        let response = match body {
            Some(value) => builder
                .json(&value)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            return response.json::<T>().await.map_err(|e| ApiError::Network(e.to_string()));
        }

        let message = response.json::<ErrorBody>().await.ok().and_then(|b| b.message);
        let error = classify_status(response.status(), message, auth_attempt);
        if matches!(error, ApiError::SessionExpired) {
            self.notify_session_invalidated();
        }
        Err(error)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "hydrate")]
fn to_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Network(e.to_string()))
}
