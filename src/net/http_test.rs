use super::*;

// =============================================================
// Status classification
// =============================================================

#[test]
fn classify_401_on_login_is_invalid_credentials() {
    let error = classify_status(401, None, true);
    assert_eq!(error, ApiError::InvalidCredentials);
}

#[test]
fn classify_401_on_authenticated_request_is_session_expired() {
    let error = classify_status(401, None, false);
    assert_eq!(error, ApiError::SessionExpired);
}

#[test]
fn classify_409_is_duplicate_account() {
    let error = classify_status(409, Some("exists".to_owned()), true);
    assert_eq!(error, ApiError::DuplicateAccount);
}

#[test]
fn classify_400_surfaces_server_message_verbatim() {
    let error = classify_status(400, Some("Phone number is required".to_owned()), false);
    assert_eq!(error.to_string(), "Phone number is required");
}

#[test]
fn classify_500_without_message_uses_generic_fallback() {
    let error = classify_status(500, None, false);
    assert_eq!(error.to_string(), "Request failed (500).");
}

#[test]
fn network_error_display_is_connection_message() {
    let error = ApiError::Network("timed out".to_owned());
    assert_eq!(error.to_string(), "Cannot connect to server. Please check your connection.");
}

// =============================================================
// Request plumbing helpers
// =============================================================

#[test]
fn bearer_value_formats_header() {
    assert_eq!(bearer_value("abc123"), "Bearer abc123");
}

#[test]
fn join_url_concatenates_base_and_path() {
    assert_eq!(join_url("/api", "/pools/p1/join"), "/api/pools/p1/join");
}

#[test]
fn client_invokes_wired_invalidation_callback() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    let fired = Arc::new(AtomicBool::new(false));
    let fired_in_callback = Arc::clone(&fired);
    let client = ApiClient::with_session_invalidated(move || fired_in_callback.store(true, Ordering::SeqCst));

    client.notify_session_invalidated();
    assert!(fired.load(Ordering::SeqCst));
}

#[test]
fn client_without_callback_tolerates_notification() {
    ApiClient::new().notify_session_invalidated();
}
