use super::*;
use crate::net::types::User;
use crate::state::session::SessionState;

#[test]
fn undecided_waits_and_never_redirects() {
    // Redirecting before the storage read settles would flash-bounce a
    // signed-in user on reload.
    assert_eq!(decide(&SessionState::Undecided), RouteDecision::Wait);
}

#[test]
fn authenticated_renders_the_protected_view() {
    let state = SessionState::Authenticated(User::placeholder());
    assert_eq!(decide(&state), RouteDecision::Render);
}

#[test]
fn unauthenticated_redirects_to_auth_entry() {
    assert_eq!(decide(&SessionState::Unauthenticated), RouteDecision::RedirectToAuth);
}

#[test]
fn decision_follows_bootstrap_outcome() {
    let empty = SessionState::from_storage(None, None);
    assert_eq!(decide(&empty), RouteDecision::RedirectToAuth);

    let stored = SessionState::from_storage(
        Some("abc123".to_owned()),
        Some(r#"{ "_id": "u1", "role": "Vendor" }"#.to_owned()),
    );
    assert_eq!(decide(&stored), RouteDecision::Render);
}
