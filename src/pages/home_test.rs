use super::cta_target;
use crate::net::types::User;
use crate::state::session::SessionState;

#[test]
fn signed_in_visitors_are_sent_to_the_dashboard() {
    let state = SessionState::Authenticated(User::placeholder());
    assert_eq!(cta_target(&state), "/dashboard");
}

#[test]
fn everyone_else_is_sent_to_sign_in() {
    assert_eq!(cta_target(&SessionState::Unauthenticated), "/auth");
    assert_eq!(cta_target(&SessionState::Undecided), "/auth");
}
