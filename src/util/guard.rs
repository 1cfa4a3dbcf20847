//! Route gating over the session state.
//!
//! DESIGN
//! ======
//! The decision is a pure, exhaustive function of the session's three
//! states. The subtle case is `Undecided`: redirecting there would bounce
//! an already-signed-in user whose storage read has not settled yet, so
//! the only legal output is "wait".

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::SessionState;

/// Path of the authentication entry point.
pub const AUTH_ROUTE: &str = "/auth";

/// What a protected route should do for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Bootstrap pending: render a neutral placeholder, take no action.
    Wait,
    /// Render the requested view.
    Render,
    /// Send the user to the auth entry point. The attempted destination
    /// is discarded.
    RedirectToAuth,
}

/// Decide how a protected route should behave.
pub fn decide(state: &SessionState) -> RouteDecision {
    match state {
        SessionState::Undecided => RouteDecision::Wait,
        SessionState::Authenticated(_) => RouteDecision::Render,
        SessionState::Unauthenticated => RouteDecision::RedirectToAuth,
    }
}
