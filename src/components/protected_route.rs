//! Guard wrapper applied to every authenticated-only route.
//!
//! SYSTEM CONTEXT
//! ==============
//! All protected routes must gate identically: wait while the session is
//! undecided, render once authenticated, redirect once known-unauthenticated.
//! The decision itself lives in `util::guard` so it stays a pure function.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::util::guard::{self, RouteDecision};

/// Wrap a protected view. Renders `children` only for an authenticated
/// session; shows a neutral placeholder while the bootstrap is pending.
#[component]
pub fn ProtectedRoute(session: Session, children: ChildrenFn) -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        if guard::decide(&session.state()) == RouteDecision::RedirectToAuth {
            navigate(guard::AUTH_ROUTE, NavigateOptions::default());
        }
    });

    view! {
        {move || match guard::decide(&session.state()) {
            RouteDecision::Wait => view! {
                <main class="route-guard route-guard--waiting">
                    <p>"Loading..."</p>
                </main>
            }
            .into_any(),
            RouteDecision::RedirectToAuth => view! {
                <main class="route-guard">
                    <p>"Redirecting to sign in..."</p>
                </main>
            }
            .into_any(),
            RouteDecision::Render => children().into_any(),
        }}
    }
}
