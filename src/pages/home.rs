//! Public landing page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::{Session, SessionState};

/// Hero CTA target: signed-in visitors go straight to their dashboard.
/// Owned because `<A href>` takes a `String`-producing closure.
fn cta_target(state: &SessionState) -> String {
    if state.is_authenticated() {
        "/dashboard".to_owned()
    } else {
        "/auth".to_owned()
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<Session>();

    let cta_href = move || cta_target(&session.state());

    view! {
        <main class="home-page">
            <section class="hero">
                <h1 class="hero__title">"Buy together. Save together."</h1>
                <p class="hero__subtitle">
                    "StreetSaver lets street food vendors pool bulk orders with nearby "
                    "vendors and buy raw materials at wholesale prices."
                </p>
                <div class="hero__actions">
                    <A href=cta_href attr:class="btn btn--primary">
                        "Get Started"
                    </A>
                    <A href="/marketplace" attr:class="btn">
                        "Browse Marketplace"
                    </A>
                </div>
            </section>
            <section class="home-page__features">
                <div class="feature">
                    <h3>"Pool Orders"</h3>
                    <p>"Join forces with nearby vendors to hit supplier minimums."</p>
                </div>
                <div class="feature">
                    <h3>"Wallet Payments"</h3>
                    <p>"Top up once, pay for pools and purchases in one tap."</p>
                </div>
                <div class="feature">
                    <h3>"Nearby Network"</h3>
                    <p>"Find vendors and suppliers around your stall."</p>
                </div>
            </section>
        </main>
    }
}
