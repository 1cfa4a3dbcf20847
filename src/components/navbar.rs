//! Top navigation bar shared by all pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;

/// Site-wide navigation. Shows the signed-in identity and sign-out action
/// when a session is present, a sign-in link otherwise.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let display_name = move || {
        session
            .state()
            .user()
            .map(|user| user.username.clone())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session.logout();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">
                "StreetSaver"
            </A>
            <div class="navbar__links">
                <A href="/marketplace">"Marketplace"</A>
                <A href="/about">"About"</A>
                <Show when=move || session.state().is_authenticated()>
                    <A href="/dashboard">"Dashboard"</A>
                    <A href="/wallet">"Wallet"</A>
                    <A href="/nearby">"Nearby"</A>
                    <A href="/profile">"Profile"</A>
                </Show>
            </div>
            <div class="navbar__session">
                <Show
                    when=move || session.state().is_authenticated()
                    fallback=|| {
                        view! {
                            <A href="/auth" attr:class="btn btn--primary">
                                "Sign In"
                            </A>
                        }
                    }
                >
                    <span class="navbar__user">{display_name}</span>
                    <button class="btn navbar__logout" on:click=on_logout.clone()>
                        "Sign Out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
