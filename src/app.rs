//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::net::http::ApiClient;
use crate::pages::{
    about::AboutPage, add_product::AddProductPage, auth::AuthPage, create_pool::CreatePoolPage,
    dashboard::DashboardPage, home::HomePage, marketplace::MarketplacePage, nearby::NearbyPage, pool::PoolPage,
    product::ProductPage, profile::ProfilePage, wallet::WalletPage,
};
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session singleton and the API client, wires expiry handling,
/// and sets up client-side routing. The session bootstrap runs only in the
/// browser, so server renders leave protected routes in their waiting state
/// instead of flashing a redirect.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    let client = ApiClient::with_session_invalidated(move || {
        session.invalidate();
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(crate::util::guard::AUTH_ROUTE);
        }
    });

    provide_context(session);
    provide_context(client);

    #[cfg(feature = "hydrate")]
    session.initialize();

    let protected = move |page: fn() -> AnyView| {
        move || {
            view! {
                <ProtectedRoute session=session>
                    {page()}
                </ProtectedRoute>
            }
        }
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/streetsaver.css"/>
        <Title text="StreetSaver"/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("marketplace") view=MarketplacePage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=protected(|| DashboardPage().into_any())
                />
                <Route
                    path=StaticSegment("create-pool")
                    view=protected(|| CreatePoolPage().into_any())
                />
                <Route
                    path=(StaticSegment("pool"), ParamSegment("id"))
                    view=protected(|| PoolPage().into_any())
                />
                <Route
                    path=StaticSegment("profile")
                    view=protected(|| ProfilePage().into_any())
                />
                <Route
                    path=StaticSegment("wallet")
                    view=protected(|| WalletPage().into_any())
                />
                <Route
                    path=StaticSegment("add-product")
                    view=protected(|| AddProductPage().into_any())
                />
                <Route
                    path=(StaticSegment("product"), ParamSegment("id"))
                    view=protected(|| ProductPage().into_any())
                />
                <Route
                    path=StaticSegment("nearby")
                    view=protected(|| NearbyPage().into_any())
                />
            </Routes>
        </Router>
    }
}
