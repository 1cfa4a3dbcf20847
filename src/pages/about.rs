//! Public about page. Static copy only.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <main class="about-page">
            <h1>"About StreetSaver"</h1>
            <p>
                "Street food vendors buy raw materials in small quantities at retail "
                "prices. StreetSaver pools demand from vendors in the same area so a "
                "single bulk order reaches supplier minimums and everyone pays the "
                "wholesale rate."
            </p>
            <p>
                "Vendors browse the marketplace, join or create pools, and pay from a "
                "prepaid wallet. Suppliers list products and fulfil pooled orders once "
                "a pool reaches its target quantity."
            </p>
        </main>
    }
}
