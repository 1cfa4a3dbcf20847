//! Public product marketplace with client-side search.

#[cfg(test)]
#[path = "marketplace_test.rs"]
mod marketplace_test;

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::net::http::ApiClient;
use crate::net::types::Product;
use crate::state::catalog::ProductsState;

/// Case-insensitive substring match on product name and category.
/// An empty or whitespace query matches everything.
fn matches_query(product: &Product, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(&query) || product.category.to_lowercase().contains(&query)
}

#[component]
pub fn MarketplacePage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let products = RwSignal::new(ProductsState::default());
    let query = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let client = client.clone();
        products.update(|state| state.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_products(&client).await {
                Ok(items) => products.update(|state| {
                    state.items = items;
                    state.loading = false;
                }),
                Err(err) => products.update(|state| {
                    state.error = Some(err.to_string());
                    state.loading = false;
                }),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &client;
    }

    let visible = move || {
        let query = query.get();
        products
            .get()
            .items
            .into_iter()
            .filter(|product| matches_query(product, &query))
            .collect::<Vec<_>>()
    };

    view! {
        <main class="marketplace-page">
            <h1>"Marketplace"</h1>
            <input
                class="marketplace-page__search"
                type="search"
                placeholder="Search products or categories"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <Show when=move || products.get().loading>
                <p class="marketplace-page__loading">"Loading products..."</p>
            </Show>
            <Show when=move || products.get().error.is_some()>
                <p class="marketplace-page__error">
                    {move || products.get().error.unwrap_or_default()}
                </p>
            </Show>
            <div class="marketplace-page__grid">
                <For each=visible.clone() key=|product| product.id.clone() let:product>
                    <ProductCard product=product />
                </For>
            </div>
            <Show when=move || !products.get().loading && visible().is_empty()>
                <p class="marketplace-page__empty">"No products match your search."</p>
            </Show>
        </main>
    }
}
