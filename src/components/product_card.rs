//! Marketplace card for a single product.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Product;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let detail_href = format!("/product/{}", product.id);
    let unit_price = product.unit_price();
    let moq = product.min_order_quantity;
    let name = product.name.clone();
    let alt = product.name.clone();
    let category = product.category.clone();
    let image = product.image_url.clone();
    let has_image = image.is_some();

    view! {
        <div class="product-card">
            <Show when=move || has_image>
                <img
                    class="product-card__image"
                    src=image.clone().unwrap_or_default()
                    alt=alt.clone()
                />
            </Show>
            <div class="product-card__body">
                <h3 class="product-card__name">{name}</h3>
                <span class="product-card__category">{category}</span>
                <p class="product-card__price">{format!("₹{unit_price}/kg")}</p>
                <Show when=move || moq.is_some()>
                    <p class="product-card__moq">{format!("Min. order {} kg", moq.unwrap_or_default())}</p>
                </Show>
                <A href=detail_href attr:class="btn btn--primary product-card__open">
                    "View"
                </A>
            </div>
        </div>
    }
}
