//! Product detail page with direct wallet purchase.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::http::ApiClient;
use crate::net::types::Product;

/// Advisory pre-check before `POST /products/purchase`; the server owns the
/// real balance and MOQ checks.
fn purchase_error(product: &Product, quantity: f64, balance: f64) -> Option<String> {
    if !quantity.is_finite() || quantity <= 0.0 {
        return Some("Enter a quantity greater than zero.".to_owned());
    }
    if let Some(moq) = product.min_order_quantity {
        if quantity < moq {
            return Some(format!("Minimum order is {moq} kg."));
        }
    }
    if quantity * product.unit_price() > balance {
        return Some("Insufficient wallet balance. Please add money first.".to_owned());
    }
    None
}

#[component]
pub fn ProductPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let params = use_params_map();
    let product_id = move || params.read().get("id").unwrap_or_default();

    let product = RwSignal::new(None::<Product>);
    let load_error = RwSignal::new(String::new());
    let balance = RwSignal::new(0.0_f64);
    let quantity_input = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let client = client.clone();
        let id = product_id();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_product(&client, &id).await {
                Ok(fetched) => product.set(Some(fetched)),
                Err(err) => load_error.set(err.to_string()),
            }
            if let Ok(wallet) = crate::net::api::fetch_wallet_balance(&client).await {
                balance.set(wallet.balance);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &client;
    }

    let on_purchase = {
        let client = client.clone();
        move |_| {
            if busy.get() {
                return;
            }
            let Some(current) = product.get() else {
                return;
            };
            let Ok(quantity) = quantity_input.get().trim().parse::<f64>() else {
                error.set("Enter a valid quantity.".to_owned());
                return;
            };
            if let Some(failure) = purchase_error(&current, quantity, balance.get_untracked()) {
                error.set(failure);
                return;
            }
            error.set(String::new());
            message.set(String::new());
            busy.set(true);

            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                let id = current.id.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::purchase_product(&client, &id, quantity).await {
                        Ok(response) => {
                            message.set(response.message.unwrap_or_else(|| "Purchase successful.".to_owned()));
                            if let Some(updated) = response.balance {
                                balance.set(updated);
                            }
                            quantity_input.set(String::new());
                        }
                        Err(err) => error.set(err.to_string()),
                    }
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&client, quantity);
            }
        }
    };

    view! {
        <main class="product-page">
            <Show when=move || !load_error.get().is_empty()>
                <p class="product-page__error">{move || load_error.get()}</p>
            </Show>
            {move || {
                product.get().map(|current| {
                    let unit_price = current.unit_price();
                    let original = current.original_price;
                    let moq = current.min_order_quantity;
                    let name = current.name.clone();
                    let alt = current.name.clone();
                    let category = current.category.clone();
                    let description = current.description.clone();
                    let image = current.image_url.clone();
                    let has_image = image.is_some();
                    view! {
                        <article class="product-page__card">
                            <Show when=move || has_image>
                                <img
                                    class="product-page__image"
                                    src=image.clone().unwrap_or_default()
                                    alt=alt.clone()
                                />
                            </Show>
                            <h1>{name}</h1>
                            <span class="product-page__category">{category}</span>
                            <p class="product-page__description">{description}</p>
                            <p class="product-page__price">
                                {format!("₹{unit_price}/kg")}
                                <Show when=move || original.is_some()>
                                    <s class="product-page__original">
                                        {format!("₹{}", original.unwrap_or_default())}
                                    </s>
                                </Show>
                            </p>
                            <Show when=move || moq.is_some()>
                                <p class="product-page__moq">
                                    {format!("Minimum order {} kg", moq.unwrap_or_default())}
                                </p>
                            </Show>
                            <p class="product-page__balance">
                                {move || format!("Wallet: ₹{:.2}", balance.get())}
                            </p>
                            <Show when=move || !message.get().is_empty()>
                                <p class="product-page__success">{move || message.get()}</p>
                            </Show>
                            <Show when=move || !error.get().is_empty()>
                                <p class="product-page__error">{move || error.get()}</p>
                            </Show>
                            <div class="product-page__actions">
                                <input
                                    class="form-input"
                                    type="number"
                                    placeholder="Quantity (kg)"
                                    prop:value=move || quantity_input.get()
                                    on:input=move |ev| quantity_input.set(event_target_value(&ev))
                                />
                                <button
                                    class="btn btn--primary"
                                    disabled=move || busy.get()
                                    on:click=on_purchase.clone()
                                >
                                    {move || if busy.get() { "Purchasing..." } else { "Buy Now" }}
                                </button>
                            </div>
                        </article>
                    }
                })
            }}
        </main>
    }
}
