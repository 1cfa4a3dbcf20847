//! Supplier product listing form.

#[cfg(test)]
#[path = "add_product_test.rs"]
mod add_product_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::http::ApiClient;
use crate::net::types::CreateProductRequest;

const CATEGORIES: [&str; 6] = ["Vegetables", "Grains", "Oils", "Spices", "Dairy", "Other"];

fn product_form_error(name: &str, price: Option<f64>, moq: Option<f64>) -> Option<String> {
    if name.trim().is_empty() {
        return Some("Product name is required.".to_owned());
    }
    if price.filter(|value| value.is_finite() && *value > 0.0).is_none() {
        return Some("Price per kg must be greater than zero.".to_owned());
    }
    if moq.filter(|value| value.is_finite() && *value > 0.0).is_none() {
        return Some("Minimum order quantity must be greater than zero.".to_owned());
    }
    None
}

fn parse_field(input: &str) -> Option<f64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    input.parse::<f64>().ok()
}

#[component]
pub fn AddProductPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new("Other".to_owned());
    let price = RwSignal::new(String::new());
    let moq = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = {
        let client = client.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let price_value = parse_field(&price.get());
            let moq_value = parse_field(&moq.get());
            if let Some(message) = product_form_error(&name.get(), price_value, moq_value) {
                error.set(message);
                return;
            }
            error.set(String::new());
            busy.set(true);

            let image = image_url.get_untracked().trim().to_owned();
            let request = CreateProductRequest {
                name: name.get_untracked().trim().to_owned(),
                description: description.get_untracked().trim().to_owned(),
                category: category.get_untracked(),
                price_per_kg: price_value.unwrap_or(0.0),
                min_order_quantity: moq_value.unwrap_or(0.0),
                image_url: if image.is_empty() { None } else { Some(image) },
            };

            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::create_product(&client, &request).await {
                        Ok(_) => navigate("/marketplace", leptos_router::NavigateOptions::default()),
                        Err(err) => {
                            error.set(err.to_string());
                            busy.set(false);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&client, &navigate, request);
            }
        }
    };

    view! {
        <main class="add-product-page">
            <h1>"Add Product"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="add-product-page__error">{move || error.get()}</p>
            </Show>
            <form class="add-product-page__form" on:submit=on_submit>
                <input
                    class="form-input"
                    type="text"
                    placeholder="Product name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <textarea
                    class="form-input"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <select class="form-input" on:change=move |ev| category.set(event_target_value(&ev))>
                    {CATEGORIES
                        .iter()
                        .map(|label| {
                            view! {
                                <option value=*label selected=move || category.get() == *label>
                                    {*label}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <input
                    class="form-input"
                    type="number"
                    placeholder="Price per kg (₹)"
                    prop:value=move || price.get()
                    on:input=move |ev| price.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="number"
                    placeholder="Minimum order quantity (kg)"
                    prop:value=move || moq.get()
                    on:input=move |ev| moq.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="url"
                    placeholder="Image URL (optional)"
                    prop:value=move || image_url.get()
                    on:input=move |ev| image_url.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Listing..." } else { "List Product" }}
                </button>
            </form>
        </main>
    }
}
