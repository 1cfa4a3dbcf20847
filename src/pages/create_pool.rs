//! Pool creation form.

#[cfg(test)]
#[path = "create_pool_test.rs"]
mod create_pool_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::http::ApiClient;
use crate::net::types::CreatePoolRequest;
use crate::state::catalog::ProductsState;

/// Form validation, applied before `POST /pools`. Quantities arrive as
/// `Option` because the inputs may be empty or unparseable; the deadline
/// arrives as epoch milliseconds resolved by the caller.
fn form_error(
    product_id: &str,
    total: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
    deadline_ms: Option<f64>,
    now_ms: f64,
) -> Option<String> {
    if product_id.is_empty() {
        return Some("Select a product.".to_owned());
    }
    let Some(total) = total.filter(|value| value.is_finite() && *value > 0.0) else {
        return Some("Total required quantity must be greater than zero.".to_owned());
    };
    let Some(min) = min.filter(|value| value.is_finite() && *value > 0.0) else {
        return Some("Minimum quantity per vendor must be greater than zero.".to_owned());
    };
    if min > total {
        return Some("Minimum per vendor cannot exceed the total quantity.".to_owned());
    }
    if let Some(max) = max {
        if max < min {
            return Some("Maximum per vendor cannot be below the minimum.".to_owned());
        }
    }
    match deadline_ms {
        None => Some("Choose a deadline.".to_owned()),
        Some(deadline) if deadline <= now_ms => Some("Deadline must be in the future.".to_owned()),
        Some(_) => None,
    }
}

fn parse_field(input: &str) -> Option<f64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    input.parse::<f64>().ok()
}

/// Epoch milliseconds for a `datetime-local` input value, browser only.
fn deadline_epoch_ms(value: &str) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        let parsed = js_sys::Date::parse(value);
        if parsed.is_nan() { None } else { Some(parsed) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = value;
        None
    }
}

fn now_epoch_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// ISO 8601 string for an epoch-milliseconds deadline.
fn deadline_iso(ms: f64) -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms)).to_iso_string().into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
        String::new()
    }
}

#[component]
pub fn CreatePoolPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let products = RwSignal::new(ProductsState::default());
    let product_id = RwSignal::new(String::new());
    let total = RwSignal::new(String::new());
    let min = RwSignal::new(String::new());
    let max = RwSignal::new(String::new());
    let deadline = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_products(&client).await {
                Ok(items) => products.update(|state| state.items = items),
                Err(err) => products.update(|state| state.error = Some(err.to_string())),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &client;
    }

    let on_submit = {
        let client = client.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }

            let deadline_ms = deadline_epoch_ms(&deadline.get());
            if let Some(message) = form_error(
                &product_id.get(),
                parse_field(&total.get()),
                parse_field(&min.get()),
                parse_field(&max.get()),
                deadline_ms,
                now_epoch_ms(),
            ) {
                error.set(message);
                return;
            }
            error.set(String::new());
            busy.set(true);

            let request = CreatePoolRequest {
                product_id: product_id.get_untracked(),
                total_required_quantity: parse_field(&total.get_untracked()).unwrap_or(0.0),
                min_quantity_per_vendor: parse_field(&min.get_untracked()).unwrap_or(0.0),
                max_quantity_per_vendor: parse_field(&max.get_untracked()),
                deadline: deadline_iso(deadline_ms.unwrap_or_default()),
                description: description.get_untracked(),
            };

            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::create_pool(&client, &request).await {
                        Ok(_) => navigate("/dashboard", leptos_router::NavigateOptions::default()),
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
        <main class="create-pool-page">
            <h1>"Create Pool"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="create-pool-page__error">{move || error.get()}</p>
            </Show>
            <form class="create-pool-page__form" on:submit=on_submit>
                <select
                    class="form-input"
                    on:change=move |ev| product_id.set(event_target_value(&ev))
                >
                    <option value="">"Select a product"</option>
                    <For each=move || products.get().items key=|product| product.id.clone() let:product>
                        <option
                            value=product.id.clone()
                            selected={
                                let id = product.id.clone();
                                move || product_id.get() == id
                            }
                        >
                            {product.name.clone()}
                        </option>
                    </For>
                </select>
                <input
                    class="form-input"
                    type="number"
                    placeholder="Total required quantity (kg)"
                    prop:value=move || total.get()
                    on:input=move |ev| total.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="number"
                    placeholder="Minimum per vendor (kg)"
                    prop:value=move || min.get()
                    on:input=move |ev| min.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="number"
                    placeholder="Maximum per vendor (kg, optional)"
                    prop:value=move || max.get()
                    on:input=move |ev| max.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="datetime-local"
                    prop:value=move || deadline.get()
                    on:input=move |ev| deadline.set(event_target_value(&ev))
                />
                <textarea
                    class="form-input"
                    placeholder="Description (optional)"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating..." } else { "Create Pool" }}
                </button>
            </form>
        </main>
    }
}
