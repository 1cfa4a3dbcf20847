//! Signed-in landing page: wallet balance, open pools, and the product
//! catalog, with an inline join-pool dialog.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::pool_card::PoolCard;
use crate::components::product_card::ProductCard;
use crate::net::http::ApiClient;
use crate::net::types::{Pool, Product};
use crate::state::catalog::{PoolsState, ProductsState};
use crate::state::session::Session;

/// Advisory pre-check before `POST /pools/{id}/join`. The server re-checks
/// everything; this only exists so the dialog can explain the obvious
/// failures without a round trip.
pub(crate) fn join_quantity_error(
    pool: &Pool,
    user_id: &str,
    quantity: f64,
    unit_price: f64,
    balance: f64,
) -> Option<String> {
    if pool.status != "active" {
        return Some("This pool is no longer accepting vendors.".to_owned());
    }
    if pool.has_vendor(user_id) {
        return Some("You have already joined this pool.".to_owned());
    }
    if !quantity.is_finite() || quantity <= 0.0 {
        return Some("Enter a quantity greater than zero.".to_owned());
    }
    if quantity < pool.min_quantity_per_vendor {
        return Some(format!("Minimum quantity is {} kg.", pool.min_quantity_per_vendor));
    }
    if let Some(max) = pool.max_quantity_per_vendor {
        if quantity > max {
            return Some(format!("Maximum quantity is {max} kg."));
        }
    }
    let remaining = pool.total_required_quantity - pool.current_quantity;
    if quantity > remaining {
        return Some(format!("Only {remaining} kg left in this pool."));
    }
    if quantity * unit_price > balance {
        return Some("Insufficient wallet balance. Please add money first.".to_owned());
    }
    None
}

fn parse_quantity(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let client = expect_context::<ApiClient>();

    let pools = RwSignal::new(PoolsState::default());
    let products = RwSignal::new(ProductsState::default());
    let balance = RwSignal::new(None::<f64>);

    let selected_pool = RwSignal::new(None::<Pool>);
    let quantity_input = RwSignal::new(String::new());
    let dialog_error = RwSignal::new(String::new());
    let joining = RwSignal::new(false);

    let load = {
        let client = client.clone();
        move || {
            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                pools.update(|state| state.loading = true);
                products.update(|state| state.loading = true);
                leptos::task::spawn_local(async move {
                    match crate::net::api::fetch_pools(&client).await {
                        Ok(items) => pools.update(|state| {
                            state.items = items;
                            state.loading = false;
                        }),
                        Err(err) => pools.update(|state| {
                            state.error = Some(err.to_string());
                            state.loading = false;
                        }),
                    }
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
                    if let Ok(wallet) = crate::net::api::fetch_wallet_balance(&client).await {
                        balance.set(Some(wallet.balance));
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &client;
            }
        }
    };
    load();

    let on_join = {
        let client = client.clone();
        let load = load.clone();
        move |_| {
            if joining.get() {
                return;
            }
            let Some(pool) = selected_pool.get() else {
                return;
            };
            let user_id = session.snapshot().user().map(|u| u.id.clone()).unwrap_or_default();
            let Some(quantity) = parse_quantity(&quantity_input.get()) else {
                dialog_error.set("Enter a valid quantity.".to_owned());
                return;
            };
            // Unit price is unknown from the pool list alone; treat an
            // unresolvable price as zero so the balance rule cannot block.
            let unit_price = pool
                .product_id
                .as_deref()
                .and_then(|pid| products.get_untracked().items.iter().find(|p| p.id == pid).map(Product::unit_price))
                .unwrap_or(0.0);
            if let Some(message) =
                join_quantity_error(&pool, &user_id, quantity, unit_price, balance.get_untracked().unwrap_or(0.0))
            {
                dialog_error.set(message);
                return;
            }
            dialog_error.set(String::new());
            joining.set(true);

            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                let load = load.clone();
                let pool_id = pool.id.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::join_pool(&client, &pool_id, quantity).await {
                        Ok(_) => {
                            selected_pool.set(None);
                            quantity_input.set(String::new());
                            load();
                        }
                        Err(err) => dialog_error.set(err.to_string()),
                    }
                    joining.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&client, &load, quantity);
            }
        }
    };

    view! {
        <main class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <div class="dashboard-page__balance">
                    <span>"Wallet: "</span>
                    <strong>
                        {move || balance.get().map_or_else(|| "—".to_owned(), |b| format!("₹{b:.2}"))}
                    </strong>
                    <A href="/wallet" attr:class="btn">
                        "Add Money"
                    </A>
                </div>
            </header>

            <section class="dashboard-page__pools">
                <div class="dashboard-page__section-header">
                    <h2>"Active Pools"</h2>
                    <A href="/create-pool" attr:class="btn btn--primary">
                        "Create Pool"
                    </A>
                </div>
                <Show when=move || pools.get().loading>
                    <p>"Loading pools..."</p>
                </Show>
                <Show when=move || pools.get().error.is_some()>
                    <p class="dashboard-page__error">{move || pools.get().error.unwrap_or_default()}</p>
                </Show>
                <div class="dashboard-page__grid">
                    <For each=move || pools.get().items key=|pool| pool.id.clone() let:pool>
                        <div class="dashboard-page__pool">
                            <PoolCard pool=pool.clone() />
                            <button
                                class="btn"
                                on:click={
                                    let pool = pool.clone();
                                    move |_| {
                                        dialog_error.set(String::new());
                                        quantity_input.set(String::new());
                                        selected_pool.set(Some(pool.clone()));
                                    }
                                }
                            >
                                "Join"
                            </button>
                        </div>
                    </For>
                </div>
            </section>

            <section class="dashboard-page__products">
                <h2>"Products"</h2>
                <div class="dashboard-page__grid">
                    <For each=move || products.get().items key=|product| product.id.clone() let:product>
                        <ProductCard product=product />
                    </For>
                </div>
            </section>

            <Show when=move || selected_pool.get().is_some()>
                <div class="dialog-backdrop">
                    <div class="dialog">
                        <h3>"Join Pool"</h3>
                        <p>
                            {move || {
                                selected_pool
                                    .get()
                                    .and_then(|pool| pool.name)
                                    .unwrap_or_else(|| "Bulk pool".to_owned())
                            }}
                        </p>
                        <input
                            class="dialog__input"
                            type="number"
                            placeholder="Quantity (kg)"
                            prop:value=move || quantity_input.get()
                            on:input=move |ev| quantity_input.set(event_target_value(&ev))
                        />
                        <Show when=move || !dialog_error.get().is_empty()>
                            <p class="dialog__error">{move || dialog_error.get()}</p>
                        </Show>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| selected_pool.set(None)>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" disabled=move || joining.get() on:click=on_join.clone()>
                                {move || if joining.get() { "Joining..." } else { "Confirm" }}
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </main>
    }
}
