//! Pool detail page: progress, member list, deadline countdown, and the
//! join/end actions.

#[cfg(test)]
#[path = "pool_test.rs"]
mod pool_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::http::ApiClient;
use crate::net::types::Pool;
use crate::pages::dashboard::join_quantity_error;
use crate::state::session::Session;

/// Render a whole-second countdown. Non-positive means the deadline passed.
fn format_remaining(total_seconds: i64) -> String {
    if total_seconds <= 0 {
        return "Expired".to_owned();
    }
    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;
    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else {
        format!("{minutes}m {seconds}s")
    }
}

#[component]
pub fn PoolPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let client = expect_context::<ApiClient>();
    let params = use_params_map();
    let pool_id = move || params.read().get("id").unwrap_or_default();

    let pool = RwSignal::new(None::<Pool>);
    let load_error = RwSignal::new(String::new());
    let remaining_seconds = RwSignal::new(None::<i64>);
    let quantity_input = RwSignal::new(String::new());
    let action_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let balance = RwSignal::new(0.0_f64);

    let load = {
        let client = client.clone();
        move || {
            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                let id = pool_id();
                leptos::task::spawn_local(async move {
                    match crate::net::api::fetch_pool(&client, &id).await {
                        Ok(fetched) => pool.set(Some(fetched)),
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
        }
    };
    load();

    // Tick the countdown once a second from the pool's deadline.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(1_000).await;
            let deadline = pool
                .get_untracked()
                .and_then(|pool| pool.deadline)
                .map(|iso| js_sys::Date::parse(&iso));
            match deadline {
                Some(deadline_ms) if !deadline_ms.is_nan() => {
                    let seconds = ((deadline_ms - js_sys::Date::now()) / 1_000.0) as i64;
                    remaining_seconds.set(Some(seconds));
                }
                _ => remaining_seconds.set(None),
            }
        }
    });

    let user_id = move || session.snapshot().user().map(|u| u.id.clone()).unwrap_or_default();

    let on_join = {
        let client = client.clone();
        let load = load.clone();
        move |_| {
            if busy.get() {
                return;
            }
            let Some(current) = pool.get() else {
                return;
            };
            let Ok(quantity) = quantity_input.get().trim().parse::<f64>() else {
                action_error.set("Enter a valid quantity.".to_owned());
                return;
            };
            // Unit price is unknown on the detail page; the server enforces
            // the wallet check on join.
            if let Some(message) = join_quantity_error(&current, &user_id(), quantity, 0.0, balance.get_untracked()) {
                action_error.set(message);
                return;
            }
            action_error.set(String::new());
            busy.set(true);

            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                let load = load.clone();
                let id = current.id.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::join_pool(&client, &id, quantity).await {
                        Ok(_) => {
                            quantity_input.set(String::new());
                            load();
                        }
                        Err(err) => action_error.set(err.to_string()),
                    }
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&client, &load, quantity);
            }
        }
    };

    let on_end = {
        let client = client.clone();
        let load = load.clone();
        move |_| {
            if busy.get() {
                return;
            }
            let Some(current) = pool.get() else {
                return;
            };
            busy.set(true);
            action_error.set(String::new());

            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                let load = load.clone();
                let id = current.id.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::end_pool(&client, &id).await {
                        Ok(_) => load(),
                        Err(err) => action_error.set(err.to_string()),
                    }
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&client, &load, current);
            }
        }
    };

    view! {
        <main class="pool-page">
            <Show when=move || !load_error.get().is_empty()>
                <p class="pool-page__error">{move || load_error.get()}</p>
            </Show>
            {move || {
                pool.get().map(|current| {
                    let on_join = on_join.clone();
                    let on_end = on_end.clone();
                    let progress = current.progress();
                    let title = current.name.clone().unwrap_or_else(|| "Bulk pool".to_owned());
                    let status = current.status.clone();
                    let is_creator = current.is_created_by(&user_id());
                    let joined_quantity = current.vendor_quantity(&user_id());
                    let members = current.joined_vendors.clone();
                    view! {
                        <article class="pool-page__card">
                            <header class="pool-page__header">
                                <h1>{title}</h1>
                                <span class=format!("pool-page__status pool-page__status--{status}")>
                                    {status.clone()}
                                </span>
                            </header>
                            <Show when=move || remaining_seconds.get().is_some()>
                                <p class="pool-page__countdown">
                                    "Closes in "
                                    {move || format_remaining(remaining_seconds.get().unwrap_or_default())}
                                </p>
                            </Show>
                            <div class="pool-page__progress">
                                <div class="pool-page__progress-bar" style=format!("width: {progress}%")></div>
                            </div>
                            <p class="pool-page__quantities">
                                {format!(
                                    "{} / {} kg pledged",
                                    current.current_quantity,
                                    current.total_required_quantity,
                                )}
                            </p>
                            <Show when={
                                let joined = joined_quantity;
                                move || joined.is_some()
                            }>
                                <p class="pool-page__joined">
                                    {format!("You pledged {} kg", joined_quantity.unwrap_or_default())}
                                </p>
                            </Show>
                            <section class="pool-page__members">
                                <h2>{format!("Members ({})", members.len())}</h2>
                                <ul>
                                    {members
                                        .iter()
                                        .map(|member| {
                                            view! { <li>{format!("{} kg", member.quantity)}</li> }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </section>
                            <Show when=move || !action_error.get().is_empty()>
                                <p class="pool-page__error">{move || action_error.get()}</p>
                            </Show>
                            <div class="pool-page__actions">
                                <input
                                    class="form-input"
                                    type="number"
                                    placeholder="Quantity (kg)"
                                    prop:value=move || quantity_input.get()
                                    on:input=move |ev| quantity_input.set(event_target_value(&ev))
                                />
                                <button class="btn btn--primary" disabled=move || busy.get() on:click=on_join.clone()>
                                    "Join Pool"
                                </button>
                                <Show when=move || is_creator>
                                    <button class="btn btn--danger" disabled=move || busy.get() on:click=on_end.clone()>
                                        "End Pool"
                                    </button>
                                </Show>
                            </div>
                        </article>
                    }
                })
            }}
        </main>
    }
}
