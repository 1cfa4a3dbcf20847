//! Wallet page: balance, top-up, and transaction history.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use leptos::prelude::*;

use crate::net::http::ApiClient;
use crate::state::wallet::WalletState;

/// Parse and validate a top-up amount from the form input.
fn parse_deposit(input: &str) -> Result<f64, String> {
    let Ok(amount) = input.trim().parse::<f64>() else {
        return Err("Enter a valid amount.".to_owned());
    };
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Amount must be greater than zero.".to_owned());
    }
    Ok(amount)
}

fn transaction_sign(kind: &str) -> &'static str {
    if kind == "debit" { "-" } else { "+" }
}

#[component]
pub fn WalletPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let wallet = RwSignal::new(WalletState::default());
    let amount_input = RwSignal::new(String::new());

    let load = {
        let client = client.clone();
        move || {
            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                wallet.update(|state| state.loading = true);
                leptos::task::spawn_local(async move {
                    match crate::net::api::fetch_wallet_balance(&client).await {
                        Ok(balance) => wallet.update(|state| state.balance = Some(balance.balance)),
                        Err(err) => wallet.update(|state| state.error = Some(err.to_string())),
                    }
                    match crate::net::api::fetch_transactions(&client).await {
                        Ok(transactions) => wallet.update(|state| {
                            state.transactions = transactions;
                            state.loading = false;
                        }),
                        Err(err) => wallet.update(|state| {
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
        }
    };
    load();

    let on_deposit = {
        let client = client.clone();
        let load = load.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if wallet.get().depositing {
                return;
            }
            let amount = match parse_deposit(&amount_input.get()) {
                Ok(amount) => amount,
                Err(message) => {
                    wallet.update(|state| state.error = Some(message));
                    return;
                }
            };
            wallet.update(|state| {
                state.error = None;
                state.depositing = true;
            });

            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                let load = load.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::add_money(&client, amount).await {
                        Ok(response) => {
                            if let Some(updated) = response.balance {
                                wallet.update(|state| state.balance = Some(updated));
                            }
                            amount_input.set(String::new());
                            load();
                        }
                        Err(err) => wallet.update(|state| state.error = Some(err.to_string())),
                    }
                    wallet.update(|state| state.depositing = false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&client, &load, amount);
            }
        }
    };

    view! {
        <main class="wallet-page">
            <h1>"Wallet"</h1>
            <div class="wallet-page__balance">
                <span>"Balance"</span>
                <strong>
                    {move || {
                        wallet.get().balance.map_or_else(|| "—".to_owned(), |b| format!("₹{b:.2}"))
                    }}
                </strong>
            </div>
            <Show when=move || wallet.get().error.is_some()>
                <p class="wallet-page__error">{move || wallet.get().error.unwrap_or_default()}</p>
            </Show>
            <form class="wallet-page__deposit" on:submit=on_deposit>
                <input
                    class="form-input"
                    type="number"
                    placeholder="Amount (₹)"
                    prop:value=move || amount_input.get()
                    on:input=move |ev| amount_input.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || wallet.get().depositing>
                    {move || if wallet.get().depositing { "Adding..." } else { "Add Money" }}
                </button>
            </form>
            <section class="wallet-page__history">
                <h2>"Transactions"</h2>
                <Show when=move || wallet.get().loading>
                    <p>"Loading transactions..."</p>
                </Show>
                <ul>
                    <For
                        each=move || wallet.get().transactions
                        key=|transaction| transaction.id.clone()
                        let:transaction
                    >
                        <li class=format!("wallet-page__entry wallet-page__entry--{}", transaction.kind)>
                            <span class="wallet-page__entry-title">
                                {transaction
                                    .title
                                    .clone()
                                    .or(transaction.description.clone())
                                    .unwrap_or_else(|| "Transaction".to_owned())}
                            </span>
                            <span class="wallet-page__entry-amount">
                                {format!("{}₹{}", transaction_sign(&transaction.kind), transaction.amount)}
                            </span>
                            <span class="wallet-page__entry-date">
                                {transaction.date.clone().unwrap_or_default()}
                            </span>
                        </li>
                    </For>
                </ul>
                <Show when=move || !wallet.get().loading && wallet.get().transactions.is_empty()>
                    <p class="wallet-page__empty">"No transactions yet."</p>
                </Show>
            </section>
        </main>
    }
}
