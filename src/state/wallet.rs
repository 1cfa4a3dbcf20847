//! Wallet page state: balance, ledger, and deposit-in-flight flag.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use crate::net::types::Transaction;

/// State backing the wallet screen.
#[derive(Clone, Debug, Default)]
pub struct WalletState {
    /// Current balance; `None` until the first successful fetch.
    pub balance: Option<f64>,
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    /// A deposit request is in flight; the form disables itself.
    pub depositing: bool,
    pub error: Option<String>,
}
