use super::*;

#[test]
fn wallet_state_defaults() {
    let state = WalletState::default();
    assert!(state.balance.is_none());
    assert!(state.transactions.is_empty());
    assert!(!state.loading);
    assert!(!state.depositing);
    assert!(state.error.is_none());
}
