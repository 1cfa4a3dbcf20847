use super::*;

#[test]
fn products_state_defaults() {
    let state = ProductsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn pools_state_defaults() {
    let state = PoolsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}
