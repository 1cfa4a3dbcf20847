//! Shared application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the authoritative auth state consumed by the route guard;
//! `catalog` and `wallet` are page-scoped fetch states shared where two
//! screens render the same inventory.

pub mod catalog;
pub mod session;
pub mod wallet;
