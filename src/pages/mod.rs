//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod about;
pub mod add_product;
pub mod auth;
pub mod create_pool;
pub mod dashboard;
pub mod home;
pub mod marketplace;
pub mod nearby;
pub mod pool;
pub mod product;
pub mod profile;
pub mod wallet;
