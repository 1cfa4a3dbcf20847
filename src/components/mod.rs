//! Reusable view components.
//!
//! ARCHITECTURE
//! ============
//! Components render data handed to them; fetching and session
//! orchestration stay in `pages`.

pub mod navbar;
pub mod pool_card;
pub mod product_card;
pub mod protected_route;
