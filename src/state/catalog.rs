//! Shared list state for the marketplace and pool screens.
//!
//! Separating fetched inventory from the session keeps identity concerns
//! out of catalog rendering.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::{Pool, Product};

/// Product catalog state backed by `GET /products`.
#[derive(Clone, Debug, Default)]
pub struct ProductsState {
    pub items: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Pool list state backed by `GET /pools`.
#[derive(Clone, Debug, Default)]
pub struct PoolsState {
    pub items: Vec<Pool>,
    pub loading: bool,
    pub error: Option<String>,
}
