//! REST service calls for products, pools, profile, wallet, and nearby
//! lookups.
//!
//! One async function per backend endpoint, all routed through
//! [`ApiClient`] so bearer attachment and 401 handling stay uniform.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{ApiClient, ApiError};
use super::types::{
    CreatePoolRequest, CreateProductRequest, JoinPoolRequest, MessageResponse, Pool, Product, PurchaseRequest, Role,
    Transaction, UpdateProfileRequest, User, WalletBalance,
};

fn product_endpoint(id: &str) -> String {
    format!("/products/{id}")
}

fn pool_endpoint(id: &str) -> String {
    format!("/pools/{id}")
}

fn pool_join_endpoint(id: &str) -> String {
    format!("/pools/{id}/join")
}

fn pool_end_endpoint(id: &str) -> String {
    format!("/pools/{id}/end")
}

fn nearby_endpoint(lat: f64, lng: f64, role: Role) -> String {
    format!("/distance/nearby?lat={lat}&lng={lng}&role={}", role.as_str())
}

// =============================================================
// Products
// =============================================================

/// Fetch the full product catalog.
pub async fn fetch_products(client: &ApiClient) -> Result<Vec<Product>, ApiError> {
    client.get("/products").await
}

/// Fetch one product by id.
pub async fn fetch_product(client: &ApiClient, id: &str) -> Result<Product, ApiError> {
    client.get(&product_endpoint(id)).await
}

/// List a new product (suppliers only, enforced server-side).
pub async fn create_product(client: &ApiClient, request: &CreateProductRequest) -> Result<Product, ApiError> {
    client.post("/products", request).await
}

/// Buy a quantity of a product with wallet funds. The server owns the
/// balance check; the client's pre-check is advisory UX only.
pub async fn purchase_product(client: &ApiClient, product_id: &str, quantity: f64) -> Result<MessageResponse, ApiError> {
    let request = PurchaseRequest {
        product_id: product_id.to_owned(),
        quantity,
    };
    client.post("/products/purchase", &request).await
}

// =============================================================
// Pools
// =============================================================

/// Fetch all pools.
pub async fn fetch_pools(client: &ApiClient) -> Result<Vec<Pool>, ApiError> {
    client.get("/pools").await
}

/// Fetch one pool by id.
pub async fn fetch_pool(client: &ApiClient, id: &str) -> Result<Pool, ApiError> {
    client.get(&pool_endpoint(id)).await
}

/// Open a new pool.
pub async fn create_pool(client: &ApiClient, request: &CreatePoolRequest) -> Result<Pool, ApiError> {
    client.post("/pools", request).await
}

/// Pledge a quantity into a pool.
pub async fn join_pool(client: &ApiClient, pool_id: &str, quantity: f64) -> Result<MessageResponse, ApiError> {
    client.post(&pool_join_endpoint(pool_id), &JoinPoolRequest { quantity }).await
}

/// Close a pool early. Only the creator may do this; enforced server-side.
pub async fn end_pool(client: &ApiClient, pool_id: &str) -> Result<MessageResponse, ApiError> {
    client.patch_empty(&pool_end_endpoint(pool_id)).await
}

// =============================================================
// Profile
// =============================================================

/// Fetch the authenticated user's profile.
pub async fn fetch_profile(client: &ApiClient) -> Result<User, ApiError> {
    client.get("/profile").await
}

/// Update the authenticated user's profile.
pub async fn update_profile(client: &ApiClient, request: &UpdateProfileRequest) -> Result<User, ApiError> {
    client.put("/profile", request).await
}

// =============================================================
// Wallet
// =============================================================

/// Fetch the current wallet balance.
pub async fn fetch_wallet_balance(client: &ApiClient) -> Result<WalletBalance, ApiError> {
    client.get("/wallet/balance").await
}

/// Fetch the wallet transaction history.
pub async fn fetch_transactions(client: &ApiClient) -> Result<Vec<Transaction>, ApiError> {
    client.get("/wallet/transactions").await
}

/// Credit the wallet.
pub async fn add_money(client: &ApiClient, amount: f64) -> Result<MessageResponse, ApiError> {
    client.post("/wallet/add", &serde_json::json!({ "amount": amount })).await
}

// =============================================================
// Nearby
// =============================================================

/// Fetch participants with the given role near a position.
pub async fn fetch_nearby(client: &ApiClient, lat: f64, lng: f64, role: Role) -> Result<Vec<User>, ApiError> {
    client.get(&nearby_endpoint(lat, lng, role)).await
}
