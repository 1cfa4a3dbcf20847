//! Wire DTOs for the StreetSaver REST backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde handles the whole
//! client/server boundary. The backend is Mongo-flavored: documents carry
//! `_id`, field names are camelCase, and several fields are optional or
//! inconsistently present across endpoints, so deserialization leans on
//! `alias`/`default` rather than strictness.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role chosen at registration. Vendors buy into pools; suppliers
/// list products and run them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Vendor,
    Supplier,
}

impl Role {
    /// Label used in query strings and form controls.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Vendor => "Vendor",
            Role::Supplier => "Supplier",
        }
    }
}

/// GeoJSON `Point` as stored against user records.
///
/// Coordinate order is `[longitude, latitude]` per the GeoJSON convention,
/// the reverse of the lat/lng order used everywhere else in the UI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonPoint {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

impl GeoJsonPoint {
    /// Build a `Point` from a lat/lng pair.
    pub fn from_lat_lng(lat: f64, lng: f64) -> Self {
        Self {
            kind: "Point".to_owned(),
            coordinates: [lng, lat],
        }
    }

    /// Latitude component.
    pub fn lat(&self) -> f64 {
        self.coordinates[1]
    }

    /// Longitude component.
    pub fn lng(&self) -> f64 {
        self.coordinates[0]
    }
}

/// An authenticated account as returned by the auth and profile endpoints.
///
/// Treated as a cache of server truth; the client never validates it against
/// the bearer token's claims.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub username: String,
    /// Contact email; doubles as the login identifier.
    #[serde(default)]
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Vendor or Supplier.
    #[serde(default)]
    pub role: Role,
    /// Free-form profile text.
    #[serde(default)]
    pub bio: String,
    /// Business name shown on the profile, if set.
    #[serde(default)]
    pub business_name: Option<String>,
    /// Profile picture URL on the external image host, if uploaded.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Last known position, if the user granted location access.
    #[serde(default)]
    pub location: Option<GeoJsonPoint>,
    /// Wallet balance when the endpoint embeds it.
    #[serde(default)]
    pub wallet: Option<f64>,
}

impl User {
    /// Stand-in identity for a session whose stored user record is missing
    /// or failed to parse while a credential is still present.
    pub fn placeholder() -> Self {
        Self {
            id: String::new(),
            username: "Account".to_owned(),
            email: String::new(),
            phone: String::new(),
            role: Role::default(),
            bio: String::new(),
            business_name: None,
            image_url: None,
            location: None,
            wallet: None,
        }
    }
}

/// Successful login response: the bearer credential plus the user record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Login request payload. `location` is a best-effort opaque pass-through;
/// the backend's use of it is unspecified.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoJsonPoint>,
}

/// Registration payload for `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub role: Role,
    pub bio: String,
    pub image_url: String,
    pub location: Option<GeoJsonPoint>,
}

/// Registration response. Registration never logs the user in, so there is
/// no token here.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Generic acknowledgement body used by action endpoints (join, end,
/// purchase, add money).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
    /// Updated wallet balance, when the action touched the wallet.
    #[serde(default)]
    pub balance: Option<f64>,
}

/// A product listed by a supplier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Category label; the backend defaults to `"Other"`.
    #[serde(default = "default_category")]
    pub category: String,
    /// Bulk price per kilogram. Older records carry `price` instead.
    #[serde(default)]
    pub price_per_kg: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    /// Pre-discount reference price, if the supplier set one.
    #[serde(default)]
    pub original_price: Option<f64>,
    /// Minimum order quantity in kilograms.
    #[serde(default, alias = "moq")]
    pub min_order_quantity: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Supplier who listed the product.
    #[serde(default)]
    pub supplier_id: Option<String>,
    /// Cumulative kilograms sold, used for supplier dashboard totals.
    #[serde(default)]
    pub total_sold: f64,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_category() -> String {
    "Other".to_owned()
}

impl Product {
    /// Effective per-kg price: `pricePerKg` when present, else the legacy
    /// `price` field, else zero.
    pub fn unit_price(&self) -> f64 {
        self.price_per_kg.or(self.price).unwrap_or(0.0)
    }
}

/// Payload for `POST /products`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_per_kg: f64,
    pub min_order_quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Payload for `POST /products/purchase`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub product_id: String,
    pub quantity: f64,
}

/// The pool creator as embedded in pool documents: either a bare id or a
/// populated record, depending on the endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatorRef {
    Id(String),
    Record(CreatorRecord),
}

/// Populated creator sub-document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatorRecord {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
}

impl CreatorRef {
    /// Creator's user id regardless of representation.
    pub fn id(&self) -> &str {
        match self {
            CreatorRef::Id(id) => id,
            CreatorRef::Record(record) => &record.id,
        }
    }
}

/// A vendor's stake in a pool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolVendor {
    pub vendor_id: String,
    pub quantity: f64,
}

/// A bulk-order pool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub created_by: Option<CreatorRef>,
    /// Target quantity in kilograms for the pool to complete.
    #[serde(default)]
    pub total_required_quantity: f64,
    /// Quantity pledged so far.
    #[serde(default)]
    pub current_quantity: f64,
    #[serde(default)]
    pub min_quantity_per_vendor: f64,
    #[serde(default)]
    pub max_quantity_per_vendor: Option<f64>,
    /// ISO 8601 deadline after which the pool closes.
    #[serde(default)]
    pub deadline: Option<String>,
    /// `"active"`, `"completed"`, or `"ended"`; server-owned.
    #[serde(default = "default_pool_status")]
    pub status: String,
    #[serde(default)]
    pub joined_vendors: Vec<PoolVendor>,
    /// Server-computed progress percentage, when the endpoint provides it.
    #[serde(default)]
    pub progress_percent: Option<f64>,
    #[serde(default)]
    pub member_count: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_pool_status() -> String {
    "active".to_owned()
}

impl Pool {
    /// Progress toward the target as a percentage in `0..=100`.
    ///
    /// Prefers the server-computed figure; falls back to a local ratio so
    /// list endpoints that omit it still render a meaningful bar.
    pub fn progress(&self) -> f64 {
        if let Some(percent) = self.progress_percent {
            return percent.clamp(0.0, 100.0);
        }
        if self.total_required_quantity <= 0.0 {
            return 0.0;
        }
        (self.current_quantity / self.total_required_quantity * 100.0).clamp(0.0, 100.0)
    }

    /// Whether `user_id` has already joined this pool.
    pub fn has_vendor(&self, user_id: &str) -> bool {
        self.joined_vendors.iter().any(|v| v.vendor_id == user_id)
    }

    /// Quantity `user_id` pledged, if they joined.
    pub fn vendor_quantity(&self, user_id: &str) -> Option<f64> {
        self.joined_vendors
            .iter()
            .find(|v| v.vendor_id == user_id)
            .map(|v| v.quantity)
    }

    /// Whether `user_id` created this pool.
    pub fn is_created_by(&self, user_id: &str) -> bool {
        self.created_by
            .as_ref()
            .is_some_and(|creator| creator.id() == user_id)
    }
}

/// Payload for `POST /pools`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePoolRequest {
    pub product_id: String,
    pub total_required_quantity: f64,
    pub min_quantity_per_vendor: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_quantity_per_vendor: Option<f64>,
    pub deadline: String,
    pub description: String,
}

/// Payload for `POST /pools/{id}/join`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JoinPoolRequest {
    pub quantity: f64,
}

/// Payload for `PUT /profile`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub username: String,
    pub phone: String,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Wallet balance response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WalletBalance {
    #[serde(default)]
    pub balance: f64,
}

/// A wallet ledger entry.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(alias = "_id")]
    pub id: String,
    /// `"credit"` or `"debit"`.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub amount: f64,
    /// Running balance after this entry, when the server includes it.
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
