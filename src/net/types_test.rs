use super::*;

// =============================================================
// User / Role
// =============================================================

#[test]
fn user_parses_mongo_shaped_record() {
    let json = r#"{
        "_id": "u1",
        "username": "asha",
        "email": "asha@example.com",
        "phone": "9000000000",
        "role": "Vendor",
        "imageUrl": "https://img.example/p.png"
    }"#;
    let user: User = serde_json::from_str(json).expect("user should parse");
    assert_eq!(user.id, "u1");
    assert_eq!(user.username, "asha");
    assert_eq!(user.role, Role::Vendor);
    assert_eq!(user.image_url.as_deref(), Some("https://img.example/p.png"));
    assert!(user.location.is_none());
}

#[test]
fn user_parses_supplier_role() {
    let json = r#"{ "id": "u2", "role": "Supplier" }"#;
    let user: User = serde_json::from_str(json).expect("user should parse");
    assert_eq!(user.role, Role::Supplier);
}

#[test]
fn user_role_defaults_to_vendor_when_absent() {
    let json = r#"{ "id": "u3" }"#;
    let user: User = serde_json::from_str(json).expect("user should parse");
    assert_eq!(user.role, Role::Vendor);
}

#[test]
fn user_placeholder_has_generic_name() {
    let user = User::placeholder();
    assert_eq!(user.username, "Account");
    assert!(user.id.is_empty());
}

#[test]
fn role_labels_match_backend_strings() {
    assert_eq!(Role::Vendor.as_str(), "Vendor");
    assert_eq!(Role::Supplier.as_str(), "Supplier");
}

// =============================================================
// GeoJSON point
// =============================================================

#[test]
fn geojson_point_orders_lng_before_lat() {
    let point = GeoJsonPoint::from_lat_lng(12.97, 77.59);
    assert_eq!(point.coordinates, [77.59, 12.97]);
    assert_eq!(point.kind, "Point");
}

#[test]
fn geojson_point_accessors_invert_wire_order() {
    let point: GeoJsonPoint =
        serde_json::from_str(r#"{ "type": "Point", "coordinates": [77.59, 12.97] }"#)
            .expect("point should parse");
    assert!((point.lat() - 12.97).abs() < f64::EPSILON);
    assert!((point.lng() - 77.59).abs() < f64::EPSILON);
}

#[test]
fn geojson_point_serializes_type_field() {
    let raw = serde_json::to_string(&GeoJsonPoint::from_lat_lng(1.0, 2.0)).expect("serialize");
    assert!(raw.contains("\"type\":\"Point\""));
}

// =============================================================
// Product
// =============================================================

#[test]
fn product_unit_price_prefers_price_per_kg() {
    let json = r#"{ "_id": "p1", "name": "Onions", "pricePerKg": 22.0, "price": 30.0 }"#;
    let product: Product = serde_json::from_str(json).expect("product should parse");
    assert!((product.unit_price() - 22.0).abs() < f64::EPSILON);
}

#[test]
fn product_unit_price_falls_back_to_legacy_price() {
    let json = r#"{ "_id": "p2", "name": "Rice", "price": 55.0 }"#;
    let product: Product = serde_json::from_str(json).expect("product should parse");
    assert!((product.unit_price() - 55.0).abs() < f64::EPSILON);
}

#[test]
fn product_unit_price_zero_when_unpriced() {
    let json = r#"{ "_id": "p3", "name": "Salt" }"#;
    let product: Product = serde_json::from_str(json).expect("product should parse");
    assert!(product.unit_price().abs() < f64::EPSILON);
}

#[test]
fn product_category_defaults_to_other() {
    let json = r#"{ "_id": "p4", "name": "Jute bags" }"#;
    let product: Product = serde_json::from_str(json).expect("product should parse");
    assert_eq!(product.category, "Other");
}

#[test]
fn product_moq_alias_is_accepted() {
    let json = r#"{ "_id": "p5", "name": "Oil", "moq": 10.0 }"#;
    let product: Product = serde_json::from_str(json).expect("product should parse");
    assert_eq!(product.min_order_quantity, Some(10.0));
}

// =============================================================
// Pool
// =============================================================

#[test]
fn pool_progress_prefers_server_figure() {
    let json = r#"{
        "_id": "pl1",
        "totalRequiredQuantity": 100.0,
        "currentQuantity": 10.0,
        "progressPercent": 42.0
    }"#;
    let pool: Pool = serde_json::from_str(json).expect("pool should parse");
    assert!((pool.progress() - 42.0).abs() < f64::EPSILON);
}

#[test]
fn pool_progress_computes_local_ratio_when_missing() {
    let json = r#"{
        "_id": "pl2",
        "totalRequiredQuantity": 200.0,
        "currentQuantity": 50.0
    }"#;
    let pool: Pool = serde_json::from_str(json).expect("pool should parse");
    assert!((pool.progress() - 25.0).abs() < f64::EPSILON);
}

#[test]
fn pool_progress_clamps_overshoot() {
    let json = r#"{
        "_id": "pl3",
        "totalRequiredQuantity": 100.0,
        "currentQuantity": 150.0
    }"#;
    let pool: Pool = serde_json::from_str(json).expect("pool should parse");
    assert!((pool.progress() - 100.0).abs() < f64::EPSILON);
}

#[test]
fn pool_progress_zero_target_is_zero_not_nan() {
    let pool: Pool = serde_json::from_str(r#"{ "_id": "pl4" }"#).expect("pool should parse");
    assert!(pool.progress().abs() < f64::EPSILON);
}

#[test]
fn pool_vendor_membership_lookup() {
    let json = r#"{
        "_id": "pl5",
        "joinedVendors": [
            { "vendorId": "u1", "quantity": 5.0 },
            { "vendorId": "u2", "quantity": 8.0 }
        ]
    }"#;
    let pool: Pool = serde_json::from_str(json).expect("pool should parse");
    assert!(pool.has_vendor("u2"));
    assert!(!pool.has_vendor("u9"));
    assert_eq!(pool.vendor_quantity("u1"), Some(5.0));
    assert_eq!(pool.vendor_quantity("u9"), None);
}

#[test]
fn pool_status_defaults_to_active() {
    let pool: Pool = serde_json::from_str(r#"{ "_id": "pl6" }"#).expect("pool should parse");
    assert_eq!(pool.status, "active");
}

#[test]
fn pool_creator_parses_bare_id() {
    let json = r#"{ "_id": "pl7", "createdBy": "u1" }"#;
    let pool: Pool = serde_json::from_str(json).expect("pool should parse");
    assert!(pool.is_created_by("u1"));
    assert!(!pool.is_created_by("u2"));
}

#[test]
fn pool_creator_parses_populated_record() {
    let json = r#"{ "_id": "pl8", "createdBy": { "_id": "u1", "username": "asha" } }"#;
    let pool: Pool = serde_json::from_str(json).expect("pool should parse");
    assert!(pool.is_created_by("u1"));
}

// =============================================================
// Wallet
// =============================================================

#[test]
fn transaction_type_field_maps_to_kind() {
    let json = r#"{ "_id": "t1", "type": "credit", "amount": 500.0 }"#;
    let tx: Transaction = serde_json::from_str(json).expect("transaction should parse");
    assert_eq!(tx.kind, "credit");
    assert!((tx.amount - 500.0).abs() < f64::EPSILON);
}

#[test]
fn login_request_omits_absent_location() {
    let raw = serde_json::to_string(&LoginRequest {
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
        location: None,
    })
    .expect("serialize");
    assert!(!raw.contains("location"));
}

#[test]
fn login_request_includes_location_when_present() {
    let raw = serde_json::to_string(&LoginRequest {
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
        location: Some(GeoJsonPoint::from_lat_lng(12.0, 77.0)),
    })
    .expect("serialize");
    assert!(raw.contains("\"coordinates\":[77.0,12.0]"));
}
