use super::purchase_error;
use crate::net::types::Product;

fn onions() -> Product {
    serde_json::from_value(serde_json::json!({
        "_id": "p1",
        "name": "Onions",
        "pricePerKg": 20.0,
        "minOrderQuantity": 5.0,
    }))
    .unwrap()
}

#[test]
fn accepts_affordable_orders_above_the_minimum() {
    assert_eq!(purchase_error(&onions(), 10.0, 200.0), None);
}

#[test]
fn rejects_non_positive_quantities() {
    assert!(purchase_error(&onions(), 0.0, 200.0).is_some());
    assert!(purchase_error(&onions(), -1.0, 200.0).is_some());
    assert!(purchase_error(&onions(), f64::INFINITY, 200.0).is_some());
}

#[test]
fn enforces_the_minimum_order_quantity() {
    let message = purchase_error(&onions(), 4.0, 200.0).unwrap();
    assert!(message.contains("Minimum order"));
}

#[test]
fn no_minimum_means_any_positive_quantity() {
    let mut loose = onions();
    loose.min_order_quantity = None;
    assert_eq!(purchase_error(&loose, 0.5, 200.0), None);
}

#[test]
fn rejects_orders_the_wallet_cannot_cover() {
    let message = purchase_error(&onions(), 10.0, 199.0).unwrap();
    assert!(message.contains("Insufficient"));
    // Exact cover is allowed.
    assert_eq!(purchase_error(&onions(), 10.0, 200.0), None);
}

#[test]
fn legacy_price_field_feeds_the_balance_check() {
    let legacy: Product = serde_json::from_value(serde_json::json!({
        "_id": "p2",
        "name": "Rice",
        "price": 50.0,
    }))
    .unwrap();
    assert!(purchase_error(&legacy, 2.0, 99.0).is_some());
    assert_eq!(purchase_error(&legacy, 2.0, 100.0), None);
}
