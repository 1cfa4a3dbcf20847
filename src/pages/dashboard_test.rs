use super::{join_quantity_error, parse_quantity};
use crate::net::types::Pool;

fn pool(json: serde_json::Value) -> Pool {
    serde_json::from_value(json).unwrap()
}

fn open_pool() -> Pool {
    pool(serde_json::json!({
        "_id": "pool1",
        "totalRequiredQuantity": 100.0,
        "currentQuantity": 40.0,
        "minQuantityPerVendor": 5.0,
        "maxQuantityPerVendor": 30.0,
        "joinedVendors": [{ "vendorId": "other", "quantity": 40.0 }],
    }))
}

#[test]
fn accepts_a_quantity_inside_every_bound() {
    assert_eq!(join_quantity_error(&open_pool(), "me", 10.0, 20.0, 500.0), None);
}

#[test]
fn rejects_inactive_pools() {
    let mut ended = open_pool();
    ended.status = "ended".to_owned();
    let message = join_quantity_error(&ended, "me", 10.0, 20.0, 500.0).unwrap();
    assert!(message.contains("no longer"));
}

#[test]
fn rejects_double_joins() {
    let message = join_quantity_error(&open_pool(), "other", 10.0, 20.0, 500.0).unwrap();
    assert!(message.contains("already joined"));
}

#[test]
fn rejects_non_positive_and_non_finite_quantities() {
    assert!(join_quantity_error(&open_pool(), "me", 0.0, 20.0, 500.0).is_some());
    assert!(join_quantity_error(&open_pool(), "me", -3.0, 20.0, 500.0).is_some());
    assert!(join_quantity_error(&open_pool(), "me", f64::NAN, 20.0, 500.0).is_some());
}

#[test]
fn enforces_per_vendor_bounds() {
    let below = join_quantity_error(&open_pool(), "me", 2.0, 20.0, 500.0).unwrap();
    assert!(below.contains("Minimum"));
    let above = join_quantity_error(&open_pool(), "me", 31.0, 20.0, 5000.0).unwrap();
    assert!(above.contains("Maximum"));
}

#[test]
fn no_upper_bound_when_pool_has_no_maximum() {
    let mut unbounded = open_pool();
    unbounded.max_quantity_per_vendor = None;
    // Still capped by what is left in the pool.
    assert_eq!(join_quantity_error(&unbounded, "me", 60.0, 1.0, 500.0), None);
}

#[test]
fn rejects_more_than_the_remaining_quantity() {
    let mut unbounded = open_pool();
    unbounded.max_quantity_per_vendor = None;
    let message = join_quantity_error(&unbounded, "me", 61.0, 1.0, 500.0).unwrap();
    assert!(message.contains("left in this pool"));
}

#[test]
fn rejects_when_cost_exceeds_balance() {
    let message = join_quantity_error(&open_pool(), "me", 10.0, 20.0, 199.0).unwrap();
    assert!(message.contains("Insufficient"));
    // Exactly affordable is allowed.
    assert_eq!(join_quantity_error(&open_pool(), "me", 10.0, 20.0, 200.0), None);
}

#[test]
fn quantity_parsing_trims_and_rejects_garbage() {
    assert_eq!(parse_quantity(" 12.5 "), Some(12.5));
    assert_eq!(parse_quantity("abc"), None);
    assert_eq!(parse_quantity(""), None);
}
