use super::matches_query;
use crate::net::types::Product;

fn product(name: &str, category: &str) -> Product {
    serde_json::from_value(serde_json::json!({
        "_id": "p1",
        "name": name,
        "category": category,
    }))
    .unwrap()
}

#[test]
fn empty_query_matches_everything() {
    let onions = product("Onions", "Vegetables");
    assert!(matches_query(&onions, ""));
    assert!(matches_query(&onions, "   "));
}

#[test]
fn query_matches_name_case_insensitively() {
    let onions = product("Red Onions", "Vegetables");
    assert!(matches_query(&onions, "red"));
    assert!(matches_query(&onions, "ONION"));
    assert!(!matches_query(&onions, "tomato"));
}

#[test]
fn query_matches_category() {
    let oil = product("Sunflower Oil", "Oils");
    assert!(matches_query(&oil, "oils"));
}

#[test]
fn query_is_trimmed_before_matching() {
    let rice = product("Basmati Rice", "Grains");
    assert!(matches_query(&rice, "  rice  "));
}
