use super::*;

#[test]
fn product_endpoint_formats_expected_path() {
    assert_eq!(product_endpoint("p1"), "/products/p1");
}

#[test]
fn pool_endpoints_format_expected_paths() {
    assert_eq!(pool_endpoint("pl1"), "/pools/pl1");
    assert_eq!(pool_join_endpoint("pl1"), "/pools/pl1/join");
    assert_eq!(pool_end_endpoint("pl1"), "/pools/pl1/end");
}

#[test]
fn nearby_endpoint_includes_position_and_role() {
    assert_eq!(
        nearby_endpoint(12.97, 77.59, Role::Supplier),
        "/distance/nearby?lat=12.97&lng=77.59&role=Supplier"
    );
}
