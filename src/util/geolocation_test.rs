use super::*;

#[test]
fn to_geojson_swaps_into_lng_lat_order() {
    let point = GeoPoint { lat: 12.97, lng: 77.59 };
    assert_eq!(point.to_geojson().coordinates, [77.59, 12.97]);
}

#[test]
fn distance_km_is_zero_for_identical_points() {
    let point = GeoPoint { lat: 12.97, lng: 77.59 };
    assert!(distance_km(point, point).abs() < 1e-9);
}

#[test]
fn distance_km_one_degree_longitude_on_equator() {
    let a = GeoPoint { lat: 0.0, lng: 0.0 };
    let b = GeoPoint { lat: 0.0, lng: 1.0 };
    let d = distance_km(a, b);
    // One degree of longitude at the equator is ~111.2 km.
    assert!((d - 111.195).abs() < 0.1, "got {d}");
}

#[test]
fn distance_km_is_symmetric() {
    let a = GeoPoint { lat: 12.97, lng: 77.59 };
    let b = GeoPoint { lat: 13.08, lng: 80.27 };
    assert!((distance_km(a, b) - distance_km(b, a)).abs() < 1e-9);
}
