use super::{format_distance, with_distances};
use crate::net::types::User;
use crate::util::geolocation::GeoPoint;

fn user(id: &str, lat_lng: Option<(f64, f64)>) -> User {
    let mut value = serde_json::json!({ "_id": id, "username": id });
    if let Some((lat, lng)) = lat_lng {
        value["location"] = serde_json::json!({ "type": "Point", "coordinates": [lng, lat] });
    }
    serde_json::from_value(value).unwrap()
}

const ORIGIN: GeoPoint = GeoPoint { lat: 19.0760, lng: 72.8777 };

#[test]
fn sorts_nearest_first() {
    let far = user("far", Some((20.0, 73.0)));
    let near = user("near", Some((19.08, 72.88)));
    let sorted = with_distances(ORIGIN, vec![far, near]);
    assert_eq!(sorted[0].0.id, "near");
    assert_eq!(sorted[1].0.id, "far");
    assert!(sorted[0].1.unwrap() < sorted[1].1.unwrap());
}

#[test]
fn users_without_a_location_sort_last() {
    let unknown = user("unknown", None);
    let near = user("near", Some((19.08, 72.88)));
    let sorted = with_distances(ORIGIN, vec![unknown, near]);
    assert_eq!(sorted[0].0.id, "near");
    assert_eq!(sorted[1].0.id, "unknown");
    assert_eq!(sorted[1].1, None);
}

#[test]
fn distance_at_the_origin_is_zero() {
    let here = user("here", Some((ORIGIN.lat, ORIGIN.lng)));
    let sorted = with_distances(ORIGIN, vec![here]);
    assert!(sorted[0].1.unwrap() < 1e-9);
}

#[test]
fn formats_meters_below_one_km() {
    assert_eq!(format_distance(Some(0.25)), "250 m away");
    assert_eq!(format_distance(Some(1.0)), "1.0 km away");
    assert_eq!(format_distance(Some(12.34)), "12.3 km away");
    assert_eq!(format_distance(None), "Distance unknown");
}
