use super::*;

#[test]
fn login_request_carries_credentials() {
    let request = login_request("a@b.com", "pw", None);
    assert_eq!(request.email, "a@b.com");
    assert_eq!(request.password, "pw");
    assert!(request.location.is_none());
}

#[test]
fn login_request_converts_position_to_geojson() {
    let request = login_request("a@b.com", "pw", Some(GeoPoint { lat: 12.0, lng: 77.0 }));
    let location = request.location.expect("location should be set");
    assert_eq!(location.coordinates, [77.0, 12.0]);
}

#[test]
fn clear_session_is_safe_when_nothing_is_stored() {
    clear_session();
    clear_session();
}

#[test]
fn storage_derived_reads_report_absence() {
    assert!(!is_authenticated());
    assert!(current_user().is_none());
}
