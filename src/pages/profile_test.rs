use super::{optional_field, profile_form_error};

#[test]
fn accepts_username_and_phone() {
    assert_eq!(profile_form_error("ravi", "9876543210"), None);
}

#[test]
fn requires_a_username() {
    assert!(profile_form_error("", "9876543210").is_some());
    assert!(profile_form_error("   ", "9876543210").is_some());
}

#[test]
fn requires_a_phone() {
    assert!(profile_form_error("ravi", "").is_some());
}

#[test]
fn optional_fields_drop_blank_input() {
    assert_eq!(optional_field(""), None);
    assert_eq!(optional_field("   "), None);
    assert_eq!(optional_field("  Ravi Chaat Corner "), Some("Ravi Chaat Corner".to_owned()));
}
