use super::{role_from_form, validate_login, validate_registration, LOCATION_REQUIRED_MESSAGE};
use crate::net::types::Role;

#[test]
fn login_requires_both_fields() {
    assert!(validate_login("", "secret").is_err());
    assert!(validate_login("vendor@example.com", "").is_err());
    assert!(validate_login("", "").is_err());
}

#[test]
fn login_trims_email_but_not_password() {
    let (email, password) = validate_login("  vendor@example.com  ", " secret ").unwrap();
    assert_eq!(email, "vendor@example.com");
    assert_eq!(password, " secret ");
}

#[test]
fn login_rejects_whitespace_only_email() {
    assert!(validate_login("   ", "secret").is_err());
}

#[test]
fn registration_requires_every_field() {
    assert!(validate_registration("", "a@b.c", "pw", "123").is_err());
    assert!(validate_registration("ravi", "", "pw", "123").is_err());
    assert!(validate_registration("ravi", "a@b.c", "", "123").is_err());
    assert!(validate_registration("ravi", "a@b.c", "pw", "").is_err());
    assert!(validate_registration("ravi", "a@b.c", "pw", "123").is_ok());
}

#[test]
fn role_parses_from_select_value() {
    assert_eq!(role_from_form("Supplier"), Role::Supplier);
    assert_eq!(role_from_form("Vendor"), Role::Vendor);
    // Unknown values fall back to the common case.
    assert_eq!(role_from_form(""), Role::Vendor);
}

#[test]
fn location_failure_message_tells_user_what_to_fix() {
    assert!(LOCATION_REQUIRED_MESSAGE.contains("enable location"));
}
