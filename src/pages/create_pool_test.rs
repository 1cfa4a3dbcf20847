use super::{form_error, parse_field};

const NOW: f64 = 1_700_000_000_000.0;
const TOMORROW: f64 = NOW + 86_400_000.0;

#[test]
fn accepts_a_complete_form() {
    assert_eq!(
        form_error("p1", Some(100.0), Some(5.0), Some(30.0), Some(TOMORROW), NOW),
        None
    );
}

#[test]
fn maximum_is_optional() {
    assert_eq!(form_error("p1", Some(100.0), Some(5.0), None, Some(TOMORROW), NOW), None);
}

#[test]
fn requires_a_product() {
    let message = form_error("", Some(100.0), Some(5.0), None, Some(TOMORROW), NOW).unwrap();
    assert!(message.contains("product"));
}

#[test]
fn requires_positive_quantities() {
    assert!(form_error("p1", None, Some(5.0), None, Some(TOMORROW), NOW).is_some());
    assert!(form_error("p1", Some(0.0), Some(5.0), None, Some(TOMORROW), NOW).is_some());
    assert!(form_error("p1", Some(100.0), Some(-1.0), None, Some(TOMORROW), NOW).is_some());
}

#[test]
fn minimum_cannot_exceed_total() {
    let message = form_error("p1", Some(10.0), Some(20.0), None, Some(TOMORROW), NOW).unwrap();
    assert!(message.contains("exceed the total"));
}

#[test]
fn maximum_cannot_undercut_minimum() {
    let message = form_error("p1", Some(100.0), Some(20.0), Some(10.0), Some(TOMORROW), NOW).unwrap();
    assert!(message.contains("below the minimum"));
}

#[test]
fn deadline_must_exist_and_be_in_the_future() {
    assert!(form_error("p1", Some(100.0), Some(5.0), None, None, NOW).is_some());
    assert!(form_error("p1", Some(100.0), Some(5.0), None, Some(NOW), NOW).is_some());
    assert!(form_error("p1", Some(100.0), Some(5.0), None, Some(NOW - 1.0), NOW).is_some());
}

#[test]
fn field_parsing_treats_blank_as_absent() {
    assert_eq!(parse_field(""), None);
    assert_eq!(parse_field("   "), None);
    assert_eq!(parse_field(" 42 "), Some(42.0));
    assert_eq!(parse_field("x"), None);
}
