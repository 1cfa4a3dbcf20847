use super::format_remaining;

#[test]
fn expired_at_zero_and_below() {
    assert_eq!(format_remaining(0), "Expired");
    assert_eq!(format_remaining(-5), "Expired");
}

#[test]
fn seconds_only_windows_show_minutes_and_seconds() {
    assert_eq!(format_remaining(59), "0m 59s");
    assert_eq!(format_remaining(60), "1m 0s");
    assert_eq!(format_remaining(125), "2m 5s");
}

#[test]
fn hour_windows_show_hours_minutes_seconds() {
    assert_eq!(format_remaining(3_600), "1h 0m 0s");
    assert_eq!(format_remaining(3_600 + 120 + 3), "1h 2m 3s");
}

#[test]
fn day_windows_drop_seconds() {
    assert_eq!(format_remaining(86_400), "1d 0h 0m");
    assert_eq!(format_remaining(2 * 86_400 + 3 * 3_600 + 4 * 60), "2d 3h 4m");
}
