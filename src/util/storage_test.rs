use super::*;

#[test]
fn session_keys_are_distinct_and_namespaced() {
    assert_ne!(TOKEN_KEY, USER_KEY);
    assert!(TOKEN_KEY.starts_with("streetsaver_"));
    assert!(USER_KEY.starts_with("streetsaver_"));
}

#[test]
fn read_is_empty_off_browser() {
    assert_eq!(read(TOKEN_KEY), None);
}

#[test]
fn write_and_remove_are_safe_off_browser() {
    write(TOKEN_KEY, "abc123");
    remove(TOKEN_KEY);
    assert_eq!(read(TOKEN_KEY), None);
}
