#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn load_json_is_none_in_non_csr_tests() {
    assert_eq!(load_json::<String>("anything"), None);
}

#[test]
fn get_or_default_returns_the_default() {
    assert_eq!(get_or_default("missing", 7_u32), 7);
    assert_eq!(get_or_default("missing", "fallback".to_owned()), "fallback");
}

#[test]
fn save_then_load_stays_absent_without_a_browser() {
    save_json("draft", &"some text".to_owned());
    assert_eq!(load_json::<String>("draft"), None);
}

#[test]
fn load_raw_is_none_in_non_csr_tests() {
    assert_eq!(load_raw("language"), None);
}

#[test]
fn remove_is_noop_but_callable() {
    remove("draft");
    remove("missing");
}
