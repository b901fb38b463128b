//! Native-target tests for theme state and the legacy-key migration parser.

#![cfg(not(feature = "csr"))]

use super::*;
use serde_json::json;

#[test]
fn default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn toggled_flips_between_light_and_dark() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn as_attr_matches_the_stylesheet_hooks() {
    assert_eq!(Theme::Light.as_attr(), "light");
    assert_eq!(Theme::Dark.as_attr(), "dark");
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    assert_eq!(serde_json::from_str::<Theme>("\"light\"").unwrap(), Theme::Light);
}

#[test]
fn parse_token_accepts_bare_legacy_values() {
    assert_eq!(parse_token("dark"), Some(Theme::Dark));
    assert_eq!(parse_token("light"), Some(Theme::Light));
    assert_eq!(parse_token("Dark"), None);
    assert_eq!(parse_token(""), None);
}

#[test]
fn bare_tokens_are_not_valid_json() {
    // A stored bare `dark` misses the canonical JSON read and must be caught
    // by the token rescue instead.
    assert!(serde_json::from_str::<Theme>("dark").is_err());
    assert_eq!(parse_token("dark"), Some(Theme::Dark));
    // The quoted form goes the other way round.
    assert_eq!(serde_json::from_str::<Theme>("\"dark\"").unwrap(), Theme::Dark);
    assert_eq!(parse_token("\"dark\""), None);
}

#[test]
fn storage_keys_are_stable() {
    assert_eq!(THEME_KEY, "theme");
    assert_eq!(LEGACY_DARK_MODE_KEY, "darkMode");
}

#[test]
fn legacy_dark_flag_accepts_bool_and_stringly_values() {
    assert!(legacy_dark_flag(&json!(true)));
    assert!(!legacy_dark_flag(&json!(false)));
    assert!(legacy_dark_flag(&json!("true")));
    assert!(!legacy_dark_flag(&json!("false")));
    assert!(!legacy_dark_flag(&json!(1)));
    assert!(!legacy_dark_flag(&json!(null)));
}

#[test]
fn read_preference_falls_back_to_light_without_a_browser() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn toggle_returns_the_next_theme() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}
