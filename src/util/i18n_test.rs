//! Native-target tests for language state and the phrase table.

#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn default_is_english() {
    assert_eq!(Language::default(), Language::En);
}

#[test]
fn tags_directions_and_labels_line_up() {
    assert_eq!(Language::En.as_tag(), "en");
    assert_eq!(Language::Ar.as_tag(), "ar");
    assert_eq!(Language::En.dir(), "ltr");
    assert_eq!(Language::Ar.dir(), "rtl");
    assert_eq!(Language::En.label(), "EN");
    assert_eq!(Language::Ar.label(), "العربية");
}

#[test]
fn serde_uses_lowercase_tags() {
    assert_eq!(serde_json::to_string(&Language::Ar).unwrap(), "\"ar\"");
    assert_eq!(serde_json::from_str::<Language>("\"en\"").unwrap(), Language::En);
}

#[test]
fn parse_tag_accepts_bare_legacy_values() {
    assert_eq!(parse_tag("en"), Some(Language::En));
    assert_eq!(parse_tag("ar"), Some(Language::Ar));
    assert_eq!(parse_tag("fr"), None);
    assert_eq!(parse_tag(""), None);
}

#[test]
fn unknown_tags_fall_back_to_the_default_language() {
    assert_eq!(parse_tag_or_default("ar"), Language::Ar);
    assert_eq!(parse_tag_or_default("fr"), Language::En);
    assert_eq!(parse_tag_or_default(""), Language::En);
}

#[test]
fn read_preference_falls_back_to_english_without_a_browser() {
    assert_eq!(read_preference(), Language::En);
}

#[test]
fn translate_picks_the_language_column() {
    assert_eq!(translate(Language::En, "publish"), "Publish Post");
    assert_eq!(translate(Language::Ar, "publish"), "نشر المنشور");
    assert_eq!(
        translate(Language::En, "media_too_large"),
        "File size exceeds 10MB limit"
    );
}

#[test]
fn translate_echoes_unknown_keys() {
    assert_eq!(translate(Language::En, "no_such_key"), "no_such_key");
    assert_eq!(translate(Language::Ar, ""), "");
}

#[test]
fn every_ui_key_has_a_table_entry() {
    const UI_KEYS: &[&str] = &[
        "compose_title",
        "compose_subtitle",
        "content_label",
        "content_placeholder",
        "platforms_label",
        "media_label",
        "media_hint",
        "media_clear",
        "publish",
        "publishing",
        "shortcut_hint",
        "theme_light",
        "theme_dark",
        "notice_invalid_file_title",
        "media_too_large",
        "media_unsupported",
        "notice_no_platforms_title",
        "notice_no_platforms_text",
        "notice_no_content_title",
        "notice_no_content_text",
        "notice_posted_title",
        "notice_failed_title",
        "notice_failed_fallback",
        "notice_network_title",
        "notice_network_text",
        "notice_dismiss",
    ];

    for key in UI_KEYS {
        assert_ne!(translate(Language::En, key), *key, "missing phrase: {key}");
        assert_ne!(translate(Language::Ar, key), *key, "missing phrase: {key}");
    }
}
