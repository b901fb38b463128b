//! Tests for the platform vocabulary.

use super::*;

#[test]
fn fifteen_platforms_in_endpoint_order() {
    assert_eq!(ALL_PLATFORMS.len(), 15);
    assert_eq!(ALL_PLATFORMS[0], Platform::Telegram);
    assert_eq!(ALL_PLATFORMS[14], Platform::Tumblr);
}

#[test]
fn tags_round_trip_through_parse() {
    for platform in ALL_PLATFORMS {
        assert_eq!(Platform::parse(platform.as_tag()), Some(platform));
    }
    assert_eq!(Platform::parse("myspace"), None);
    assert_eq!(Platform::parse(""), None);
}

#[test]
fn serde_uses_the_wire_tags() {
    assert_eq!(serde_json::to_string(&Platform::Youtube).unwrap(), "\"youtube\"");
    assert_eq!(
        serde_json::from_str::<Platform>("\"whatsapp\"").unwrap(),
        Platform::Whatsapp
    );
}

#[test]
fn display_names_use_brand_casing() {
    assert_eq!(Platform::Youtube.display_name(), "YouTube");
    assert_eq!(Platform::Tiktok.display_name(), "TikTok");
    assert_eq!(Platform::Linkedin.display_name(), "LinkedIn");
    assert_eq!(Platform::Whatsapp.display_name(), "WhatsApp");
}

#[test]
fn unknown_tags_fall_back_to_the_globe_badge() {
    assert_eq!(icon_class_for_tag("telegram"), "fab fa-telegram");
    assert_eq!(icon_class_for_tag("myspace"), "fas fa-globe");
    assert_eq!(accent_class_for_tag("youtube"), "platform--youtube");
    assert_eq!(accent_class_for_tag("myspace"), "platform--unknown");
    assert_eq!(display_name_for_tag("tiktok"), "TikTok");
    assert_eq!(display_name_for_tag("myspace"), "myspace");
}

#[test]
fn display_name_for_tag_borrows_from_the_caller() {
    // The echoed name lives only as long as the tag it came from.
    let tag = String::from("friendster");
    assert_eq!(display_name_for_tag(&tag), "friendster");
    assert_eq!(display_name_for_tag(&String::from("medium")), "Medium");
}

#[test]
fn ord_matches_declaration_order() {
    // BTreeSet iteration yields picker order.
    let mut sorted = ALL_PLATFORMS;
    sorted.sort();
    assert_eq!(sorted, ALL_PLATFORMS);
}
