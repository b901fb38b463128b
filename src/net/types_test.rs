//! Serde tests for the publishing endpoint envelope.

use super::*;

#[test]
fn full_publish_report_deserializes() {
    let body = r#"{
        "success": false,
        "results": {
            "telegram": {"success": true, "message": "Posted to @channel (ID: 42)"},
            "twitter": {"success": false, "message": "Twitter API not configured"}
        },
        "message": "Some platforms failed",
        "post_id": 17,
        "media_included": true
    }"#;

    let resp: PostResponse = serde_json::from_str(body).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.display_message(), Some("Some platforms failed"));
    assert_eq!(resp.post_id, Some(17));
    assert!(resp.media_included);
    assert_eq!(resp.results.len(), 2);
    assert!(resp.results["telegram"].success);
    assert_eq!(resp.results["twitter"].message, "Twitter API not configured");
}

#[test]
fn minimal_error_body_deserializes() {
    let resp: PostResponse =
        serde_json::from_str(r#"{"success": false, "message": "At least one platform must be selected"}"#)
            .unwrap();
    assert!(!resp.success);
    assert!(resp.results.is_empty());
    assert_eq!(resp.post_id, None);
    assert!(!resp.media_included);
}

#[test]
fn unknown_shapes_still_deserialize_via_defaults() {
    // A body missing every expected field is treated as a failed post.
    let resp: PostResponse = serde_json::from_str("{}").unwrap();
    assert!(!resp.success);
    assert_eq!(resp.display_message(), None);
}

#[test]
fn empty_message_counts_as_absent() {
    let resp: PostResponse =
        serde_json::from_str(r#"{"success": true, "message": ""}"#).unwrap();
    assert_eq!(resp.display_message(), None);
}

#[test]
fn outcomes_come_back_in_tag_order() {
    let body = r#"{
        "success": true,
        "results": {
            "tumblr": {"success": true, "message": "ok"},
            "discord": {"success": true, "message": "ok"},
            "medium": {"success": true, "message": "ok"}
        }
    }"#;

    let resp: PostResponse = serde_json::from_str(body).unwrap();
    let tags: Vec<String> = resp.outcomes().into_iter().map(|(tag, _)| tag).collect();
    assert_eq!(tags, ["discord", "medium", "tumblr"]);
}
