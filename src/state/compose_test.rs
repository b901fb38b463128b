//! Tests for compose-form state transitions and pre-flight validation.

use super::*;

#[test]
fn toggle_platform_selects_then_deselects() {
    let mut state = ComposeState::default();
    state.toggle_platform(Platform::Telegram);
    assert!(state.selected.contains(&Platform::Telegram));
    state.toggle_platform(Platform::Telegram);
    assert!(state.selected.is_empty());
}

#[test]
fn selection_iterates_in_picker_order() {
    let mut state = ComposeState::default();
    state.toggle_platform(Platform::Tumblr);
    state.toggle_platform(Platform::Telegram);
    state.toggle_platform(Platform::Reddit);

    let tags: Vec<&str> = state.selected.iter().map(|p| p.as_tag()).collect();
    assert_eq!(tags, ["telegram", "reddit", "tumblr"]);
}

#[test]
fn validate_requires_a_platform_first() {
    assert_eq!(
        validate_submission(0, "some real content"),
        Err(SubmitBlock::NoPlatforms)
    );
    // With both missing, the platform warning wins.
    assert_eq!(validate_submission(0, ""), Err(SubmitBlock::NoPlatforms));
}

#[test]
fn validate_rejects_blank_content() {
    assert_eq!(validate_submission(2, ""), Err(SubmitBlock::NoContent));
    assert_eq!(validate_submission(2, "   \n\t"), Err(SubmitBlock::NoContent));
}

#[test]
fn validate_passes_with_platforms_and_content() {
    assert_eq!(validate_submission(1, "hello world"), Ok(()));
}

#[test]
fn submit_blocks_map_to_phrase_keys() {
    assert_eq!(SubmitBlock::NoPlatforms.title_key(), "notice_no_platforms_title");
    assert_eq!(SubmitBlock::NoPlatforms.body_key(), "notice_no_platforms_text");
    assert_eq!(SubmitBlock::NoContent.title_key(), "notice_no_content_title");
    assert_eq!(SubmitBlock::NoContent.body_key(), "notice_no_content_text");
}

#[test]
fn reset_after_publish_clears_the_form_but_not_the_busy_flag() {
    let mut state = ComposeState {
        content: "ready to go".to_owned(),
        submitting: true,
        ..ComposeState::default()
    };
    state.toggle_platform(Platform::Discord);
    state.media = Some(MediaMeta {
        name: "clip.mp4".to_owned(),
        size_label: "2.25 MB".to_owned(),
        kind: MediaKind::Video,
        preview_url: None,
    });

    state.reset_after_publish();

    assert!(state.content.is_empty());
    assert!(state.selected.is_empty());
    assert!(state.media.is_none());
    assert!(state.submitting);
}
