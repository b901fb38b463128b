//! Tests for notice construction and render-time text resolution.

use super::*;

#[test]
fn phrases_resolve_in_the_requested_language() {
    let text = NoticeText::Phrase("notice_network_title");
    assert_eq!(text.resolve(Language::En), "Network Error");
    assert_eq!(text.resolve(Language::Ar), "خطأ في الشبكة");
}

#[test]
fn verbatim_text_ignores_the_language() {
    let text = NoticeText::Verbatim("Post published successfully!".to_owned());
    assert_eq!(text.resolve(Language::En), "Post published successfully!");
    assert_eq!(text.resolve(Language::Ar), "Post published successfully!");
}

#[test]
fn constructors_set_the_kind() {
    let success = Notice::success(
        NoticeText::Phrase("notice_posted_title"),
        NoticeText::Verbatim("done".to_owned()),
    );
    assert_eq!(success.kind, NoticeKind::Success);
    assert!(success.outcomes.is_empty());

    let warning = Notice::warning(
        NoticeText::Phrase("notice_no_content_title"),
        NoticeText::Phrase("notice_no_content_text"),
    );
    assert_eq!(warning.kind, NoticeKind::Warning);

    let error = Notice::error(
        NoticeText::Phrase("notice_failed_title"),
        NoticeText::Phrase("notice_failed_fallback"),
    );
    assert_eq!(error.kind, NoticeKind::Error);
}

#[test]
fn with_outcomes_attaches_the_report() {
    let outcomes = vec![(
        "telegram".to_owned(),
        PlatformResult { success: true, message: "posted".to_owned() },
    )];
    let notice = Notice::success(
        NoticeText::Phrase("notice_posted_title"),
        NoticeText::Verbatim("ok".to_owned()),
    )
    .with_outcomes(outcomes.clone());
    assert_eq!(notice.outcomes, outcomes);
}

#[test]
fn kinds_map_to_stylesheet_modifiers() {
    assert_eq!(NoticeKind::Success.modifier_class(), "notice--success");
    assert_eq!(NoticeKind::Error.modifier_class(), "notice--error");
    assert_eq!(NoticeKind::Warning.modifier_class(), "notice--warning");
    assert_eq!(NoticeKind::Warning.icon_class(), "fas fa-triangle-exclamation");
}
