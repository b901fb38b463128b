//! Compose-form state: content, platform selection, staged media, busy flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! This model is the local projection of the post being written. The media
//! file's bytes never enter state; the DOM file input keeps them and only
//! display metadata is mirrored here, so the struct stays cheaply cloneable
//! and signal-friendly.

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;

use std::collections::BTreeSet;

use crate::util::media::MediaKind;
use crate::util::platforms::Platform;

/// Display metadata for the staged media attachment.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaMeta {
    /// Original filename, shown in the preview card.
    pub name: String,
    /// Pre-formatted human-readable size.
    pub size_label: String,
    /// Image or video, for preview rendering.
    pub kind: MediaKind,
    /// Object URL for image thumbnails; revoked when the staging is cleared.
    pub preview_url: Option<String>,
}

/// Shared compose-form state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComposeState {
    /// The in-progress post body.
    pub content: String,
    /// Selected target platforms; `BTreeSet` keeps submission order stable.
    pub selected: BTreeSet<Platform>,
    /// Staged attachment metadata, if a valid file is selected.
    pub media: Option<MediaMeta>,
    /// True while a publish request is in flight; disables the submit control.
    pub submitting: bool,
}

impl ComposeState {
    /// Select `platform` if unselected, deselect it otherwise.
    pub fn toggle_platform(&mut self, platform: Platform) {
        if !self.selected.remove(&platform) {
            self.selected.insert(platform);
        }
    }

    /// Clear the form after a confirmed successful publish.
    ///
    /// Leaves `submitting` alone; the request lifecycle owns that flag.
    pub fn reset_after_publish(&mut self) {
        self.content.clear();
        self.selected.clear();
        self.media = None;
    }
}

/// Why a submission was blocked before any network call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlock {
    NoPlatforms,
    NoContent,
}

impl SubmitBlock {
    /// Phrase key for the warning dialog title.
    pub fn title_key(self) -> &'static str {
        match self {
            SubmitBlock::NoPlatforms => "notice_no_platforms_title",
            SubmitBlock::NoContent => "notice_no_content_title",
        }
    }

    /// Phrase key for the warning dialog body.
    pub fn body_key(self) -> &'static str {
        match self {
            SubmitBlock::NoPlatforms => "notice_no_platforms_text",
            SubmitBlock::NoContent => "notice_no_content_text",
        }
    }
}

/// Pre-flight submission checks. Platforms are checked before content, which
/// fixes the order users see the warnings in.
pub fn validate_submission(platform_count: usize, content: &str) -> Result<(), SubmitBlock> {
    if platform_count == 0 {
        return Err(SubmitBlock::NoPlatforms);
    }
    if content.trim().is_empty() {
        return Err(SubmitBlock::NoContent);
    }
    Ok(())
}
