//! Draft auto-save: debounced persistence of the compose field.
//!
//! SYSTEM CONTEXT
//! ==============
//! The compose textarea persists its content to `localStorage` under
//! [`DRAFT_KEY`] while the user types, so a reload or crash loses at most the
//! last couple of seconds of input. On page load the draft is restored into
//! the field, but only when the field is still empty.
//!
//! DESIGN
//! ======
//! [`DraftAutosave`] holds at most one armed timer. Scheduling replaces the
//! previous timer, so the write lands [`DRAFT_DEBOUNCE_MS`] after the *last*
//! keystroke. The timer callback reads the field content when it fires, not
//! when it was armed: a timer that outlives a successful publish sees the
//! reset field, fails the length guard, and writes nothing.
//!
//! Trivial content is never persisted. The guard requires more than
//! [`MIN_DRAFT_CHARS`] characters after trimming, counted as Unicode scalar
//! values so Arabic text is measured the same as English.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use serde::{Deserialize, Serialize};

#[cfg(feature = "csr")]
use std::cell::RefCell;

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;

use crate::util::storage;

/// Storage key for the compose draft.
pub const DRAFT_KEY: &str = "post_draft";

/// Quiet period after the last keystroke before the draft is written.
pub const DRAFT_DEBOUNCE_MS: u32 = 2000;

/// Trimmed drafts must be longer than this to be worth persisting.
pub const MIN_DRAFT_CHARS: usize = 5;

/// A persisted compose draft.
///
/// `saved_at_ms` is milliseconds since the Unix epoch, recorded for display
/// and debugging; restore decisions never look at it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub content: String,
    #[serde(rename = "timestamp")]
    pub saved_at_ms: f64,
}

/// Whether `content` is substantial enough to persist.
pub fn should_persist(content: &str) -> bool {
    content.trim().chars().count() > MIN_DRAFT_CHARS
}

/// Whether a stored draft should overwrite the current field value.
///
/// Restore is skipped when the field already holds text, and when the draft
/// itself no longer passes the persistence guard.
fn should_restore(draft_content: &str, field_value: &str) -> bool {
    field_value.trim().is_empty() && should_persist(draft_content)
}

/// Persist `content` as the current draft if it passes the length guard.
///
/// Content that fails the guard leaves any previously stored draft in place.
pub fn save(content: &str) {
    if should_persist(content) {
        let draft = Draft { content: content.to_owned(), saved_at_ms: now_ms() };
        storage::save_json(DRAFT_KEY, &draft);
    }
}

/// Load the stored draft, if any.
pub fn load() -> Option<Draft> {
    storage::load_json(DRAFT_KEY)
}

/// The stored draft content, when it should replace `field_value`.
pub fn restore(field_value: &str) -> Option<String> {
    load()
        .filter(|draft| should_restore(&draft.content, field_value))
        .map(|draft| draft.content)
}

/// Remove the stored draft.
pub fn clear() {
    storage::remove(DRAFT_KEY);
}

fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |elapsed| elapsed.as_secs_f64() * 1000.0)
    }
}

/// Single-slot debounce timer for draft writes.
///
/// Arming replaces (and thereby cancels) any previous timer, so at most one
/// save is ever pending and the last-armed payload wins. Dropping the slot
/// cancels an armed timer, so an unmounted owner cannot fire a stale save.
/// Not `Send`; owned by the compose input handler rather than by a signal.
#[derive(Default)]
pub struct DraftAutosave {
    #[cfg(feature = "csr")]
    pending: RefCell<Option<Timeout>>,
}

impl DraftAutosave {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the debounce timer.
    ///
    /// `read_content` runs when the timer fires and must return the field
    /// content at that moment.
    pub fn schedule(&self, read_content: impl FnOnce() -> String + 'static) {
        #[cfg(feature = "csr")]
        {
            let timeout = Timeout::new(DRAFT_DEBOUNCE_MS, move || save(&read_content()));
            // Replacing the slot drops the previous timer, which cancels it.
            *self.pending.borrow_mut() = Some(timeout);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self, read_content);
        }
    }
}
