//! Modal notice state (the dashboard's dialog replacement for alert popups).
//!
//! DESIGN
//! ======
//! At most one notice is visible; setting a new one replaces the old. Titles
//! and bodies are [`NoticeText`], which defers phrase lookup to render time
//! so an open dialog re-translates when the user switches language. Server
//! messages stay verbatim and bypass the phrase table.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use crate::net::types::PlatformResult;
use crate::util::i18n::{self, Language};

/// Dialog severity; styles the icon and accent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
}

impl NoticeKind {
    /// Stylesheet modifier for the dialog card.
    pub fn modifier_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "notice--success",
            NoticeKind::Error => "notice--error",
            NoticeKind::Warning => "notice--warning",
        }
    }

    /// Font Awesome icon classes for the dialog header.
    pub fn icon_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "fas fa-circle-check",
            NoticeKind::Error => "fas fa-circle-xmark",
            NoticeKind::Warning => "fas fa-triangle-exclamation",
        }
    }
}

/// A dialog line: translated at render time, or shown as received.
#[derive(Clone, Debug, PartialEq)]
pub enum NoticeText {
    Phrase(&'static str),
    Verbatim(String),
}

impl NoticeText {
    /// The rendered text in `lang`.
    pub fn resolve(&self, lang: Language) -> &str {
        match self {
            NoticeText::Phrase(key) => i18n::translate(lang, key),
            NoticeText::Verbatim(text) => text,
        }
    }
}

/// One modal notice.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: NoticeText,
    pub body: NoticeText,
    /// Per-platform publish outcomes, shown as a list under the body.
    pub outcomes: Vec<(String, PlatformResult)>,
}

impl Notice {
    pub fn success(title: NoticeText, body: NoticeText) -> Self {
        Self::new(NoticeKind::Success, title, body)
    }

    pub fn error(title: NoticeText, body: NoticeText) -> Self {
        Self::new(NoticeKind::Error, title, body)
    }

    pub fn warning(title: NoticeText, body: NoticeText) -> Self {
        Self::new(NoticeKind::Warning, title, body)
    }

    fn new(kind: NoticeKind, title: NoticeText, body: NoticeText) -> Self {
        Self { kind, title, body, outcomes: Vec::new() }
    }

    /// Attach per-platform outcomes to the dialog.
    pub fn with_outcomes(mut self, outcomes: Vec<(String, PlatformResult)>) -> Self {
        self.outcomes = outcomes;
        self
    }
}
