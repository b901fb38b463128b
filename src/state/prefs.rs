//! User display preferences (theme + language) shared across the app.
//!
//! DESIGN
//! ======
//! One `RwSignal<PrefsState>` is provided via context at the app root.
//! [`PrefsState::initialize`] runs exactly once at startup: it reads both
//! persisted values and projects them onto the document. After that, only
//! the explicit toggle/set operations below mutate the preferences, and
//! each one persists and re-applies as a unit.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use crate::util::i18n::{self, Language};
use crate::util::theme::{self, Theme};

/// The active display preferences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrefsState {
    pub theme: Theme,
    pub language: Language,
}

impl PrefsState {
    /// Load persisted preferences (or defaults) and apply them to the
    /// document in one pass.
    pub fn initialize() -> Self {
        let prefs = Self {
            theme: theme::read_preference(),
            language: i18n::read_preference(),
        };
        theme::apply(prefs.theme);
        i18n::apply(prefs.language);
        prefs
    }

    /// Flip the theme; persists and re-applies the document attribute.
    pub fn toggle_theme(&mut self) {
        self.theme = theme::toggle(self.theme);
    }

    /// Switch to `language`; persists and re-applies the document attributes.
    pub fn set_language(&mut self, language: Language) {
        i18n::set_language(language);
        self.language = language;
    }

    /// Switch to the language named by `tag`; unknown tags land on the
    /// default language.
    pub fn set_language_tag(&mut self, tag: &str) {
        self.set_language(i18n::parse_tag_or_default(tag));
    }

    /// Phrase lookup in the active language.
    pub fn phrase<'a>(&self, key: &'a str) -> &'a str {
        i18n::translate(self.language, key)
    }
}
