//! Theme preference: persistence, legacy-key migration, and document projection.
//!
//! Reads the stored theme from `localStorage` and applies a `data-theme`
//! attribute to the `<html>` element. Toggle writes back to `localStorage`
//! and updates that attribute. Requires a browser environment; native builds
//! (tests) compile no-op fallbacks.
//!
//! DESIGN
//! ======
//! Earlier revisions of the dashboard persisted the same concept under two
//! keys: `theme`, written as a bare `light`/`dark` token, and a stray
//! `darkMode` boolean from an alternate toggle path. `theme` is canonical
//! here, stored as a JSON string; both legacy shapes are migrated on first
//! read (the bare token rewritten in place, the `darkMode` key removed).

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

#[cfg(feature = "csr")]
use crate::util::storage;

/// Canonical storage key for the theme preference.
pub const THEME_KEY: &str = "theme";

/// Retired storage key once written by the alternate dark-mode toggle.
#[cfg(any(test, feature = "csr"))]
const LEGACY_DARK_MODE_KEY: &str = "darkMode";

/// Visual theme applied to the whole document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value used for the `data-theme` document attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Parse a bare theme token.
///
/// The toggle in early dashboard builds stored the token unquoted, which is
/// not valid JSON; the preference read path accepts those values through
/// here.
#[cfg(any(test, feature = "csr"))]
fn parse_token(token: &str) -> Option<Theme> {
    match token {
        "light" => Some(Theme::Light),
        "dark" => Some(Theme::Dark),
        _ => None,
    }
}

/// Interpret a legacy `darkMode` value.
///
/// The old toggle stored either a JSON bool or the strings `"true"`/`"false"`;
/// anything else counted as light.
#[cfg(any(test, feature = "csr"))]
fn legacy_dark_flag(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Bool(flag) => *flag,
        serde_json::Value::String(text) => text == "true",
        _ => false,
    }
}

/// Read the theme preference from localStorage.
///
/// Order: canonical `theme` key, then a legacy bare token under the same
/// key, then a migrated legacy `darkMode` value, then the system
/// `prefers-color-scheme` setting. Both legacy forms are rewritten in the
/// canonical shape when found.
pub fn read_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        if let Some(theme) = storage::load_json::<Theme>(THEME_KEY) {
            return theme;
        }

        if let Some(theme) = storage::load_raw(THEME_KEY).as_deref().and_then(parse_token) {
            storage::save_json(THEME_KEY, &theme);
            return theme;
        }

        if let Some(legacy) = storage::load_json::<serde_json::Value>(LEGACY_DARK_MODE_KEY) {
            let theme = if legacy_dark_flag(&legacy) { Theme::Dark } else { Theme::Light };
            storage::save_json(THEME_KEY, &theme);
            storage::remove(LEGACY_DARK_MODE_KEY);
            return theme;
        }

        // Fall back to system preference.
        let prefers_dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::default()
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
///
/// Pure projection: stored state is not touched.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_attr());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme, re-apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "csr")]
    {
        storage::save_json(THEME_KEY, &next);
    }
    next
}
