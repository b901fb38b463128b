//! Top bar with the brand mark, theme toggle, and language selector.
//!
//! SYSTEM CONTEXT
//! ==============
//! These controls are the only writers of preference state after startup;
//! both persist and re-project through the preference store.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::state::prefs::PrefsState;
use crate::util::i18n::Language;

/// Glyph and phrase key for the theme toggle, advertising what a click
/// switches *to*.
fn theme_toggle_face(dark: bool) -> (&'static str, &'static str) {
    if dark { ("☀", "theme_light") } else { ("☾", "theme_dark") }
}

/// Top application bar.
#[component]
pub fn Header() -> impl IntoView {
    let prefs = expect_context::<RwSignal<PrefsState>>();

    view! {
        <header class="header">
            <div class="header__brand">
                <i class="fas fa-share-nodes header__brand-icon" aria-hidden="true"></i>
                <span class="header__brand-name">"CrossDeck"</span>
            </div>

            <span class="header__spacer"></span>

            <button
                id="theme-toggle"
                class="btn header__theme-toggle"
                on:click=move |_| prefs.update(|p| p.toggle_theme())
                title="Toggle theme"
            >
                <span id="theme-icon" aria-hidden="true">
                    {move || theme_toggle_face(prefs.get().theme.is_dark()).0}
                </span>
                <span id="theme-text" class="header__toggle-label">
                    {move || {
                        let p = prefs.get();
                        p.phrase(theme_toggle_face(p.theme.is_dark()).1).to_owned()
                    }}
                </span>
            </button>

            <select
                id="language"
                class="header__lang-select"
                title="Switch language"
                prop:value=move || prefs.get().language.as_tag().to_owned()
                on:change=move |ev| {
                    prefs.update(|p| p.set_language_tag(&event_target_value(&ev)));
                }
            >
                <option value=Language::En.as_tag()>{Language::En.label()}</option>
                <option value=Language::Ar.as_tag()>{Language::Ar.label()}</option>
            </select>
        </header>
    }
}
