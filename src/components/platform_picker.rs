//! Platform selection grid for the compose form.
//!
//! Each tile wraps a real checkbox named `platforms`, so the form keeps the
//! checkbox contract while selection state lives in [`ComposeState`].

use leptos::prelude::*;

use crate::state::compose::ComposeState;
use crate::state::prefs::PrefsState;
use crate::util::platforms::{ALL_PLATFORMS, Platform};

/// The full platform grid with its section label.
#[component]
pub fn PlatformPicker() -> impl IntoView {
    let prefs = expect_context::<RwSignal<PrefsState>>();

    view! {
        <fieldset class="platform-picker">
            <legend class="platform-picker__label">
                {move || prefs.get().phrase("platforms_label").to_owned()}
            </legend>
            <div class="platform-picker__grid">
                {ALL_PLATFORMS
                    .into_iter()
                    .map(|platform| view! { <PlatformCard platform=platform /> })
                    .collect_view()}
            </div>
        </fieldset>
    }
}

/// One selectable platform tile.
#[component]
fn PlatformCard(platform: Platform) -> impl IntoView {
    let compose = expect_context::<RwSignal<ComposeState>>();
    let selected = move || compose.get().selected.contains(&platform);

    view! {
        <label class="platform-card" class:platform-card--selected=selected>
            <input
                type="checkbox"
                class="platform-card__input"
                name="platforms"
                value=platform.as_tag()
                prop:checked=selected
                on:change=move |_| compose.update(|c| c.toggle_platform(platform))
            />
            <i
                class=format!(
                    "{} platform-card__icon {}",
                    platform.icon_class(),
                    platform.accent_class(),
                )
                aria-hidden="true"
            ></i>
            <span class="platform-card__name">{platform.display_name()}</span>
            <i class="fas fa-circle-check platform-card__check" aria-hidden="true"></i>
        </label>
    }
}
