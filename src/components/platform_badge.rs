//! Small platform badge (brand icon + name) for result lists.
//!
//! Takes a raw wire tag so unrecognized platforms from a server response
//! still render, with a globe icon and neutral accent.

use leptos::prelude::*;

use crate::util::platforms;

#[component]
pub fn PlatformBadge(tag: String) -> impl IntoView {
    let icon = platforms::icon_class_for_tag(&tag);
    let accent = platforms::accent_class_for_tag(&tag);
    let name = platforms::display_name_for_tag(&tag).to_owned();

    view! {
        <span class="platform-badge">
            <i class=format!("{icon} platform-badge__icon {accent}") aria-hidden="true"></i>
            {name}
        </span>
    }
}
