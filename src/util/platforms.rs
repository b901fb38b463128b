//! The platform vocabulary: wire tags, display names, and badge styling.
//!
//! Tags match what the publishing endpoint validates; an unrecognized tag in
//! a server response still renders, with a globe icon and neutral color.

#[cfg(test)]
#[path = "platforms_test.rs"]
mod platforms_test;

use serde::{Deserialize, Serialize};

/// A destination platform the dashboard can cross-post to.
///
/// Variant order matches the endpoint's accepted list and drives the picker
/// grid layout. `Ord` lets selections live in a `BTreeSet`, which keeps the
/// submitted `platforms` fields in a stable order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Telegram,
    Instagram,
    Youtube,
    Tiktok,
    Facebook,
    Twitter,
    Linkedin,
    Snapchat,
    Pinterest,
    Reddit,
    Discord,
    Whatsapp,
    Threads,
    Medium,
    Tumblr,
}

/// All platforms, in picker order.
pub const ALL_PLATFORMS: [Platform; 15] = [
    Platform::Telegram,
    Platform::Instagram,
    Platform::Youtube,
    Platform::Tiktok,
    Platform::Facebook,
    Platform::Twitter,
    Platform::Linkedin,
    Platform::Snapchat,
    Platform::Pinterest,
    Platform::Reddit,
    Platform::Discord,
    Platform::Whatsapp,
    Platform::Threads,
    Platform::Medium,
    Platform::Tumblr,
];

impl Platform {
    /// Wire tag, as submitted in `platforms` form fields.
    pub fn as_tag(self) -> &'static str {
        match self {
            Platform::Telegram => "telegram",
            Platform::Instagram => "instagram",
            Platform::Youtube => "youtube",
            Platform::Tiktok => "tiktok",
            Platform::Facebook => "facebook",
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Snapchat => "snapchat",
            Platform::Pinterest => "pinterest",
            Platform::Reddit => "reddit",
            Platform::Discord => "discord",
            Platform::Whatsapp => "whatsapp",
            Platform::Threads => "threads",
            Platform::Medium => "medium",
            Platform::Tumblr => "tumblr",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Telegram => "Telegram",
            Platform::Instagram => "Instagram",
            Platform::Youtube => "YouTube",
            Platform::Tiktok => "TikTok",
            Platform::Facebook => "Facebook",
            Platform::Twitter => "Twitter",
            Platform::Linkedin => "LinkedIn",
            Platform::Snapchat => "Snapchat",
            Platform::Pinterest => "Pinterest",
            Platform::Reddit => "Reddit",
            Platform::Discord => "Discord",
            Platform::Whatsapp => "WhatsApp",
            Platform::Threads => "Threads",
            Platform::Medium => "Medium",
            Platform::Tumblr => "Tumblr",
        }
    }

    /// Font Awesome brand icon classes.
    pub fn icon_class(self) -> &'static str {
        match self {
            Platform::Telegram => "fab fa-telegram",
            Platform::Instagram => "fab fa-instagram",
            Platform::Youtube => "fab fa-youtube",
            Platform::Tiktok => "fab fa-tiktok",
            Platform::Facebook => "fab fa-facebook",
            Platform::Twitter => "fab fa-twitter",
            Platform::Linkedin => "fab fa-linkedin",
            Platform::Snapchat => "fab fa-snapchat",
            Platform::Pinterest => "fab fa-pinterest",
            Platform::Reddit => "fab fa-reddit",
            Platform::Discord => "fab fa-discord",
            Platform::Whatsapp => "fab fa-whatsapp",
            Platform::Threads => "fab fa-threads",
            Platform::Medium => "fab fa-medium",
            Platform::Tumblr => "fab fa-tumblr",
        }
    }

    /// Stylesheet modifier carrying the brand accent color.
    pub fn accent_class(self) -> &'static str {
        match self {
            Platform::Telegram => "platform--telegram",
            Platform::Instagram => "platform--instagram",
            Platform::Youtube => "platform--youtube",
            Platform::Tiktok => "platform--tiktok",
            Platform::Facebook => "platform--facebook",
            Platform::Twitter => "platform--twitter",
            Platform::Linkedin => "platform--linkedin",
            Platform::Snapchat => "platform--snapchat",
            Platform::Pinterest => "platform--pinterest",
            Platform::Reddit => "platform--reddit",
            Platform::Discord => "platform--discord",
            Platform::Whatsapp => "platform--whatsapp",
            Platform::Threads => "platform--threads",
            Platform::Medium => "platform--medium",
            Platform::Tumblr => "platform--tumblr",
        }
    }

    /// Parse a wire tag.
    pub fn parse(tag: &str) -> Option<Platform> {
        ALL_PLATFORMS.into_iter().find(|p| p.as_tag() == tag)
    }
}

/// Icon classes for a possibly-unknown tag from a server response.
pub fn icon_class_for_tag(tag: &str) -> &'static str {
    Platform::parse(tag).map_or("fas fa-globe", Platform::icon_class)
}

/// Accent class for a possibly-unknown tag from a server response.
pub fn accent_class_for_tag(tag: &str) -> &'static str {
    Platform::parse(tag).map_or("platform--unknown", Platform::accent_class)
}

/// Display name for a possibly-unknown tag; echoes the tag when unrecognized.
pub fn display_name_for_tag(tag: &str) -> &str {
    if let Some(p) = Platform::parse(tag) { p.display_name() } else { tag }
}
