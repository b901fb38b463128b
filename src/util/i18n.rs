//! Interface language: persistence, document projection, and the phrase table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard ships bilingual (English and Arabic). The selected language
//! is stored in `localStorage`, projected onto the `<html>` element as `lang`
//! and `dir` attributes (Arabic renders right-to-left), and drives every
//! user-facing string through [`translate`].
//!
//! DESIGN
//! ======
//! Phrases live in a static table keyed by short snake_case identifiers.
//! [`translate`] falls back to the key itself when a lookup misses, so a
//! missing entry degrades to visibly-wrong text instead of a panic. Server
//! messages are displayed as received and never routed through this table.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use serde::{Deserialize, Serialize};

#[cfg(feature = "csr")]
use crate::util::storage;

/// Storage key for the language preference.
pub const LANGUAGE_KEY: &str = "language";

/// Interface language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    /// BCP 47 tag used for the `lang` document attribute.
    pub fn as_tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Text direction for the `dir` document attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }

    /// Option label shown in the language selector.
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ar => "العربية",
        }
    }
}

/// Parse a language tag. Unknown tags get the default language, so a caller
/// holding an arbitrary tag always ends up with a renderable projection.
pub fn parse_tag_or_default(tag: &str) -> Language {
    parse_tag(tag).unwrap_or_default()
}

/// Parse a bare language tag.
///
/// Early dashboard builds stored the tag unquoted, which is not valid JSON;
/// the preference read path accepts those values through here.
fn parse_tag(tag: &str) -> Option<Language> {
    match tag {
        "en" => Some(Language::En),
        "ar" => Some(Language::Ar),
        _ => None,
    }
}

/// Read the language preference from localStorage.
///
/// A legacy unquoted tag is migrated to the canonical JSON form. English is
/// the default when nothing usable is stored.
pub fn read_preference() -> Language {
    #[cfg(feature = "csr")]
    {
        if let Some(lang) = storage::load_json::<Language>(LANGUAGE_KEY) {
            return lang;
        }

        if let Some(lang) = storage::load_raw(LANGUAGE_KEY).as_deref().and_then(parse_tag) {
            storage::save_json(LANGUAGE_KEY, &lang);
            return lang;
        }

        Language::default()
    }
    #[cfg(not(feature = "csr"))]
    {
        Language::default()
    }
}

/// Apply the `lang` and `dir` attributes on the `<html>` element.
pub fn apply(lang: Language) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("lang", lang.as_tag());
                let _ = el.set_attribute("dir", lang.dir());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = lang;
    }
}

/// Make `next` the active language: re-apply the document attributes and
/// persist the preference.
pub fn set_language(next: Language) {
    apply(next);
    #[cfg(feature = "csr")]
    {
        storage::save_json(LANGUAGE_KEY, &next);
    }
}

/// Look up a phrase, or echo the key when the table has no entry for it.
pub fn translate(lang: Language, key: &str) -> &str {
    match phrase(key) {
        Some((en, ar)) => match lang {
            Language::En => en,
            Language::Ar => ar,
        },
        None => key,
    }
}

/// The (English, Arabic) pair for a phrase key.
fn phrase(key: &str) -> Option<(&'static str, &'static str)> {
    let pair = match key {
        "compose_title" => ("Create Post", "إنشاء منشور"),
        "compose_subtitle" => (
            "Share your content across all platforms at once",
            "شارك محتواك عبر جميع المنصات دفعة واحدة",
        ),
        "content_label" => ("Post Content", "محتوى المنشور"),
        "content_placeholder" => ("What's on your mind?", "ماذا يدور في ذهنك؟"),
        "platforms_label" => ("Select Platforms", "اختر المنصات"),
        "media_label" => ("Attach Media", "إرفاق وسائط"),
        "media_hint" => (
            "Images or videos up to 10MB",
            "صور أو مقاطع فيديو حتى 10 ميغابايت",
        ),
        "media_clear" => ("Remove", "إزالة"),
        "publish" => ("Publish Post", "نشر المنشور"),
        "publishing" => ("Publishing...", "جارٍ النشر..."),
        "shortcut_hint" => ("Ctrl+Enter to publish", "Ctrl+Enter للنشر"),
        "theme_light" => ("Light", "فاتح"),
        "theme_dark" => ("Dark", "داكن"),
        "notice_invalid_file_title" => ("Invalid File", "ملف غير صالح"),
        "media_too_large" => (
            "File size exceeds 10MB limit",
            "حجم الملف يتجاوز حد 10 ميغابايت",
        ),
        "media_unsupported" => (
            "File type not supported. Use: jpg, png, gif, webp, mp4, mov, avi, mkv, webm",
            "نوع الملف غير مدعوم. استخدم: jpg, png, gif, webp, mp4, mov, avi, mkv, webm",
        ),
        "notice_no_platforms_title" => ("No Platforms Selected", "لم يتم اختيار منصات"),
        "notice_no_platforms_text" => (
            "Please select at least one platform to post to.",
            "يرجى اختيار منصة واحدة على الأقل للنشر إليها.",
        ),
        "notice_no_content_title" => ("No Content", "لا يوجد محتوى"),
        "notice_no_content_text" => (
            "Please enter some content to post.",
            "يرجى إدخال محتوى للنشر.",
        ),
        "notice_posted_title" => ("Posted Successfully!", "تم النشر بنجاح!"),
        "notice_failed_title" => ("Posting Failed", "فشل النشر"),
        "notice_failed_fallback" => (
            "An error occurred while posting.",
            "حدث خطأ أثناء النشر.",
        ),
        "notice_network_title" => ("Network Error", "خطأ في الشبكة"),
        "notice_network_text" => (
            "Failed to connect to the server. Please try again.",
            "تعذر الاتصال بالخادم. يرجى المحاولة مرة أخرى.",
        ),
        "notice_dismiss" => ("OK", "حسناً"),
        _ => return None,
    };
    Some(pair)
}
