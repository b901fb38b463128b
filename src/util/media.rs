//! Media attachment rules: size cap, MIME allow list, and display helpers.
//!
//! Validation runs fully client-side before a file is accepted for upload.
//! The server enforces its own copy of these limits; failing early here just
//! spares the user a doomed upload.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

/// Upload ceiling in bytes (10MB). Sizes come from `File::size`, a float.
pub const MAX_MEDIA_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

/// MIME types accepted for upload.
pub const ALLOWED_MEDIA_TYPES: [&str; 10] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
    "video/mp4",
    "video/mov",
    "video/avi",
    "video/mkv",
    "video/webm",
];

/// Why a file was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaError {
    TooLarge,
    UnsupportedType,
}

impl MediaError {
    /// Phrase-table key for the user-facing message.
    pub fn phrase_key(self) -> &'static str {
        match self {
            MediaError::TooLarge => "media_too_large",
            MediaError::UnsupportedType => "media_unsupported",
        }
    }
}

/// Coarse preview category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// Check a candidate file's size and MIME type.
///
/// A file of exactly [`MAX_MEDIA_BYTES`] passes; the cap is strict-greater.
pub fn validate(size: f64, mime: &str) -> Result<(), MediaError> {
    if size > MAX_MEDIA_BYTES {
        return Err(MediaError::TooLarge);
    }
    if !ALLOWED_MEDIA_TYPES.contains(&mime) {
        return Err(MediaError::UnsupportedType);
    }
    Ok(())
}

/// Classify a MIME type for preview rendering. Anything not `image/*` gets
/// the video treatment, matching the upload allow list.
pub fn kind_of(mime: &str) -> MediaKind {
    if mime.starts_with("image/") {
        MediaKind::Image
    } else {
        MediaKind::Video
    }
}

/// Human-readable size with up to two decimals, trailing zeros trimmed.
pub fn format_file_size(bytes: f64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0.0 {
        return "0 Bytes".to_owned();
    }

    let mut value = bytes;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

/// Validate a DOM file handle.
#[cfg(feature = "csr")]
pub fn validate_file(file: &web_sys::File) -> Result<(), MediaError> {
    validate(file.size(), &file.type_())
}

/// Object URL for previewing `file`; release it with [`revoke_preview_url`].
#[cfg(feature = "csr")]
pub fn preview_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

#[cfg(feature = "csr")]
pub fn revoke_preview_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}
