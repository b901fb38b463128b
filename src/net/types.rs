//! Wire DTOs for the publishing endpoint.
//!
//! DESIGN
//! ======
//! The endpoint returns JSON on every path, including validation and server
//! errors, and the interesting HTTP statuses all carry the same envelope.
//! Every field defaults, so a minimal `{"success": false, "message": ...}`
//! error body and a full publish report both deserialize into [`PostResponse`]
//! without a separate error type.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Outcome of publishing to one platform.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformResult {
    #[serde(default)]
    pub success: bool,
    /// Human-readable line from the platform integration; shown verbatim.
    #[serde(default)]
    pub message: String,
}

/// Response envelope from `POST /post`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PostResponse {
    /// True only when every selected platform accepted the post.
    #[serde(default)]
    pub success: bool,
    /// Summary line; absent on some error paths.
    #[serde(default)]
    pub message: Option<String>,
    /// Per-platform outcomes keyed by wire tag. Empty for validation errors.
    #[serde(default)]
    pub results: BTreeMap<String, PlatformResult>,
    /// Server-side log row for the post, when one was created.
    #[serde(default)]
    pub post_id: Option<i64>,
    /// Whether the server stored an attachment with the post.
    #[serde(default)]
    pub media_included: bool,
}

impl PostResponse {
    /// The summary line, treating an empty string like an absent one.
    pub fn display_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    /// Per-platform outcomes in stable tag order.
    pub fn outcomes(&self) -> Vec<(String, PlatformResult)> {
        self.results
            .iter()
            .map(|(tag, result)| (tag.clone(), result.clone()))
            .collect()
    }
}
