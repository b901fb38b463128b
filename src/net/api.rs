//! REST helper for the publishing endpoint.
//!
//! Browser (csr): a real multipart POST via `gloo-net`. Native: a stub
//! returning an error, since publishing only means anything in the browser.
//!
//! ERROR HANDLING
//! ==============
//! [`submit_post`] returns `Err` only for transport and JSON-decoding
//! failures. The endpoint reports its own validation and server errors
//! inside a well-formed JSON envelope, which comes back as `Ok`; the
//! envelope's `success` flag is the truth, and the HTTP status is never
//! consulted.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeSet;

use super::types::PostResponse;
use crate::util::platforms::Platform;

/// Publishing endpoint path.
pub const PUBLISH_ENDPOINT: &str = "/post";

#[cfg(any(test, feature = "csr"))]
fn send_failed_message(detail: &str) -> String {
    format!("publish request failed: {detail}")
}

#[cfg(any(test, feature = "csr"))]
fn decode_failed_message(detail: &str) -> String {
    format!("publish response was not valid JSON: {detail}")
}

/// Submit a post as multipart form data to [`PUBLISH_ENDPOINT`].
///
/// Selected platforms become repeated `platforms` fields in stable order;
/// the media file, when present, is attached under its original filename.
///
/// # Errors
///
/// Returns an error string when the form cannot be assembled, the request
/// cannot be sent, or the response body does not decode as the envelope.
pub async fn submit_post(
    content: &str,
    platforms: &BTreeSet<Platform>,
    #[cfg(feature = "csr")] media: Option<web_sys::File>,
) -> Result<PostResponse, String> {
    #[cfg(feature = "csr")]
    {
        let form = web_sys::FormData::new()
            .map_err(|e| send_failed_message(&format!("{e:?}")))?;
        form.append_with_str("content", content)
            .map_err(|e| send_failed_message(&format!("{e:?}")))?;
        for platform in platforms {
            form.append_with_str("platforms", platform.as_tag())
                .map_err(|e| send_failed_message(&format!("{e:?}")))?;
        }
        if let Some(file) = media {
            form.append_with_blob_and_filename("media", &file, &file.name())
                .map_err(|e| send_failed_message(&format!("{e:?}")))?;
        }

        let resp = gloo_net::http::Request::post(PUBLISH_ENDPOINT)
            .body(form)
            .map_err(|e| send_failed_message(&e.to_string()))?
            .send()
            .await
            .map_err(|e| send_failed_message(&e.to_string()))?;

        resp.json::<PostResponse>()
            .await
            .map_err(|e| decode_failed_message(&e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (content, platforms);
        Err("publishing is only available in the browser".to_owned())
    }
}
