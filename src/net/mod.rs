//! Networking modules for the publishing HTTP boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the multipart publish call; `types` defines the response
//! envelope it decodes.

pub mod api;
pub mod types;
