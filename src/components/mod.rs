//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and form surfaces while reading and
//! writing shared state from Leptos context providers.

pub mod header;
pub mod media_field;
pub mod notice_host;
pub mod platform_badge;
pub mod platform_picker;
