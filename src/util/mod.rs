//! Utility helpers shared across dashboard UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability. Everything touching
//! web-sys is feature-gated so the pure rules compile and test natively.

pub mod draft;
pub mod i18n;
pub mod media;
pub mod platforms;
pub mod storage;
pub mod theme;
