//! Shared application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule defines a plain state struct; the app root wraps them in
//! `RwSignal`s and provides them via context so pages and components share
//! one instance per concern.

pub mod compose;
pub mod notice;
pub mod prefs;
