//! CrossDeck client: a browser dashboard that drafts a post once and
//! publishes it to many social platforms in a single request.
//!
//! The crate is compiled two ways. With the `csr` feature it targets wasm
//! and mounts the Leptos app; without it, only the plain-logic modules are
//! compiled so the test suite runs natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}
