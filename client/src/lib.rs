//! # library-client
//!
//! Leptos + WASM frontend for the Library Store catalog.
//!
//! This crate contains pages, components, session state, network types, and
//! the REST helpers that talk to the external users and books services. The
//! `library-store` host renders it on the server (`ssr`) and the browser
//! build (`hydrate`) takes over from that markup.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the reactive app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
