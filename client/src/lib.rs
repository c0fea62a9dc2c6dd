//! # client
//!
//! Leptos + WASM login screen.
//!
//! This crate contains the route-level pages, the login form state machine,
//! the session collaborator, and the HTTP client for the authentication
//! endpoint. The root `signin` binary server-renders [`app::App`] and the
//! browser hydrates it through [`hydrate`].

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
