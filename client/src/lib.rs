//! # kokmaisa-client
//!
//! Leptos + WASM front-end for the KokMaisa farm monitoring application.
//!
//! The crate carries the session core every page depends on (credential
//! store client, token holder, session provider, route guard) together with
//! the pages that consume it. Farm data itself lives behind the remote REST
//! API; nothing here is a system of record besides the persisted token.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
