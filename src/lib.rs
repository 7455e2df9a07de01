//! # vaccitrack
//!
//! Leptos + WASM frontend for parents tracking their children's vaccination
//! schedule, with voice-reminder notifications and a regional coverage/supply
//! dashboard for administrators.
//!
//! The crate is a thin client. Children, vaccination records, regions and
//! stock all live behind the remote API; this crate holds pages, components,
//! local UI state, and the fetch wrappers that talk to that API.

pub mod app;
pub mod components;
pub mod config;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
