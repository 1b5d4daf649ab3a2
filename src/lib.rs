//! # shotcontrol-ui
//!
//! Leptos + WASM front-end for ShotControl, a shooting-club finance ledger:
//! login, balance dashboard, transaction history, and transaction entry.
//!
//! This crate contains pages, components, application state, the typed REST
//! client, and the durable session storage layer. Browser-only code is gated
//! behind the `csr` feature so the state and network-boundary logic stays
//! compilable and unit-testable on native targets.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
