//! # jobwatch-ui
//!
//! Leptos + WASM frontend for the jobwatch monitoring platform. This crate
//! holds the client-side session layer — credential lifecycle, localStorage
//! persistence, and the navigation guard that gates protected views — plus
//! the pages and layout wired around it. The backend is an external
//! `/api/v1` JSON service.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
