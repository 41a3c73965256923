//! # ndarehe-client
//!
//! Leptos + WASM front-end for NDAREHE, a travel-booking web application
//! for discovering and booking accommodations, transportation, and tours
//! in Rwanda.
//!
//! This crate contains pages, components, application state, wire types,
//! and the REST client for the remote booking API. Browser-only code is
//! gated behind the `hydrate` feature so the guard/draft/store core
//! compiles and tests on native targets.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point — hydrates the server-rendered shell into the live app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
