//! # client
//!
//! Leptos + WASM frontend for the lchaty chat portal and admin dashboard.
//!
//! This crate contains the route tree, pages, the `RouteGuard` component, UI
//! preference state, and the browser transport that plugs `gloo-net` into the
//! `session` core. Everything that decides who is signed in lives in
//! `session`; this crate only renders it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
