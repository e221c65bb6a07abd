#![recursion_limit = "256"]
//! # visa-navigator
//!
//! Leptos + WASM client for browsing visa listings, publishing listings, and
//! tracking applications against the visa REST server.
//!
//! This crate contains pages, components, the session store with its access
//! guard, the REST and identity clients, and the client-side catalog logic.
//! Everything outside `csr`-gated blocks compiles and is tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("console logger not installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
