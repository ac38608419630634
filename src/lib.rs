//! # suvidha-portal
//!
//! Leptos + WASM frontend for the Suvidha citizen-services portal: routed
//! pages for browsing municipal services, a mock billing dashboard, and
//! authentication screens, built around the session lifecycle core in
//! [`session`].
//!
//! There is no networked backend: the credential directory is an in-memory
//! table behind a lookup seam, and the only persistence is the browser's
//! `sessionStorage`.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod session;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
