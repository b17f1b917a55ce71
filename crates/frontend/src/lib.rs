//! Activity Board - Yew WASM Frontend
//!
//! This crate provides the web UI for the activity sign-up board.

mod app;
mod components;
mod config;
mod surface;
mod transport;

pub use app::{App, AppProps};

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    });

    let config = config::load();
    log::debug!("Using activities API at {:?}", config.api_base);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
