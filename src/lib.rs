/// Suspended Tab Recovery - recovers tabs lost by The Great Suspender
/// from browser history. Built with Rust + WASM + Yew

pub mod bookmarks;
pub mod chrome;
pub mod domain;
pub mod error;
pub mod export;
pub mod history;
pub mod normalize;
pub mod options;
pub mod state;
pub mod storage;
pub mod suspension;
pub mod ui;
pub mod view;
pub mod visit_time;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export suspension-page decoding for JavaScript access
#[wasm_bindgen]
pub fn recover_url(url: &str) -> String {
    suspension::resolve_page(url, "")
        .map(|page| page.url)
        .unwrap_or_else(|_| url.to_string())
}

// Start the Yew app for the recovery page
#[wasm_bindgen]
pub fn start_recovery_page() {
    yew::Renderer::<ui::recovery::RecoveryPage>::new().render();
}
