//! Pricing Section Web Frontend
//!
//! Leptos-based WASM frontend rendering the plans, the billing-period toggle
//! and the business-model table.

mod app;
mod components;
mod pages;
mod style;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
