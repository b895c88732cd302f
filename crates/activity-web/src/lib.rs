//! Activity Board Web Frontend
//!
//! Leptos-based WASM frontend: mounts the activity board into the page served
//! by `activity-server`.

mod api;
mod app;
mod components;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
