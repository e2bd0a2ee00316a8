//! Three-Tier Demo Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod logging;
mod store;

use app::App;
use leptos::prelude::*;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    console_error_panic_hook::set_once();
    logging::init(logging::default_level());
    mount_to_body(App);
}
