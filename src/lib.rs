//! Browser client for Travelog, a travel-journal web app.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled to WebAssembly and hydrated in the browser under the `hydrate`
//! feature; the `ssr` feature lets a host server render the same tree.
//! All traffic to the journal backend flows through `net::http` so every
//! request shares one base URL, content type, and credential policy.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
