//! Portal - landing, login and registration pages
//!
//! A small web front-end for an external authentication service,
//! built with Leptos and WebAssembly.
#![recursion_limit = "256"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use crate::core::ApiConfig;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(|| {
        provide_context(ApiConfig::from_document());
        view! { <App/> }
    });
}
