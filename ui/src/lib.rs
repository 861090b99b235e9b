pub mod app;
pub mod content;
pub mod resources;
pub mod state;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod activator;

pub use app::App;

use thiserror::Error;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
use leptos::*;
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
use wasm_bindgen::prelude::*;

#[derive(Debug, Error)]
pub enum ActivatorError {
    #[error("no window or document")]
    NoDocument,
    #[error("js error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ActivatorError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ActivatorError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount_to_body(|| view! { <App/> });
}
