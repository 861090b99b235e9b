//! Canvas charts for the site: the two fixed chart definitions, their
//! layout, formatting and rendering, plus the per-canvas instance slot.

pub mod format;
pub mod layout;
pub mod render;
pub mod slot;
pub mod spec;

#[cfg(target_arch = "wasm32")]
mod canvas;

use thiserror::Error;

pub use layout::{hit_test, layout_chart, nice_ticks, ChartLayout, Rect};
pub use render::{render_chart, Hover, RendererBackend, TextAlign, TextMeasure, TextStyle};
pub use slot::{ChartInstance, ChartSlot};
pub use spec::{ChartKind, ChartSpec, FillRule, Rgba, SegmentColors};

#[cfg(target_arch = "wasm32")]
pub use canvas::{CanvasBackend, ChartHandle};

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("no window")]
    NoWindow,
    #[error("js error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ChartError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ChartError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
