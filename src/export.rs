//! Canvas export options forwarded to the selection element.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::JsValue;

/// Sizing and pre-draw options for exporting the cropped region.
///
/// Forwarded verbatim to the engine's canvas export; `before_draw` runs
/// against the fresh canvas's 2D context before the pixels are copied, so
/// hosts can paint a background or tune smoothing there.
#[derive(Debug, Clone, Default)]
pub struct ToCanvasOptions {
    /// Width of the exported canvas in pixels.
    pub width: Option<f64>,
    /// Height of the exported canvas in pixels.
    pub height: Option<f64>,
    /// Hook invoked with `(context, canvas)` before the crop is drawn.
    pub before_draw: Option<Function>,
}

impl ToCanvasOptions {
    /// Options with every field unset; the engine picks its defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The `{ width, height, beforeDraw }` object the element expects.
    /// Unset fields are omitted entirely.
    #[must_use]
    pub fn to_js(&self) -> JsValue {
        let options = Object::new();
        if let Some(width) = self.width {
            let _ = Reflect::set(&options, &JsValue::from_str("width"), &JsValue::from_f64(width));
        }
        if let Some(height) = self.height {
            let _ = Reflect::set(&options, &JsValue::from_str("height"), &JsValue::from_f64(height));
        }
        if let Some(before_draw) = &self.before_draw {
            let _ = Reflect::set(&options, &JsValue::from_str("beforeDraw"), before_draw.as_ref());
        }
        options.into()
    }
}
