//! Bindings to the CropperJS v2 custom elements.
//!
//! Thin `extern` declarations over the `$`-prefixed element methods, plus
//! [`ImageOps`]/[`SelectionOps`] impls so [`crate::controls::Controls`]
//! can drive the real elements. The host page must load CropperJS v2 so
//! the custom elements are defined; nothing here registers elements.

use js_sys::{Array, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlCanvasElement, HtmlElement};

use crate::export::ToCanvasOptions;
use crate::ops::{ImageOps, SelectionOps};
use crate::transform::TransformTuple;

#[wasm_bindgen]
extern "C" {
    /// The `<cropper-image>` element.
    #[wasm_bindgen(extends = HtmlElement)]
    pub type CropperImage;

    #[wasm_bindgen(method, js_name = "$zoom")]
    fn zoom_js(this: &CropperImage, ratio: f64);

    #[wasm_bindgen(method, js_name = "$rotate")]
    fn rotate_js(this: &CropperImage, angle: &str);

    #[wasm_bindgen(method, js_name = "$scale")]
    fn scale_js(this: &CropperImage, x: f64, y: f64);

    #[wasm_bindgen(method, js_name = "$move")]
    fn move_js(this: &CropperImage, dx: f64, dy: f64);

    #[wasm_bindgen(method, js_name = "$setTransform", variadic)]
    fn set_transform_js(this: &CropperImage, components: &Array);

    #[wasm_bindgen(method, js_name = "$getTransform")]
    fn get_transform_js(this: &CropperImage) -> JsValue;

    /// Resolves once the underlying image has loaded.
    #[wasm_bindgen(method, js_name = "$ready")]
    pub fn ready(this: &CropperImage) -> Promise;

    /// The `<cropper-canvas>` stage element.
    ///
    /// Held by the control layer but never commanded; the stage runs its
    /// own layout and event plumbing.
    #[wasm_bindgen(extends = HtmlElement)]
    pub type CropperCanvas;

    /// The `<cropper-selection>` element.
    #[wasm_bindgen(extends = HtmlElement)]
    pub type CropperSelection;

    #[wasm_bindgen(method, js_name = "$reset")]
    fn reset_js(this: &CropperSelection);

    #[wasm_bindgen(method, js_name = "$toCanvas")]
    fn to_canvas_js(this: &CropperSelection, options: &JsValue) -> Promise;
}

impl ImageOps for CropperImage {
    fn zoom(&self, ratio: f64) {
        self.zoom_js(ratio);
    }

    fn rotate(&self, angle: &str) {
        self.rotate_js(angle);
    }

    fn scale(&self, x: f64, y: f64) {
        self.scale_js(x, y);
    }

    fn translate(&self, dx: f64, dy: f64) {
        self.move_js(dx, dy);
    }

    fn set_transform(&self, transform: TransformTuple) {
        let components = Array::new();
        for value in transform.as_slice() {
            components.push(&JsValue::from_f64(*value));
        }
        self.set_transform_js(&components);
    }

    fn transform(&self) -> Option<TransformTuple> {
        // The element reports `undefined` or an empty array before it has
        // initialized; both map to `None`.
        let array: Array = self.get_transform_js().dyn_into().ok()?;
        let components: Vec<f64> = array.iter().filter_map(|value| value.as_f64()).collect();
        TransformTuple::from_slice(&components)
    }
}

impl SelectionOps for CropperSelection {
    type Canvas = HtmlCanvasElement;
    type Error = JsValue;

    fn reset(&self) {
        self.reset_js();
    }

    async fn to_canvas(&self, options: ToCanvasOptions) -> Result<HtmlCanvasElement, JsValue> {
        let canvas = JsFuture::from(self.to_canvas_js(&options.to_js())).await?;
        canvas.dyn_into()
    }
}
