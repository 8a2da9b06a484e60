//! Operation seams over the externally owned cropper elements.
//!
//! The control layer works against these traits rather than the browser
//! types directly, so command semantics stay testable without a browser.
//! [`crate::element`] implements them on the real custom elements.

use std::future::Future;

use crate::export::ToCanvasOptions;
use crate::transform::TransformTuple;

/// Operations the image element exposes to the control layer.
pub trait ImageOps {
    /// Zoom by a multiplicative ratio.
    fn zoom(&self, ratio: f64);

    /// Rotate by a CSS angle token such as `"15deg"`.
    fn rotate(&self, angle: &str);

    /// Compose a scale pair with the current scale state.
    fn scale(&self, x: f64, y: f64);

    /// Translate by (dx, dy) pixels.
    fn translate(&self, dx: f64, dy: f64);

    /// Replace the current transform.
    fn set_transform(&self, transform: TransformTuple);

    /// The current transform, or `None` before the engine reports one.
    fn transform(&self) -> Option<TransformTuple>;
}

/// Operations the selection element exposes to the control layer.
pub trait SelectionOps {
    /// The raster surface an export produces.
    type Canvas;

    /// The engine's failure type, propagated untransformed.
    type Error;

    /// Restore the selection to its default placement and coverage.
    fn reset(&self);

    /// Render the selected region into a fresh canvas.
    fn to_canvas(
        &self,
        options: ToCanvasOptions,
    ) -> impl Future<Output = Result<Self::Canvas, Self::Error>>;
}
