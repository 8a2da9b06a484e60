//! The command surface over the cropper elements.

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

use crate::command::{AngleUnit, FlipDirection, MoveDirection};
use crate::consts::DEFAULT_ROTATE_STEP_DEG;
use crate::export::ToCanvasOptions;
use crate::ops::{ImageOps, SelectionOps};
use crate::transform::TransformTuple;

/// Imperative controls over externally owned cropper elements.
///
/// Holds non-owning handles to the image, stage, and selection elements
/// plus the original transform captured once at image load. The handles
/// are attached and dropped by the hosting UI as elements mount and
/// unmount; every command checks the handles it needs first and degrades
/// to a no-op while they are absent. Commands forward in caller order and
/// are never queued or batched.
#[derive(Debug, Clone)]
pub struct Controls<I, C, S> {
    image: Option<I>,
    canvas: Option<C>,
    selection: Option<S>,
    original_transform: Option<TransformTuple>,
}

impl<I, C, S> Default for Controls<I, C, S> {
    fn default() -> Self {
        Self { image: None, canvas: None, selection: None, original_transform: None }
    }
}

impl<I, C, S> Controls<I, C, S> {
    /// Controls with no elements attached; every command no-ops until
    /// handles arrive.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Handle lifecycle ---

    /// Attach the image element handle.
    pub fn attach_image(&mut self, image: I) {
        self.image = Some(image);
    }

    /// Attach the stage element handle.
    ///
    /// Held for hosts that hand over all three elements; no command
    /// targets the stage itself.
    pub fn attach_canvas(&mut self, canvas: C) {
        self.canvas = Some(canvas);
    }

    /// Attach the selection element handle.
    pub fn attach_selection(&mut self, selection: S) {
        self.selection = Some(selection);
    }

    /// Drop every element handle, e.g. when the host unmounts.
    ///
    /// The captured original transform survives so a remount can still
    /// reset to the as-loaded geometry.
    pub fn detach(&mut self) {
        self.image = None;
        self.canvas = None;
        self.selection = None;
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    #[must_use]
    pub fn has_canvas(&self) -> bool {
        self.canvas.is_some()
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.selection.is_some()
    }

    // --- Original transform ---

    /// Record the transform `reset` restores.
    ///
    /// Supplied by the host's load notification; replaced only by another
    /// explicit call (e.g. the image was reloaded).
    pub fn set_original_transform(&mut self, transform: TransformTuple) {
        self.original_transform = Some(transform);
    }

    /// The captured original transform, if any.
    #[must_use]
    pub fn original_transform(&self) -> Option<TransformTuple> {
        self.original_transform
    }
}

impl<I: ImageOps, C, S> Controls<I, C, S> {
    /// Capture the image's current transform as the reset baseline.
    ///
    /// No-op while the image handle is absent or the engine has not
    /// reported a transform yet.
    pub fn capture_original_transform(&mut self) {
        if let Some(transform) = self.image.as_ref().and_then(ImageOps::transform) {
            self.original_transform = Some(transform);
        }
    }

    // --- Commands ---

    /// Zoom the image by a multiplicative ratio.
    ///
    /// The ratio is rounded to 2 decimal places so repeated small
    /// adjustments don't accumulate floating-point drift.
    pub fn zoom(&self, ratio: f64) {
        if let Some(image) = &self.image {
            image.zoom((ratio * 100.0).round() / 100.0);
        }
    }

    /// Rotate the image by `degree` in the given unit.
    pub fn rotate(&self, degree: f64, unit: AngleUnit) {
        if let Some(image) = &self.image {
            image.rotate(&format!("{degree}{unit}"));
        }
    }

    /// Rotate by the default step of [`DEFAULT_ROTATE_STEP_DEG`] degrees.
    pub fn rotate_default(&self) {
        self.rotate(DEFAULT_ROTATE_STEP_DEG, AngleUnit::Deg);
    }

    /// Mirror the image along the given axis.
    ///
    /// Forwards the scale pair as-is; the engine composes it with its
    /// current scale state, so this is not an absolute orientation.
    pub fn flip(&self, direction: FlipDirection) {
        if let Some(image) = &self.image {
            let (x, y) = direction.scale_pair();
            image.scale(x, y);
        }
    }

    /// Nudge the image by the fixed move step.
    pub fn move_by(&self, direction: MoveDirection) {
        if let Some(image) = &self.image {
            let (dx, dy) = direction.delta();
            image.translate(dx, dy);
        }
    }

    /// The image's current transform, or [`TransformTuple::BASELINE`]
    /// while the handle is absent or the engine reports none.
    #[must_use]
    pub fn transform(&self) -> TransformTuple {
        self.image
            .as_ref()
            .and_then(ImageOps::transform)
            .unwrap_or(TransformTuple::BASELINE)
    }
}

impl<I: ImageOps, C, S: SelectionOps> Controls<I, C, S> {
    /// Restore the image to its original transform, then restore the
    /// selection to its default coverage.
    ///
    /// Requires both the image and selection handles; no-op on either
    /// while one is absent. The image transform is applied strictly
    /// before the selection reset so the selection recomputes against the
    /// restored geometry.
    pub fn reset(&self) {
        let (Some(image), Some(selection)) = (&self.image, &self.selection) else {
            return;
        };
        image.set_transform(self.original_transform.unwrap_or(TransformTuple::BASELINE));
        selection.reset();
    }

    /// Render the current selection into a fresh canvas.
    ///
    /// Resolves to `None` immediately, without suspending, while the
    /// selection handle is absent; otherwise yields the engine's result
    /// with failures propagated untransformed. There is no retry — the
    /// caller may invoke again once the handle exists.
    pub async fn to_canvas(
        &self,
        options: ToCanvasOptions,
    ) -> Option<Result<S::Canvas, S::Error>> {
        let selection = self.selection.as_ref()?;
        Some(selection.to_canvas(options).await)
    }
}
