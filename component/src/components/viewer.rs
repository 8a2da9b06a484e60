//! Live preview of a cropper selection.

use leptos::prelude::*;

/// Mirror of a selection (`<cropper-viewer>`).
///
/// Renders the engine's viewer element pointed at a selection, e.g.
/// `selection="#cropper-selection"`. The engine keeps the preview in sync
/// on its own; no wiring through the control layer is needed.
#[component]
pub fn CropperViewer(
    /// CSS selector of the selection to mirror.
    #[prop(into)] selection: String,
    /// Which axes the viewer resizes along to track the selection.
    #[prop(default = String::from("vertical"))] resize: String,
) -> impl IntoView {
    view! {
        <div class="cropper-viewer">
            <cropper-viewer selection=selection resize=resize></cropper-viewer>
        </div>
    }
}
