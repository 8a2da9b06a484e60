//! Bridge component mounting the cropper custom elements and wiring
//! their handles into the shared control layer.

use leptos::prelude::*;

use cropper::controls::Controls;
use cropper::element::{CropperCanvas, CropperImage, CropperSelection};

use crate::components::toolbar::CropperToolbar;
use crate::options::{DisabledHandles, ExportSettings, HandleAction};

/// Shared imperative controls over the mounted cropper elements.
///
/// Provided as context by [`Cropper`]; the toolbar and host code reach
/// the command surface through it. Stored locally because element handles
/// are not thread-safe.
pub type SharedControls =
    StoredValue<Controls<CropperImage, CropperCanvas, CropperSelection>, LocalStorage>;

/// Resize handles rendered inside the selection, clockwise from north.
const RESIZE_ACTIONS: [HandleAction; 8] = [
    HandleAction::NResize,
    HandleAction::NeResize,
    HandleAction::EResize,
    HandleAction::SeResize,
    HandleAction::SResize,
    HandleAction::SwResize,
    HandleAction::WResize,
    HandleAction::NwResize,
];

/// Image cropping widget over the CropperJS custom elements.
///
/// Renders the stage, image, shade, selection, and handle elements, then
/// attaches their handles to a [`SharedControls`] (also provided as
/// context) once they are in the DOM. The original transform is captured
/// when the image reports ready, so a later reset restores the as-loaded
/// geometry. Handles detach on cleanup; commands issued around mount and
/// unmount degrade to no-ops instead of failing.
#[component]
pub fn Cropper(
    /// Image source URL.
    #[prop(into)] src: String,
    /// Alternative text for the image element.
    #[prop(optional)] alt: Option<String>,
    /// CORS mode forwarded to the underlying image request.
    #[prop(optional)] cross_origin: Option<String>,
    /// Fixed width/height ratio for the selection; freeform when unset.
    #[prop(optional)] aspect_ratio: Option<f64>,
    /// Fraction of the stage the initial selection covers.
    #[prop(default = 0.5)] initial_coverage: f64,
    /// What dragging the empty stage does.
    #[prop(default = HandleAction::Select)] stage_action: HandleAction,
    /// Selection handles left out of the markup.
    #[prop(optional)] disabled_handles: DisabledHandles,
    /// Darken the stage outside the selection.
    #[prop(default = true)] shade: bool,
    /// Snap the selection to whole pixels.
    #[prop(default = false)] precise: bool,
    /// Allow the user to resize the selection.
    #[prop(default = true)] resizable: bool,
    /// Render the command toolbar.
    #[prop(default = true)] toolbar: bool,
    /// Export behavior for the toolbar's crop action.
    #[prop(optional)] export: ExportSettings,
    /// Id prefix for the mounted elements, for hosts embedding more than
    /// one cropper.
    #[prop(default = String::from("cropper"))] id: String,
) -> impl IntoView {
    let controls: SharedControls = StoredValue::new_local(Controls::new());
    provide_context(controls);

    let canvas_id = format!("{id}-canvas");
    let image_id = format!("{id}-image");
    let selection_id = format!("{id}-selection");

    // Pick up the element handles once the custom elements are in the DOM.
    {
        let canvas_id = canvas_id.clone();
        let image_id = image_id.clone();
        let selection_id = selection_id.clone();
        Effect::new(move || {
            #[cfg(feature = "hydrate")]
            attach_elements(controls, &canvas_id, &image_id, &selection_id);
            #[cfg(not(feature = "hydrate"))]
            let _ = (&canvas_id, &image_id, &selection_id);
        });
    }

    on_cleanup(move || {
        controls.update_value(Controls::detach);
    });

    let handles = RESIZE_ACTIONS
        .iter()
        .filter(|action| resizable && !disabled_handles.is_disabled(**action))
        .map(|action| view! { <cropper-handle action=action.as_token()/> })
        .collect::<Vec<_>>();

    view! {
        <div class="cropper">
            {toolbar.then(|| view! { <CropperToolbar export=export.clone()/> })}
            <cropper-canvas id=canvas_id background=true>
                <cropper-image
                    id=image_id
                    src=src
                    alt=alt.unwrap_or_else(|| String::from("The image to crop"))
                    crossorigin=cross_origin
                    rotatable=true
                    scalable=true
                    skewable=true
                    translatable=true
                />
                {shade.then(|| view! { <cropper-shade hidden=true/> })}
                <cropper-handle action=stage_action.as_token() plain=true/>
                <cropper-selection
                    id=selection_id
                    initial-coverage=initial_coverage
                    aspect-ratio=aspect_ratio
                    movable={!disabled_handles.move_handle}
                    resizable=resizable
                    precise=precise
                >
                    <cropper-grid role="grid" bordered=true covered=true/>
                    <cropper-crosshair centered=true/>
                    {(!disabled_handles.move_handle).then(|| view! {
                        <cropper-handle action="move" theme-color="rgba(255, 255, 255, 0.35)"/>
                    })}
                    {handles}
                </cropper-selection>
            </cropper-canvas>
        </div>
    }
}

/// Query the mounted custom elements and hand their handles to the
/// control layer, then capture the as-loaded transform.
#[cfg(feature = "hydrate")]
fn attach_elements(
    controls: SharedControls,
    canvas_id: &str,
    image_id: &str,
    selection_id: &str,
) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    // Custom elements are opaque to web-sys; the markup ids are the
    // source of truth for these casts.
    let canvas = document
        .get_element_by_id(canvas_id)
        .map(|el| el.unchecked_into::<CropperCanvas>());
    let image = document
        .get_element_by_id(image_id)
        .map(|el| el.unchecked_into::<CropperImage>());
    let selection = document
        .get_element_by_id(selection_id)
        .map(|el| el.unchecked_into::<CropperSelection>());

    if canvas.is_none() || image.is_none() || selection.is_none() {
        log::warn!("cropper elements missing from the document; commands stay inert");
    }

    controls.update_value(|c| {
        if let Some(canvas) = canvas {
            c.attach_canvas(canvas);
        }
        if let Some(image) = image.clone() {
            c.attach_image(image);
        }
        if let Some(selection) = selection {
            c.attach_selection(selection);
        }
    });

    // Capture the as-loaded transform once the engine reports ready.
    if let Some(image) = image {
        leptos::task::spawn_local(async move {
            match wasm_bindgen_futures::JsFuture::from(image.ready()).await {
                Ok(_) => controls.update_value(Controls::capture_original_transform),
                Err(err) => log::warn!("cropper image failed to load: {err:?}"),
            }
        });
    }
}
