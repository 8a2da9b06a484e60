//! Button strip forwarding cropping commands to the shared controls.

use leptos::prelude::*;

use cropper::command::{AngleUnit, FlipDirection, MoveDirection};
use cropper::consts::{DEFAULT_ROTATE_STEP_DEG, ZOOM_STEP};

use crate::components::cropper::SharedControls;
use crate::options::ExportSettings;

/// File name for the downloaded crop.
#[cfg(feature = "hydrate")]
const EXPORT_FILE_NAME: &str = "cropped.png";

/// One toolbar command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    ZoomIn,
    ZoomOut,
    RotateLeft,
    RotateRight,
    FlipHorizontal,
    FlipVertical,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Reset,
    Export,
}

/// Button definition for the strip.
struct ActionDef {
    action: Action,
    label: &'static str,
    icon: &'static str,
}

const ACTIONS: &[ActionDef] = &[
    ActionDef { action: Action::ZoomIn, label: "Zoom in", icon: "\u{2295}" },
    ActionDef { action: Action::ZoomOut, label: "Zoom out", icon: "\u{2296}" },
    ActionDef { action: Action::RotateLeft, label: "Rotate left", icon: "\u{21ba}" },
    ActionDef { action: Action::RotateRight, label: "Rotate right", icon: "\u{21bb}" },
    ActionDef { action: Action::FlipHorizontal, label: "Flip horizontal", icon: "\u{2194}" },
    ActionDef { action: Action::FlipVertical, label: "Flip vertical", icon: "\u{2195}" },
    ActionDef { action: Action::MoveLeft, label: "Move left", icon: "\u{2190}" },
    ActionDef { action: Action::MoveRight, label: "Move right", icon: "\u{2192}" },
    ActionDef { action: Action::MoveUp, label: "Move up", icon: "\u{2191}" },
    ActionDef { action: Action::MoveDown, label: "Move down", icon: "\u{2193}" },
    ActionDef { action: Action::Reset, label: "Reset", icon: "\u{21a9}" },
    ActionDef { action: Action::Export, label: "Crop", icon: "\u{2702}" },
];

/// Command toolbar for the cropper.
///
/// Reads the [`SharedControls`] from context, so it must render inside a
/// [`crate::components::cropper::Cropper`].
#[component]
pub fn CropperToolbar(
    /// Export behavior for the crop action.
    #[prop(optional)]
    export: ExportSettings,
) -> impl IntoView {
    let controls = expect_context::<SharedControls>();

    let buttons = ACTIONS
        .iter()
        .map(|def| {
            let action = def.action;
            let label = def.label;
            let icon = def.icon;
            let export = export.clone();

            let on_click = move |_| run(action, controls, &export);

            view! {
                <button class="cropper-toolbar__btn" title=label on:click=on_click>
                    {icon}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="cropper-toolbar">{buttons}</div> }
}

/// Forward one toolbar action to the control layer.
fn run(action: Action, controls: SharedControls, export: &ExportSettings) {
    match action {
        Action::ZoomIn => controls.with_value(|c| c.zoom(ZOOM_STEP)),
        Action::ZoomOut => controls.with_value(|c| c.zoom(-ZOOM_STEP)),
        Action::RotateLeft => {
            controls.with_value(|c| c.rotate(-DEFAULT_ROTATE_STEP_DEG, AngleUnit::Deg));
        }
        Action::RotateRight => controls.with_value(|c| c.rotate_default()),
        Action::FlipHorizontal => controls.with_value(|c| c.flip(FlipDirection::Horizontal)),
        Action::FlipVertical => controls.with_value(|c| c.flip(FlipDirection::Vertical)),
        Action::MoveLeft => controls.with_value(|c| c.move_by(MoveDirection::Left)),
        Action::MoveRight => controls.with_value(|c| c.move_by(MoveDirection::Right)),
        Action::MoveUp => controls.with_value(|c| c.move_by(MoveDirection::Up)),
        Action::MoveDown => controls.with_value(|c| c.move_by(MoveDirection::Down)),
        Action::Reset => controls.with_value(|c| c.reset()),
        Action::Export => export_selection(controls, export.clone()),
    }
}

/// Export the current selection and hand it to the user as a download.
fn export_selection(controls: SharedControls, export: ExportSettings) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let Some(result) = run_export(controls, &export).await else {
                log::warn!("crop requested before the selection mounted");
                return;
            };
            match result {
                Ok(canvas) => download_canvas(&canvas),
                Err(err) => log::warn!("cropped canvas export failed: {err:?}"),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (controls, export);
    }
}

/// Render the selection into a canvas sized and painted per `export`.
///
/// Fill color and smoothing ride in through the pre-draw hook, so the
/// control layer forwards its own options untouched.
#[cfg(feature = "hydrate")]
async fn run_export(
    controls: SharedControls,
    export: &ExportSettings,
) -> Option<Result<web_sys::HtmlCanvasElement, wasm_bindgen::JsValue>> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use cropper::export::ToCanvasOptions;

    let fill = export.fill_color.clone();
    let smoothing = export.smoothing;
    let before_draw: Closure<dyn FnMut(web_sys::CanvasRenderingContext2d, web_sys::HtmlCanvasElement)> =
        Closure::new(move |context: web_sys::CanvasRenderingContext2d, canvas: web_sys::HtmlCanvasElement| {
            context.set_image_smoothing_enabled(smoothing);
            if let Some(color) = &fill {
                context.set_fill_style_str(color);
                context.fill_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));
            }
        });

    let options = ToCanvasOptions {
        width: export.size.and_then(|size| size.width),
        height: export.size.and_then(|size| size.height),
        before_draw: Some(before_draw.as_ref().unchecked_ref::<js_sys::Function>().clone()),
    };

    // Snapshot the handles so the draw outlives any detach in between.
    let snapshot = controls.get_value();
    let result = snapshot.to_canvas(options).await;
    drop(before_draw);
    result
}

/// Hand the canvas to the user as a PNG download.
#[cfg(feature = "hydrate")]
fn download_canvas(canvas: &web_sys::HtmlCanvasElement) {
    use wasm_bindgen::JsCast;

    let Ok(url) = canvas.to_data_url() else {
        return;
    };
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(anchor) = document.create_element("a") else {
        return;
    };
    let anchor: web_sys::HtmlAnchorElement = anchor.unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(EXPORT_FILE_NAME);
    anchor.click();
}
