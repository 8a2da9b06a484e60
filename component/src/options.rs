//! Typed prop vocabulary for the cropper components.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

/// Exported canvas sizing, in pixels. The engine picks its own size for
/// axes left unset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dimensions {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// What dragging a `<cropper-handle>` does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HandleAction {
    /// Drag out a new selection.
    #[default]
    Select,
    /// Pan the image.
    Move,
    /// Scale the image.
    Scale,
    NResize,
    EResize,
    SResize,
    WResize,
    NeResize,
    NwResize,
    SeResize,
    SwResize,
    /// Ignore drags.
    None,
}

impl HandleAction {
    /// The `action` attribute token the handle element expects.
    #[must_use]
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Move => "move",
            Self::Scale => "scale",
            Self::NResize => "n-resize",
            Self::EResize => "e-resize",
            Self::SResize => "s-resize",
            Self::WResize => "w-resize",
            Self::NeResize => "ne-resize",
            Self::NwResize => "nw-resize",
            Self::SeResize => "se-resize",
            Self::SwResize => "sw-resize",
            Self::None => "none",
        }
    }
}

/// Selection handles the host wants left out of the markup.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisabledHandles {
    pub n: bool,
    pub e: bool,
    pub s: bool,
    pub w: bool,
    pub ne: bool,
    pub nw: bool,
    pub se: bool,
    pub sw: bool,
    /// The whole-selection move handle.
    pub move_handle: bool,
}

impl DisabledHandles {
    /// Whether the handle for `action` should be left out.
    #[must_use]
    pub fn is_disabled(self, action: HandleAction) -> bool {
        match action {
            HandleAction::NResize => self.n,
            HandleAction::EResize => self.e,
            HandleAction::SResize => self.s,
            HandleAction::WResize => self.w,
            HandleAction::NeResize => self.ne,
            HandleAction::NwResize => self.nw,
            HandleAction::SeResize => self.se,
            HandleAction::SwResize => self.sw,
            HandleAction::Move => self.move_handle,
            _ => false,
        }
    }
}

/// Export behavior for the toolbar's crop action.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportSettings {
    /// Size of the exported canvas.
    pub size: Option<Dimensions>,
    /// Background painted behind transparent regions.
    pub fill_color: Option<String>,
    /// Whether the export context smooths scaled pixels.
    pub smoothing: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self { size: None, fill_color: None, smoothing: true }
    }
}
