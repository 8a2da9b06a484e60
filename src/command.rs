//! Command model: the direction and angle vocabulary the control layer
//! forwards to the cropper elements.

#[cfg(test)]
#[path = "command_test.rs"]
mod command_test;

use std::fmt;

use crate::consts::MOVE_STEP;

/// Mirror axis for a flip command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipDirection {
    Horizontal,
    Vertical,
}

impl FlipDirection {
    /// The (x, y) scale pair forwarded to the image element.
    ///
    /// The engine composes the pair with its current scale state, so two
    /// flips along the same axis restore the original orientation.
    #[must_use]
    pub fn scale_pair(self) -> (f64, f64) {
        match self {
            Self::Horizontal => (-1.0, 1.0),
            Self::Vertical => (1.0, -1.0),
        }
    }
}

/// Nudge direction for a move command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Left,
    Right,
    Up,
    Down,
}

impl MoveDirection {
    /// The (dx, dy) translation in pixels: [`MOVE_STEP`] along one axis,
    /// zero along the other.
    #[must_use]
    pub fn delta(self) -> (f64, f64) {
        match self {
            Self::Left => (-MOVE_STEP, 0.0),
            Self::Right => (MOVE_STEP, 0.0),
            Self::Up => (0.0, -MOVE_STEP),
            Self::Down => (0.0, MOVE_STEP),
        }
    }
}

/// CSS angle unit for a rotate command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Deg,
    Rad,
    Grad,
    Turn,
}

impl AngleUnit {
    /// The unit suffix of the angle token, e.g. `"deg"` in `"15deg"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deg => "deg",
            Self::Rad => "rad",
            Self::Grad => "grad",
            Self::Turn => "turn",
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
