//! Shared numeric constants for the cropper control layer.

// ── Commands ────────────────────────────────────────────────────

/// Translation magnitude in pixels for a single move command.
pub const MOVE_STEP: f64 = 10.0;

/// Rotation applied when no explicit angle is given, in degrees.
pub const DEFAULT_ROTATE_STEP_DEG: f64 = 15.0;

/// Zoom ratio applied per toolbar zoom step.
pub const ZOOM_STEP: f64 = 0.1;
