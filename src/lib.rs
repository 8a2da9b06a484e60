//! Control layer for the CropperJS v2 custom elements.
//!
//! Translates high-level cropping intents (zoom, rotate, flip, move,
//! reset, export-to-canvas) into calls against the `<cropper-image>` and
//! `<cropper-selection>` elements, and keeps the image's original
//! transform so a reset restores the as-loaded geometry. The elements are
//! created and owned by the hosting UI; this crate only holds optional
//! handles to them and tolerates their absence at every call site.
//! Decoding, rendering, hit-testing, and gesture handling all stay in the
//! underlying engine. No pixels are touched here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controls`] | The command surface, [`controls::Controls`], generic over the element seam |
//! | [`ops`] | Operations the elements expose to [`controls::Controls`] |
//! | [`element`] | wasm-bindgen bindings to the cropper custom elements |
//! | [`transform`] | The affine transform value applied on reset |
//! | [`command`] | Flip/move directions and angle units |
//! | [`export`] | Canvas export options |
//! | [`consts`] | Step sizes and defaults |

pub mod command;
pub mod consts;
pub mod controls;
pub mod element;
pub mod export;
pub mod ops;
pub mod transform;
