//! # cropper-component
//!
//! Leptos components over the `cropper` control layer: markup for the
//! CropperJS v2 custom elements, mount wiring for the element handles, a
//! command toolbar, and an optional live viewer.
//!
//! The hosting application loads CropperJS v2 (which defines the custom
//! elements) and initializes a logger if diagnostics are wanted; this
//! crate only emits through `log`.

pub mod components;
pub mod options;
