//! Coordinate normalization and placement engine for signing documents.
//!
//! This crate owns the core of a signature/stamp placement dialog: it turns
//! pointer drag/resize gestures on a scaled A4 canvas into clamped pixel
//! positions, and converts those into a scale-independent percentage
//! coordinate system for persistence, so placements stay put across display
//! zooms, window sizes, and later re-renders. The host layer is responsible
//! only for wiring UI events to the engine, fetching assets and the rendered
//! document backdrop, and persisting the resulting [`host::SavePayload`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Session engine: gesture handling, add/remove, save |
//! | [`geometry`] | Canvas frame and percent/pixel conversions |
//! | [`placement`] | Placement entity and the in-memory store |
//! | [`surface`] | Rendered canvas region and pointer translation |
//! | [`gesture`] | Hit targets and the drag/resize state machine |
//! | [`layers`] | Ghost vs active layer separation and z-order |
//! | [`host`] | Serde types on the host boundary |
//! | [`consts`] | Shared numeric constants (page size, minimums, etc.) |

pub mod consts;
pub mod engine;
pub mod geometry;
pub mod gesture;
pub mod host;
pub mod layers;
pub mod placement;
pub mod surface;
