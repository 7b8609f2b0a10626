//! Shared numeric constants for the signboard crate.

// ── Canvas reference frame ──────────────────────────────────────

/// Logical page width in reference pixels (A4 at 96 dpi).
pub const A4_LOGICAL_WIDTH: f64 = 794.0;

/// Logical page height in reference pixels (A4 at 96 dpi).
pub const A4_LOGICAL_HEIGHT: f64 = 1123.0;

/// Display scale the dialog renders the page at by default.
pub const DEFAULT_DISPLAY_SCALE: f64 = 0.8;

// ── Placement policy ────────────────────────────────────────────

/// Minimum placement width in canvas pixels; resize floors here.
pub const MIN_PLACEMENT_WIDTH: f64 = 50.0;

/// Minimum placement height in canvas pixels; resize floors here.
pub const MIN_PLACEMENT_HEIGHT: f64 = 25.0;

/// Default width for a freshly added placement.
pub const DEFAULT_PLACEMENT_WIDTH: f64 = 160.0;

/// Default height for a freshly added placement.
pub const DEFAULT_PLACEMENT_HEIGHT: f64 = 70.0;

/// Top-left inset, in canvas pixels, where a new placement first appears.
pub const DEFAULT_PLACEMENT_INSET: f64 = 60.0;

/// Fallback width for a ghost record stored without a size.
pub const GHOST_FALLBACK_WIDTH: f64 = 150.0;

/// Fallback height for a ghost record stored without a size.
pub const GHOST_FALLBACK_HEIGHT: f64 = 80.0;

// ── Layers ──────────────────────────────────────────────────────

/// Stacking order of the ghost layer, above the backdrop.
pub const GHOST_LAYER_Z: i64 = 100;

/// Stacking order of the active layer, above the ghosts.
pub const ACTIVE_LAYER_Z: i64 = 200;

/// Opacity ghost placements are rendered with.
pub const GHOST_OPACITY: f64 = 0.45;
