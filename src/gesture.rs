//! Gesture model: hit targets, cursors, and the drag/resize state machine.
//!
//! A gesture is one continuous pointer-down → move → up sequence. All context
//! a gesture needs (which placement, where it was grabbed, its starting size)
//! lives in the active [`GestureState`] variant, created on pointer-down and
//! dropped on pointer-up. There are no document-global flags: move and up
//! handlers are no-ops while the state is `Idle`, and a pointer-down while a
//! gesture is in flight is rejected, so two canvases or two items can never
//! cross-talk.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::geometry::Point;
use crate::placement::PlacementId;

/// Which control of a placement a pointer-down landed on.
///
/// The host's hit-testing (DOM event targets) reports this; the engine
/// dispatches on it: body starts a drag, the resize handle starts a resize,
/// the remove control destroys the placement immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// The placement body, excluding its controls.
    Body,
    /// The bottom-right resize handle.
    ResizeHandle,
    /// The remove ("✕") control.
    RemoveControl,
}

/// A pointer-down target: which placement, and which part of it.
#[derive(Debug, Clone, Copy)]
pub struct HitTarget {
    pub id: PlacementId,
    pub part: HitPart,
}

/// Cursor the host should show, reported alongside gesture transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Resting over a draggable item.
    Grab,
    /// A drag is in flight.
    Grabbing,
    /// Over the resize handle.
    SeResize,
    /// Over a locked ghost.
    NotAllowed,
    /// Anything else.
    Default,
}

/// The single active gesture, if any.
///
/// At most one placement is in a non-idle state at a time; each variant
/// carries the context recorded at pointer-down.
#[derive(Debug, Clone, Copy, Default)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving a placement across the canvas.
    Dragging {
        /// Id of the placement being dragged.
        id: PlacementId,
        /// Pointer offset from the placement's top-left corner at grab time;
        /// subtracted from the live pointer to get the new top-left.
        grab: Point,
    },
    /// The user is growing a placement from its bottom-right handle.
    Resizing {
        /// Id of the placement being resized.
        id: PlacementId,
        /// Canvas-space pointer position at the start of the resize.
        start_pointer: Point,
        /// Placement width at the start of the resize.
        start_width: f64,
        /// Placement height at the start of the resize.
        start_height: f64,
    },
}

impl GestureState {
    /// Whether no gesture is in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The placement the active gesture is mutating, if any.
    #[must_use]
    pub fn active_id(&self) -> Option<PlacementId> {
        match self {
            Self::Idle => None,
            Self::Dragging { id, .. } | Self::Resizing { id, .. } => Some(*id),
        }
    }
}
