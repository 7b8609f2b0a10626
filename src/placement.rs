//! Placement model: signature/stamp instances and the in-memory store.
//!
//! A `Placement` is one positioned item on the canvas. Position is kept in
//! canvas pixels for the lifetime of a session (the percent form is derived
//! only at save time, so repeated gestures don't accumulate rounding drift);
//! width and height stay in pixels even when persisted, since line-weight
//! fidelity at the reference density is wanted.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a placement within a session.
pub type PlacementId = Uuid;

/// What a placement is an instance of, with the fields each kind requires.
///
/// Constructed only with its image present, so a rendered placement always
/// has something to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PlacementSource {
    /// The current user's signature image.
    Signature {
        /// Opaque image reference (URL or asset id) supplied by the host.
        image: String,
    },
    /// A named company stamp.
    Stamp {
        /// Host-side record name of the stamp, persisted with the placement.
        name: String,
        /// Opaque image reference supplied by the host.
        image: String,
    },
}

impl PlacementSource {
    /// The image reference for this source, whichever kind it is.
    #[must_use]
    pub fn image(&self) -> &str {
        match self {
            Self::Signature { image } | Self::Stamp { image, .. } => image,
        }
    }

    /// The stamp record name, if this is a stamp.
    #[must_use]
    pub fn stamp_name(&self) -> Option<&str> {
        match self {
            Self::Signature { .. } => None,
            Self::Stamp { name, .. } => Some(name),
        }
    }
}

/// Who may mutate a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ownership {
    /// Belongs to the current user; draggable, resizable, removable, saved.
    Editable,
    /// Belongs to another signer; rendered as a ghost, never mutated or saved.
    Locked,
}

/// One signature or stamp instance positioned on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement {
    /// Unique within the session.
    pub id: PlacementId,
    /// What this placement renders, with per-kind required fields.
    pub source: PlacementSource,
    /// Display/audit label (role badge text, stamp button caption, …).
    pub label: Option<String>,
    /// Left edge in canvas pixels.
    pub x: f64,
    /// Top edge in canvas pixels.
    pub y: f64,
    /// Width in canvas pixels.
    pub width: f64,
    /// Height in canvas pixels.
    pub height: f64,
    /// Reserved for multi-page documents; always 1 in current scope.
    pub page_no: i64,
    /// Whether the current user may mutate this placement.
    pub ownership: Ownership,
}

impl Placement {
    /// Create an editable placement at the given pixel position and size.
    #[must_use]
    pub fn new(source: PlacementSource, label: Option<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            source,
            label,
            x,
            y,
            width,
            height,
            page_no: 1,
            ownership: Ownership::Editable,
        }
    }

    /// Create a locked ghost placement for another signer's item.
    #[must_use]
    pub fn new_ghost(source: PlacementSource, label: Option<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            ownership: Ownership::Locked,
            ..Self::new(source, label, x, y, width, height)
        }
    }

    /// Whether the current user may mutate this placement.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.ownership == Ownership::Editable
    }

    /// Top-left corner as a point.
    #[must_use]
    pub fn top_left(&self) -> crate::geometry::Point {
        crate::geometry::Point::new(self.x, self.y)
    }
}

/// In-memory store for one layer's placements.
///
/// Backed by a vector rather than a map so iteration (and therefore the save
/// payload) follows insertion order; sessions hold a handful of items at most.
#[derive(Debug, Default)]
pub struct PlacementStore {
    items: Vec<Placement>,
}

impl PlacementStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a placement.
    pub fn insert(&mut self, placement: Placement) {
        self.items.push(placement);
    }

    /// Remove a placement by id, returning it if it was present.
    pub fn remove(&mut self, id: &PlacementId) -> Option<Placement> {
        let idx = self.items.iter().position(|p| p.id == *id)?;
        Some(self.items.remove(idx))
    }

    /// Return a reference to a placement by id.
    #[must_use]
    pub fn get(&self, id: &PlacementId) -> Option<&Placement> {
        self.items.iter().find(|p| p.id == *id)
    }

    /// Return a mutable reference to a placement by id.
    pub fn get_mut(&mut self, id: &PlacementId) -> Option<&mut Placement> {
        self.items.iter_mut().find(|p| p.id == *id)
    }

    /// Iterate placements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.items.iter()
    }

    /// Number of placements in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store contains no placements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
