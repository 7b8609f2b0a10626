//! Layer manager: ghost vs active separation, z-order, and input routing.
//!
//! Other signers' placements are rendered on a ghost layer — reduced opacity,
//! a lock affordance, pointer events passing straight through. They are built
//! once from host data at session open and never enter gesture handling; the
//! guarantee is structural (the ghost store is never handed out mutably), not
//! per-item. Only the active layer's placements can be dragged, resized,
//! removed, or saved, and the active layer accepts input only while it has at
//! least one item and the backdrop has arrived.

#[cfg(test)]
#[path = "layers_test.rs"]
mod layers_test;

use crate::consts::{ACTIVE_LAYER_Z, GHOST_LAYER_Z, GHOST_OPACITY};
use crate::placement::{Placement, PlacementStore};

/// The three sub-layers of the canvas surface, in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// The rendered document fragment. Never interactive.
    Backdrop,
    /// Other signers' locked placements. Never interactive.
    Ghost,
    /// The current user's placements. Interactive while non-empty.
    Active,
}

impl Layer {
    /// Stacking order; lower values paint beneath higher values.
    #[must_use]
    pub fn z_index(self) -> i64 {
        match self {
            Self::Backdrop => 0,
            Self::Ghost => GHOST_LAYER_Z,
            Self::Active => ACTIVE_LAYER_Z,
        }
    }

    /// Opacity this layer renders at; ghosts are dimmed.
    #[must_use]
    pub fn opacity(self) -> f64 {
        match self {
            Self::Backdrop | Self::Active => 1.0,
            Self::Ghost => GHOST_OPACITY,
        }
    }
}

/// Owns the ghost and active placement stores and their routing rules.
#[derive(Debug, Default)]
pub struct LayerManager {
    ghosts: PlacementStore,
    active: PlacementStore,
}

impl LayerManager {
    /// Create an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ghost placement. Editable input is demoted to `Locked` so a
    /// mis-tagged record can never become mutable through this layer.
    pub fn add_ghost(&mut self, mut placement: Placement) {
        placement.ownership = crate::placement::Ownership::Locked;
        self.ghosts.insert(placement);
    }

    /// Iterate ghost placements in insertion order. Read-only by design.
    pub fn ghosts(&self) -> impl Iterator<Item = &Placement> {
        self.ghosts.iter()
    }

    /// Number of ghost placements.
    #[must_use]
    pub fn ghost_count(&self) -> usize {
        self.ghosts.len()
    }

    /// The active (editable) store.
    #[must_use]
    pub fn active(&self) -> &PlacementStore {
        &self.active
    }

    /// Mutable access to the active store. Ghosts have no such accessor.
    pub fn active_mut(&mut self) -> &mut PlacementStore {
        &mut self.active
    }

    /// Whether the active layer should accept pointer events: it needs at
    /// least one item (an empty overlay would swallow clicks meant for the
    /// page) and the backdrop must have arrived.
    #[must_use]
    pub fn active_interactive(&self, surface_ready: bool) -> bool {
        surface_ready && !self.active.is_empty()
    }
}

/// Lock-affordance label for a ghost: the signer's local-part and role, e.g.
/// `"jane · Approved By"`. Unknown signers show as `"?"`.
#[must_use]
pub fn ghost_label(signed_by: Option<&str>, signing_role: Option<&str>) -> String {
    let who = signed_by
        .map(|s| s.split('@').next().unwrap_or(s))
        .unwrap_or("?");
    format!("{who} · {}", signing_role.unwrap_or(""))
}
