//! Session engine: the interaction controller and session lifecycle.
//!
//! `SignSession` owns everything for one signing session on one document:
//! the canvas surface, the ghost/active layers, the single gesture state, and
//! the user's asset catalog. The host feeds it the asset bundle at open, the
//! backdrop when fetched, and raw pointer events with their hit targets; the
//! engine answers with [`Action`]s describing what changed. All transitions
//! are synchronous — there is exactly one mutator (the local user) and at
//! most one gesture in flight, so no locking is involved. Cancelling the
//! session is dropping it; nothing is persisted until [`SignSession::save`].

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::{debug, info, warn};

use crate::consts::{
    DEFAULT_PLACEMENT_HEIGHT, DEFAULT_PLACEMENT_INSET, DEFAULT_PLACEMENT_WIDTH, GHOST_FALLBACK_HEIGHT,
    GHOST_FALLBACK_WIDTH, MIN_PLACEMENT_HEIGHT, MIN_PLACEMENT_WIDTH,
};
use crate::geometry::{clamp_top_left, CanvasFrame, GeometryError, PercentPoint, Point};
use crate::gesture::{Cursor, GestureState, HitPart, HitTarget};
use crate::host::{DocumentContext, PlacementKind, PositionRecord, SavePayload, StampAsset, StoredPosition, UserAssets};
use crate::layers::{ghost_label, LayerManager};
use crate::placement::{Placement, PlacementId, PlacementSource};
use crate::surface::CanvasSurface;

/// Session-level errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The canvas frame could not be constructed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// The requested asset has no image; the host should show the action as
    /// disabled rather than report a failure.
    #[error("no image available for {asset}")]
    NoAssetAvailable { asset: String },
    /// Save was attempted with nothing placed; the session stays open.
    #[error("place at least one signature or stamp before saving")]
    EmptySave,
}

/// What a handler changed, for the host to reflect in its view.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A placement was created (via add, or reloaded at open).
    PlacementAdded { id: PlacementId },
    /// A placement moved to a new top-left corner, already clamped.
    PlacementMoved { id: PlacementId, x: f64, y: f64 },
    /// A placement was resized, already floored at the minimum size.
    PlacementResized { id: PlacementId, width: f64, height: f64 },
    /// A placement was destroyed.
    PlacementRemoved { id: PlacementId },
    /// The pointer cursor should change.
    CursorChanged(Cursor),
}

/// One signing session on one document.
pub struct SignSession {
    context: DocumentContext,
    surface: CanvasSurface,
    layers: LayerManager,
    gesture: GestureState,
    signature: Option<String>,
    stamps: Vec<StampAsset>,
    signing_role: String,
}

impl SignSession {
    /// Open a session: build ghost placements from other signers' records and
    /// reload the current user's prior placements as editable items.
    ///
    /// Stored records without an image are skipped (there is nothing to
    /// render); records without a size get the policy defaults.
    #[must_use]
    pub fn open(context: DocumentContext, frame: CanvasFrame, assets: UserAssets) -> Self {
        let mut session = Self {
            context,
            surface: CanvasSurface::new(frame),
            layers: LayerManager::new(),
            gesture: GestureState::Idle,
            signature: assets.signature,
            stamps: assets.stamps,
            signing_role: assets.signing_role,
        };

        for record in &assets.other_positions {
            if let Some(ghost) = session.ghost_from_record(record) {
                session.layers.add_ghost(ghost);
            }
        }
        for record in &assets.my_positions {
            if let Some(placement) = session.editable_from_record(record) {
                session.layers.active_mut().insert(placement);
            }
        }
        debug!(
            doctype = %session.context.doctype,
            docname = %session.context.docname,
            ghosts = session.layers.ghost_count(),
            reloaded = session.layers.active().len(),
            "session opened"
        );
        session
    }

    fn source_from_record(record: &StoredPosition) -> Option<PlacementSource> {
        let image = record.signature_image.clone()?;
        Some(match record.signature_type {
            PlacementKind::Signature => PlacementSource::Signature { image },
            PlacementKind::Stamp => PlacementSource::Stamp {
                name: record.stamp_name.clone().unwrap_or_default(),
                image,
            },
        })
    }

    fn ghost_from_record(&self, record: &StoredPosition) -> Option<Placement> {
        let source = Self::source_from_record(record)?;
        let at = self
            .surface
            .frame()
            .to_loaded_pixels(PercentPoint::new(record.x_pos, record.y_pos));
        Some(Placement::new_ghost(
            source,
            Some(ghost_label(record.signed_by.as_deref(), record.signing_role.as_deref())),
            at.x,
            at.y,
            record.width.unwrap_or(GHOST_FALLBACK_WIDTH),
            record.height.unwrap_or(GHOST_FALLBACK_HEIGHT),
        ))
    }

    fn editable_from_record(&self, record: &StoredPosition) -> Option<Placement> {
        let source = Self::source_from_record(record)?;
        let at = self
            .surface
            .frame()
            .to_loaded_pixels(PercentPoint::new(record.x_pos, record.y_pos));
        Some(Placement::new(
            source,
            record.signing_role.clone(),
            at.x,
            at.y,
            record.width.unwrap_or(DEFAULT_PLACEMENT_WIDTH),
            record.height.unwrap_or(DEFAULT_PLACEMENT_HEIGHT),
        ))
    }

    // --- Host data inputs ---

    /// Install the rendered document backdrop, enabling interaction.
    pub fn backdrop_loaded(&mut self, html: String) {
        self.surface.set_backdrop(html);
        debug!("backdrop installed, canvas interactive");
    }

    /// Record where the canvas sits in the host's pointer coordinate space.
    pub fn set_canvas_origin(&mut self, origin: Point) {
        self.surface.set_origin(origin);
    }

    /// Record the scroll offset of the canvas container.
    pub fn set_scroll(&mut self, scroll: Point) {
        self.surface.set_scroll(scroll);
    }

    // --- Adding items ---

    /// Whether the "add signature" action should be offered at all.
    #[must_use]
    pub fn can_add_signature(&self) -> bool {
        self.signature.is_some()
    }

    /// Place the user's signature at the default inset.
    ///
    /// Returns `Ok(None)` while the backdrop is still loading (the add is a
    /// deferred no-op, not an error).
    ///
    /// # Errors
    ///
    /// [`SessionError::NoAssetAvailable`] if no signature is on file.
    pub fn add_signature(&mut self) -> Result<Option<PlacementId>, SessionError> {
        let Some(image) = self.signature.clone() else {
            return Err(SessionError::NoAssetAvailable { asset: "signature".into() });
        };
        Ok(self.add_item(PlacementSource::Signature { image }, Some("Signature".into())))
    }

    /// Place a stamp by its host record name at the default inset.
    ///
    /// Returns `Ok(None)` while the backdrop is still loading.
    ///
    /// # Errors
    ///
    /// [`SessionError::NoAssetAvailable`] if the stamp is unknown or has no
    /// image configured.
    pub fn add_stamp(&mut self, name: &str) -> Result<Option<PlacementId>, SessionError> {
        let stamp = self.stamps.iter().find(|s| s.name == name);
        let Some(image) = stamp.and_then(|s| s.stamp_image.clone()) else {
            return Err(SessionError::NoAssetAvailable { asset: name.into() });
        };
        let label = stamp.and_then(|s| s.stamp_name.clone());
        Ok(self.add_item(
            PlacementSource::Stamp { name: name.into(), image },
            label,
        ))
    }

    fn add_item(&mut self, source: PlacementSource, label: Option<String>) -> Option<PlacementId> {
        if !self.surface.is_ready() {
            debug!("add deferred: backdrop not loaded yet");
            return None;
        }
        let placement = Placement::new(
            source,
            label,
            DEFAULT_PLACEMENT_INSET,
            DEFAULT_PLACEMENT_INSET,
            DEFAULT_PLACEMENT_WIDTH,
            DEFAULT_PLACEMENT_HEIGHT,
        );
        let id = placement.id;
        self.layers.active_mut().insert(placement);
        debug!(%id, "placement added");
        Some(id)
    }

    // --- Pointer events ---

    /// Handle a pointer-down on an active-layer placement.
    ///
    /// `pointer` is in the host's coordinate space. Body starts a drag, the
    /// resize handle starts a resize, the remove control destroys the item
    /// immediately (from any state). Drag and resize starts are rejected
    /// while another gesture is in flight or the layer is not interactive.
    pub fn on_pointer_down(&mut self, target: HitTarget, pointer: Point) -> Vec<Action> {
        if !self.layers.active_interactive(self.surface.is_ready()) {
            return Vec::new();
        }
        if target.part == HitPart::RemoveControl {
            return self.remove(&target.id);
        }
        if !self.gesture.is_idle() {
            debug!(id = %target.id, "pointer-down rejected: gesture already active");
            return Vec::new();
        }
        let canvas_pt = self.surface.to_canvas(pointer);
        let Some(placement) = self.layers.active().get(&target.id) else {
            return Vec::new();
        };
        if !placement.is_editable() {
            return Vec::new();
        }
        match target.part {
            HitPart::Body => {
                self.gesture = GestureState::Dragging {
                    id: placement.id,
                    grab: Point::new(canvas_pt.x - placement.x, canvas_pt.y - placement.y),
                };
                debug!(id = %placement.id, "drag started");
                vec![Action::CursorChanged(Cursor::Grabbing)]
            }
            HitPart::ResizeHandle => {
                self.gesture = GestureState::Resizing {
                    id: placement.id,
                    start_pointer: canvas_pt,
                    start_width: placement.width,
                    start_height: placement.height,
                };
                debug!(id = %placement.id, "resize started");
                vec![Action::CursorChanged(Cursor::SeResize)]
            }
            HitPart::RemoveControl => Vec::new(),
        }
    }

    /// Handle a pointer move. A no-op unless a gesture is in flight.
    ///
    /// Dragging clamps the top-left so the item stays fully inside the canvas
    /// at every intermediate frame. Resizing floors at the minimum size and
    /// is deliberately not clamped against the canvas bounds — an item may
    /// grow past the visible edge and be clipped by the page.
    pub fn on_pointer_move(&mut self, pointer: Point) -> Vec<Action> {
        let canvas_pt = self.surface.to_canvas(pointer);
        match self.gesture {
            GestureState::Idle => Vec::new(),
            GestureState::Dragging { id, grab } => {
                let frame = *self.surface.frame();
                let Some(placement) = self.layers.active_mut().get_mut(&id) else {
                    return Vec::new();
                };
                let desired = Point::new(canvas_pt.x - grab.x, canvas_pt.y - grab.y);
                let clamped = clamp_top_left(desired, placement.width, placement.height, &frame);
                placement.x = clamped.x;
                placement.y = clamped.y;
                vec![Action::PlacementMoved { id, x: clamped.x, y: clamped.y }]
            }
            GestureState::Resizing { id, start_pointer, start_width, start_height } => {
                let Some(placement) = self.layers.active_mut().get_mut(&id) else {
                    return Vec::new();
                };
                placement.width = (start_width + (canvas_pt.x - start_pointer.x)).max(MIN_PLACEMENT_WIDTH);
                placement.height = (start_height + (canvas_pt.y - start_pointer.y)).max(MIN_PLACEMENT_HEIGHT);
                vec![Action::PlacementResized {
                    id,
                    width: placement.width,
                    height: placement.height,
                }]
            }
        }
    }

    /// Handle a pointer up: ends the gesture, retaining the final position.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if self.gesture.is_idle() {
            return Vec::new();
        }
        debug!(id = ?self.gesture.active_id(), "gesture ended");
        self.gesture = GestureState::Idle;
        vec![Action::CursorChanged(Cursor::Grab)]
    }

    /// Remove a placement immediately, from any state. Cancels an in-flight
    /// gesture on the removed item.
    pub fn remove(&mut self, id: &PlacementId) -> Vec<Action> {
        if self.layers.active_mut().remove(id).is_none() {
            return Vec::new();
        }
        if self.gesture.active_id() == Some(*id) {
            self.gesture = GestureState::Idle;
        }
        debug!(%id, "placement removed");
        vec![Action::PlacementRemoved { id: *id }]
    }

    // --- Save ---

    /// Serialize every editable placement into the save payload, converting
    /// pixel positions to canvas percentages. Ghosts are never included.
    ///
    /// # Errors
    ///
    /// [`SessionError::EmptySave`] when nothing is placed; the session stays
    /// open and no host call should be made.
    pub fn save(&self) -> Result<SavePayload, SessionError> {
        if self.layers.active().is_empty() {
            warn!("save rejected: no placements");
            return Err(SessionError::EmptySave);
        }
        let frame = self.surface.frame();
        let positions = self
            .layers
            .active()
            .iter()
            .map(|p| {
                let pct = frame.to_percent(p.top_left());
                PositionRecord {
                    kind: match p.source {
                        PlacementSource::Signature { .. } => PlacementKind::Signature,
                        PlacementSource::Stamp { .. } => PlacementKind::Stamp,
                    },
                    stamp_name: p.source.stamp_name().map(str::to_owned),
                    x: pct.x,
                    y: pct.y,
                    width: p.width,
                    height: p.height,
                    page_no: p.page_no,
                }
            })
            .collect::<Vec<_>>();
        info!(count = positions.len(), role = %self.signing_role, "save payload built");
        Ok(SavePayload {
            doctype: self.context.doctype.clone(),
            docname: self.context.docname.clone(),
            signing_role: self.signing_role.clone(),
            positions,
        })
    }

    // --- Queries ---

    /// The canvas surface.
    #[must_use]
    pub fn surface(&self) -> &CanvasSurface {
        &self.surface
    }

    /// The ghost/active layers.
    #[must_use]
    pub fn layers(&self) -> &LayerManager {
        &self.layers
    }

    /// The current gesture state.
    #[must_use]
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Stamps available to place.
    #[must_use]
    pub fn stamps(&self) -> &[StampAsset] {
        &self.stamps
    }

    /// The current user's signing role for this document.
    #[must_use]
    pub fn signing_role(&self) -> &str {
        &self.signing_role
    }

    /// Whether the active layer currently accepts pointer events.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.layers.active_interactive(self.surface.is_ready())
    }
}
