//! Host interface types: the inbound asset bundle and the outbound save payload.
//!
//! The core owns no transport. The host fetches the user-asset bundle and the
//! document backdrop, and persists the save payload; these types pin down the
//! JSON shapes on that boundary. Field names follow the host's stored records
//! (`x_pos`, `y_pos`, `stamp_image`, `type`, `page_no`).

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use serde::{Deserialize, Serialize};

/// Kind tag used on the wire for stored and saved positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementKind {
    Signature,
    Stamp,
}

/// A company stamp the user may place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StampAsset {
    /// Host-side record name; persisted with stamp placements.
    pub name: String,
    /// Display caption, when it differs from the record name.
    #[serde(default)]
    pub stamp_name: Option<String>,
    /// Image reference. A stamp without one cannot be placed.
    #[serde(default)]
    pub stamp_image: Option<String>,
}

/// One previously saved placement, as the host stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredPosition {
    /// Signature or stamp.
    pub signature_type: PlacementKind,
    /// Image reference. Records without one are skipped at open.
    #[serde(default)]
    pub signature_image: Option<String>,
    /// Stamp record name, for stamp positions.
    #[serde(default)]
    pub stamp_name: Option<String>,
    /// Who placed it (user id / email).
    #[serde(default)]
    pub signed_by: Option<String>,
    /// Role the signer held when placing it.
    #[serde(default)]
    pub signing_role: Option<String>,
    /// Left edge as a percentage of the canvas width.
    pub x_pos: f64,
    /// Top edge as a percentage of the canvas height.
    pub y_pos: f64,
    /// Width in canvas pixels. Old records may lack it.
    #[serde(default)]
    pub width: Option<f64>,
    /// Height in canvas pixels. Old records may lack it.
    #[serde(default)]
    pub height: Option<f64>,
    /// Always 1 in current scope.
    #[serde(default = "default_page_no")]
    pub page_no: i64,
}

fn default_page_no() -> i64 {
    1
}

/// Everything the host supplies at session open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAssets {
    /// The current user's signature image, if one is on file.
    #[serde(default)]
    pub signature: Option<String>,
    /// Stamps available to place.
    #[serde(default)]
    pub stamps: Vec<StampAsset>,
    /// The current user's role for this document ("Requested By", …).
    pub signing_role: String,
    /// The current user's prior placements, reloaded as editable items.
    #[serde(default)]
    pub my_positions: Vec<StoredPosition>,
    /// Other signers' placements, rendered as ghosts.
    #[serde(default)]
    pub other_positions: Vec<StoredPosition>,
}

/// Identifies the document a session is placing signatures onto.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentContext {
    /// Host document type.
    pub doctype: String,
    /// Host document identifier.
    pub docname: String,
}

/// One placement in the save payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRecord {
    /// Signature or stamp.
    #[serde(rename = "type")]
    pub kind: PlacementKind,
    /// Stamp record name; `null` for signatures.
    pub stamp_name: Option<String>,
    /// Left edge as a percentage of the canvas width, 2 decimal places.
    pub x: f64,
    /// Top edge as a percentage of the canvas height, 2 decimal places.
    pub y: f64,
    /// Width in canvas pixels.
    pub width: f64,
    /// Height in canvas pixels.
    pub height: f64,
    /// Always 1 in current scope.
    pub page_no: i64,
}

/// The full save submission handed to the host for persistence.
///
/// The host replaces the user's stored positions wholesale; there is no
/// diffing against a previous save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavePayload {
    /// Host document type.
    pub doctype: String,
    /// Host document identifier.
    pub docname: String,
    /// Role to associate with the submission.
    pub signing_role: String,
    /// Every editable placement currently on the canvas, in layer order.
    pub positions: Vec<PositionRecord>,
}
