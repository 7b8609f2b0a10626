use super::*;
use crate::placement::{Ownership, Placement, PlacementSource};

fn item(image: &str) -> Placement {
    Placement::new(
        PlacementSource::Signature { image: image.into() },
        None,
        60.0,
        60.0,
        160.0,
        70.0,
    )
}

// --- Layer z-order ---

#[test]
fn layers_paint_bottom_to_top() {
    assert!(Layer::Backdrop.z_index() < Layer::Ghost.z_index());
    assert!(Layer::Ghost.z_index() < Layer::Active.z_index());
}

#[test]
fn layer_z_matches_policy() {
    assert_eq!(Layer::Ghost.z_index(), 100);
    assert_eq!(Layer::Active.z_index(), 200);
}

#[test]
fn only_the_ghost_layer_is_dimmed() {
    assert!((Layer::Ghost.opacity() - 0.45).abs() < 1e-9);
    assert!((Layer::Active.opacity() - 1.0).abs() < 1e-9);
    assert!((Layer::Backdrop.opacity() - 1.0).abs() < 1e-9);
}

// --- Ghost / active separation ---

#[test]
fn new_manager_is_empty() {
    let m = LayerManager::new();
    assert_eq!(m.ghost_count(), 0);
    assert!(m.active().is_empty());
}

#[test]
fn add_ghost_forces_locked_ownership() {
    let mut m = LayerManager::new();
    // Deliberately mis-tagged as editable.
    m.add_ghost(item("/files/other.png"));
    let ghost = m.ghosts().next().expect("one ghost");
    assert_eq!(ghost.ownership, Ownership::Locked);
}

#[test]
fn ghosts_do_not_count_as_active() {
    let mut m = LayerManager::new();
    m.add_ghost(item("/files/other.png"));
    assert_eq!(m.ghost_count(), 1);
    assert!(m.active().is_empty());
}

#[test]
fn active_items_do_not_appear_in_ghosts() {
    let mut m = LayerManager::new();
    m.active_mut().insert(item("/files/mine.png"));
    assert_eq!(m.ghost_count(), 0);
    assert_eq!(m.active().len(), 1);
}

// --- Interactivity gating ---

#[test]
fn empty_active_layer_is_never_interactive() {
    let m = LayerManager::new();
    assert!(!m.active_interactive(true));
    assert!(!m.active_interactive(false));
}

#[test]
fn active_layer_needs_ready_surface() {
    let mut m = LayerManager::new();
    m.active_mut().insert(item("/files/mine.png"));
    assert!(!m.active_interactive(false));
    assert!(m.active_interactive(true));
}

#[test]
fn ghosts_alone_do_not_enable_interaction() {
    let mut m = LayerManager::new();
    m.add_ghost(item("/files/other.png"));
    assert!(!m.active_interactive(true));
}

// --- ghost_label ---

#[test]
fn label_uses_email_local_part() {
    assert_eq!(ghost_label(Some("jane@example.com"), Some("Approved By")), "jane · Approved By");
}

#[test]
fn label_passes_plain_usernames_through() {
    assert_eq!(ghost_label(Some("administrator"), Some("Requested By")), "administrator · Requested By");
}

#[test]
fn label_handles_unknown_signer_and_role() {
    assert_eq!(ghost_label(None, None), "? · ");
}
