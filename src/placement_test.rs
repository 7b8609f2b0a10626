#![allow(clippy::float_cmp)]

use super::*;

fn sig(x: f64, y: f64) -> Placement {
    Placement::new(
        PlacementSource::Signature { image: "/files/sig.png".into() },
        Some("Signature".into()),
        x,
        y,
        160.0,
        70.0,
    )
}

// --- PlacementSource ---

#[test]
fn signature_source_has_no_stamp_name() {
    let source = PlacementSource::Signature { image: "/files/sig.png".into() };
    assert_eq!(source.image(), "/files/sig.png");
    assert_eq!(source.stamp_name(), None);
}

#[test]
fn stamp_source_exposes_name_and_image() {
    let source = PlacementSource::Stamp { name: "CS-001".into(), image: "/files/stamp.png".into() };
    assert_eq!(source.image(), "/files/stamp.png");
    assert_eq!(source.stamp_name(), Some("CS-001"));
}

#[test]
fn source_serializes_with_kind_tag() {
    let source = PlacementSource::Stamp { name: "CS-001".into(), image: "/files/stamp.png".into() };
    let json = serde_json::to_value(&source).expect("serializes");
    assert_eq!(json["kind"], "stamp");
    assert_eq!(json["name"], "CS-001");
}

// --- Placement ---

#[test]
fn new_placement_is_editable_on_page_one() {
    let p = sig(60.0, 60.0);
    assert!(p.is_editable());
    assert_eq!(p.ownership, Ownership::Editable);
    assert_eq!(p.page_no, 1);
}

#[test]
fn new_ghost_is_locked() {
    let g = Placement::new_ghost(
        PlacementSource::Signature { image: "/files/other.png".into() },
        Some("jane · Approved By".into()),
        100.0,
        200.0,
        150.0,
        80.0,
    );
    assert!(!g.is_editable());
    assert_eq!(g.ownership, Ownership::Locked);
}

#[test]
fn placements_get_distinct_ids() {
    assert_ne!(sig(0.0, 0.0).id, sig(0.0, 0.0).id);
}

#[test]
fn top_left_reflects_position() {
    let p = sig(12.5, 34.0);
    let tl = p.top_left();
    assert_eq!(tl.x, 12.5);
    assert_eq!(tl.y, 34.0);
}

// --- PlacementStore ---

#[test]
fn store_starts_empty() {
    let store = PlacementStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn insert_then_get() {
    let mut store = PlacementStore::new();
    let p = sig(60.0, 60.0);
    let id = p.id;
    store.insert(p);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(&id).map(|p| p.x), Some(60.0));
}

#[test]
fn get_unknown_id_is_none() {
    let store = PlacementStore::new();
    assert!(store.get(&uuid::Uuid::new_v4()).is_none());
}

#[test]
fn get_mut_allows_position_update() {
    let mut store = PlacementStore::new();
    let p = sig(60.0, 60.0);
    let id = p.id;
    store.insert(p);
    if let Some(p) = store.get_mut(&id) {
        p.x = 120.0;
    }
    assert_eq!(store.get(&id).map(|p| p.x), Some(120.0));
}

#[test]
fn remove_returns_the_placement() {
    let mut store = PlacementStore::new();
    let p = sig(60.0, 60.0);
    let id = p.id;
    store.insert(p);
    let removed = store.remove(&id).expect("was present");
    assert_eq!(removed.id, id);
    assert!(store.is_empty());
}

#[test]
fn remove_unknown_id_is_none() {
    let mut store = PlacementStore::new();
    store.insert(sig(0.0, 0.0));
    assert!(store.remove(&uuid::Uuid::new_v4()).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn iteration_follows_insertion_order() {
    let mut store = PlacementStore::new();
    let first = sig(1.0, 0.0);
    let second = sig(2.0, 0.0);
    let third = sig(3.0, 0.0);
    let ids = [first.id, second.id, third.id];
    store.insert(first);
    store.insert(second);
    store.insert(third);
    let seen: Vec<_> = store.iter().map(|p| p.id).collect();
    assert_eq!(seen, ids);
}
