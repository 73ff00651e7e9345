//! Checklist store behavior tests
mod common;

use aerolist::checklist::{Checklist, ChecklistEntry, EntryKind, ItemField};
use aerolist::{ChecklistStore, Collection, SequentialIds};
use common::{divider, entry_ids, get_test_store, item, sample_collection};
use std::collections::BTreeSet;

#[test]
fn test_add_item_grows_by_one_with_defaults() {
    let mut store = get_test_store();
    let id = store.create_checklist("Climb").unwrap();
    let before = store.checklist(id).unwrap().entries.len();

    let entry_id = store.add_item(id).unwrap();

    let checklist = store.checklist(id).unwrap();
    assert_eq!(checklist.entries.len(), before + 1);
    let last = checklist.entries.last().unwrap();
    assert_eq!(last.id(), entry_id);
    assert_eq!(last.kind(), EntryKind::Item);
    let new_item = last.as_item().unwrap();
    assert_eq!(new_item.target, "New Item");
    assert_eq!(new_item.state, "CHECK");
}

#[test]
fn test_add_divider_grows_by_one() {
    let mut store = get_test_store();
    let id = store.create_checklist("Climb").unwrap();
    store.add_item(id);

    let divider_id = store.add_divider(id).unwrap();

    let checklist = store.checklist(id).unwrap();
    assert_eq!(checklist.entries.len(), 2);
    let last = checklist.entries.last().unwrap();
    assert_eq!(last.kind(), EntryKind::Divider);
    assert_eq!(last.id(), divider_id);
    assert!(last.as_item().is_none());
}

#[test]
fn test_divider_then_item_order() {
    let mut checklist = Checklist::new(1, "Pre-flight");
    checklist.entries = vec![item(1, "Master Switch", "ON")];
    let mut store = ChecklistStore::with_collection(Collection::from(vec![checklist]), SequentialIds::new());

    let divider_id = store.add_divider(1).unwrap();
    let item_id = store.add_item(1).unwrap();

    let entries = &store.checklist(1).unwrap().entries;
    assert_eq!(
        entries,
        &vec![
            item(1, "Master Switch", "ON"),
            divider(divider_id),
            item(item_id, "New Item", "CHECK"),
        ]
    );
}

#[test]
fn test_reorder_is_permutation() {
    let mut store = ChecklistStore::with_collection(sample_collection(), SequentialIds::new());
    let cases = [(0, 3), (3, 0), (1, 2), (2, 1), (0, 1)];

    for (from, to) in cases {
        let before = store.snapshot();
        let moved = before.get(100).unwrap().entries[from].id();

        assert_eq!(store.reorder_entries(100, from, to), Ok(true));

        let after = store.snapshot();
        let before_ids: BTreeSet<_> = entry_ids(&before, 100).into_iter().collect();
        let after_ids: BTreeSet<_> = entry_ids(&after, 100).into_iter().collect();
        assert_eq!(before_ids, after_ids);
        assert_eq!(entry_ids(&after, 100).len(), entry_ids(&before, 100).len());
        assert_eq!(after.get(100).unwrap().entries[to].id(), moved);
        // other checklists untouched
        assert_eq!(before.get(200), after.get(200));
    }
}

#[test]
fn test_reorder_unknown_checklist_is_noop() {
    let mut store = ChecklistStore::with_collection(sample_collection(), SequentialIds::new());
    assert_eq!(store.reorder_entries(999, 0, 1), Ok(false));
    assert_eq!(*store.snapshot(), sample_collection());
}

#[test]
fn test_delete_only_entry_leaves_empty() {
    let mut store = get_test_store();
    let id = store.create_checklist("Climb").unwrap();
    let entry_id = store.add_item(id).unwrap();

    assert!(store.delete_entry(id, entry_id));
    assert!(store.checklist(id).unwrap().entries.is_empty());
}

#[test]
fn test_delete_divider_entry() {
    let mut store = ChecklistStore::with_collection(sample_collection(), SequentialIds::new());
    assert!(store.delete_entry(100, 103));
    assert_eq!(entry_ids(&store.snapshot(), 100), vec![101, 102, 104]);
    assert!(!store.delete_entry(100, 103));
}

#[test]
fn test_delete_checklist_removes_entries() {
    let mut store = ChecklistStore::with_collection(sample_collection(), SequentialIds::new());
    assert!(store.delete_checklist(100));

    let snapshot = store.snapshot();
    assert!(snapshot.get(100).is_none());
    assert_eq!(snapshot.len(), 1);
    let reachable: Vec<u64> = snapshot
        .checklists()
        .iter()
        .flat_map(|c| c.entries.iter().map(ChecklistEntry::id))
        .collect();
    assert!(!reachable.contains(&101));
    assert!(!reachable.contains(&103));
    // entry operations on the deleted checklist are no-ops
    assert_eq!(store.add_item(100), None);
    assert!(!store.delete_entry(100, 101));
}

#[test]
fn test_rename_unknown_id_leaves_collection() {
    let mut store = ChecklistStore::with_collection(sample_collection(), SequentialIds::new());
    assert!(!store.rename_checklist(7, "Cruise"));
    assert_eq!(*store.snapshot(), sample_collection());
}

#[test]
fn test_rename_replaces_title_in_place() {
    let mut store = ChecklistStore::with_collection(sample_collection(), SequentialIds::new());
    assert!(store.rename_checklist(200, "Securing Aircraft"));
    let snapshot = store.snapshot();
    assert_eq!(snapshot.checklists()[1].title, "Securing Aircraft");
    assert_eq!(snapshot.checklists()[1].entries, sample_collection().checklists()[1].entries);
}

#[test]
fn test_update_item_field_stores_value_verbatim() {
    let mut store = ChecklistStore::with_collection(sample_collection(), SequentialIds::new());
    assert!(store.update_item_field(100, 101, ItemField::State, "done"));
    assert!(store.update_item_field(100, 102, ItemField::Target, "Seat Belts"));

    let checklist = store.checklist(100).unwrap();
    assert_eq!(checklist.entry(101).unwrap().as_item().unwrap().state, "done");
    assert_eq!(checklist.entry(102).unwrap().as_item().unwrap().target, "Seat Belts");
}

#[test]
fn test_update_unknown_ids_are_noops() {
    let mut store = ChecklistStore::with_collection(sample_collection(), SequentialIds::new());
    assert!(!store.update_item_field(999, 101, ItemField::State, "ON"));
    assert!(!store.update_item_field(100, 999, ItemField::State, "ON"));
    assert!(!store.update_item_field(100, 103, ItemField::Target, "ON"));
    assert_eq!(*store.snapshot(), sample_collection());
}

#[test]
fn test_new_ids_never_collide_with_existing() {
    let mut store = ChecklistStore::with_collection(sample_collection(), SequentialIds::new());
    let checklist_id = store.create_checklist("Cruise").unwrap();
    let entry_id = store.add_item(checklist_id).unwrap();
    assert!(checklist_id > 202);
    assert!(entry_id > checklist_id);
}

#[test]
fn test_snapshots_are_independent() {
    let mut store = get_test_store();
    let first = store.snapshot();
    let id = store.create_checklist("Descent").unwrap();
    let second = store.snapshot();
    store.add_divider(id);
    let third = store.snapshot();

    assert!(first.is_empty());
    assert!(second.get(id).unwrap().entries.is_empty());
    assert_eq!(third.get(id).unwrap().entries.len(), 1);
}
