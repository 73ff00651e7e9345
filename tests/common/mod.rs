//! Common test utilities for integration tests
#![allow(dead_code)]

use aerolist::checklist::{Checklist, ChecklistDivider, ChecklistEntry, ChecklistItem};
use aerolist::{ChecklistServerHandler, ChecklistStore, Collection, EntryId, SequentialIds, Storage};
use tempfile::TempDir;

/// Create a handler seeded with the default checklist, exporting into a temp dir
pub fn get_test_handler() -> (ChecklistServerHandler, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = ChecklistStore::with_defaults(SequentialIds::new());
    let handler = ChecklistServerHandler::new(store, Storage::new(dir.path()));
    (handler, dir)
}

/// Create a store with a deterministic id sequence
pub fn get_test_store() -> ChecklistStore {
    ChecklistStore::new(SequentialIds::new())
}

/// Extract the ID from a "... created with ID: <id> (...)" response
pub fn extract_id_from_response(response: &str) -> u64 {
    let start = response.find("ID: ").expect("response has no ID") + 4;
    response[start..]
        .split_whitespace()
        .next()
        .and_then(|id| id.parse().ok())
        .expect("ID is not a number")
}

pub fn item(id: EntryId, target: &str, state: &str) -> ChecklistEntry {
    ChecklistEntry::Item(ChecklistItem {
        id,
        target: target.to_string(),
        state: state.to_string(),
    })
}

pub fn divider(id: EntryId) -> ChecklistEntry {
    ChecklistEntry::Divider(ChecklistDivider { id })
}

/// Two checklists mixing items and dividers
pub fn sample_collection() -> Collection {
    let mut before_start = Checklist::new(100, "Before Engine Start");
    before_start.entries = vec![
        item(101, "Preflight Inspection", "COMPLETE"),
        item(102, "Seats & Belts", "ADJUSTED & LOCKED"),
        divider(103),
        item(104, "Circuit Breakers", "CHECK IN"),
    ];
    let mut shutdown = Checklist::new(200, "Shutdown");
    shutdown.entries = vec![item(201, "Avionics Master", "OFF"), divider(202)];
    Collection::from(vec![before_start, shutdown])
}

pub fn entry_ids(collection: &Collection, checklist_id: u64) -> Vec<EntryId> {
    collection
        .get(checklist_id)
        .map(|c| c.entries.iter().map(ChecklistEntry::id).collect())
        .unwrap_or_default()
}
