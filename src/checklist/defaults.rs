use super::collection::Collection;
use super::model::{Checklist, ChecklistEntry, ChecklistItem};

/// File name used for exports when nothing was imported
pub const DEFAULT_EXPORT_FILE_NAME: &str = "aviation-checklists.json";

/// The collection a fresh session starts with: a single pre-flight checklist
pub fn default_collection() -> Collection {
    let items = [
        (1, "Master Switch", "ON"),
        (2, "Fuel Quantity", "CHECK"),
        (3, "Oil Level", "CHECK"),
        (4, "Flight Controls", "FREE & CORRECT"),
        (5, "Instruments", "SET"),
    ];

    let mut checklist = Checklist::new(1, "Pre-flight Checklist");
    checklist.entries = items
        .into_iter()
        .map(|(id, target, state)| {
            ChecklistEntry::Item(ChecklistItem {
                id,
                target: target.to_string(),
                state: state.to_string(),
            })
        })
        .collect();

    Collection::from(vec![checklist])
}
