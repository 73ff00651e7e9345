//! The checklist collection and its copy-on-write edits
//!
//! Every edit here takes `&self` and returns a new value; nothing is mutated
//! in place. Edits that find nothing to change return `None` so the caller
//! can tell a no-op apart from a real change.

use super::model::{Checklist, ChecklistEntry, ChecklistId, EntryId, ItemField};
use serde::{Deserialize, Serialize};

/// Ordered set of checklists; insertion order is display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    checklists: Vec<Checklist>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checklists(&self) -> &[Checklist] {
        &self.checklists
    }

    pub fn len(&self) -> usize {
        self.checklists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checklists.is_empty()
    }

    pub fn get(&self, id: ChecklistId) -> Option<&Checklist> {
        self.checklists.iter().find(|c| c.id == id)
    }

    /// Highest checklist or entry id anywhere in the collection (0 when empty)
    pub fn max_id(&self) -> u64 {
        self.checklists.iter().map(Checklist::max_id).max().unwrap_or(0)
    }

    /// New collection with `checklist` appended at the end
    pub fn with_checklist(&self, checklist: Checklist) -> Collection {
        let mut checklists = self.checklists.clone();
        checklists.push(checklist);
        Collection { checklists }
    }

    /// New collection without any checklist carrying `id`
    pub fn without_checklist(&self, id: ChecklistId) -> Option<Collection> {
        if self.get(id).is_none() {
            return None;
        }
        let checklists = self
            .checklists
            .iter()
            .filter(|c| c.id != id)
            .cloned()
            .collect();
        Some(Collection { checklists })
    }

    /// New collection where every checklist carrying `id` is replaced by `edit(checklist)`
    ///
    /// Returns `None` when no checklist matches or `edit` declines every match.
    pub fn try_map_checklist<F>(&self, id: ChecklistId, mut edit: F) -> Option<Collection>
    where
        F: FnMut(&Checklist) -> Option<Checklist>,
    {
        let mut changed = false;
        let checklists = self
            .checklists
            .iter()
            .map(|c| {
                if c.id != id {
                    return c.clone();
                }
                match edit(c) {
                    Some(edited) => {
                        changed = true;
                        edited
                    }
                    None => c.clone(),
                }
            })
            .collect();
        changed.then_some(Collection { checklists })
    }
}

impl From<Vec<Checklist>> for Collection {
    fn from(checklists: Vec<Checklist>) -> Self {
        Self { checklists }
    }
}

impl Checklist {
    /// Copy with a different title
    pub fn renamed(&self, title: &str) -> Checklist {
        Checklist {
            title: title.to_string(),
            ..self.clone()
        }
    }

    /// Copy with `entry` appended
    pub fn with_entry(&self, entry: ChecklistEntry) -> Checklist {
        let mut copy = self.clone();
        copy.entries.push(entry);
        copy
    }

    /// Copy with `field` set on every item carrying `entry_id`
    ///
    /// Dividers with a matching id are left alone. Returns `None` when no
    /// item matched.
    pub fn with_item_field(&self, entry_id: EntryId, field: ItemField, value: &str) -> Option<Checklist> {
        let mut changed = false;
        let entries = self
            .entries
            .iter()
            .map(|entry| {
                if entry.id() != entry_id {
                    return entry.clone();
                }
                match entry.with_field(field, value) {
                    Some(updated) => {
                        changed = true;
                        updated
                    }
                    None => entry.clone(),
                }
            })
            .collect();
        changed.then(|| Checklist {
            entries,
            ..self.clone()
        })
    }

    /// Copy without any entry carrying `entry_id`
    pub fn without_entry(&self, entry_id: EntryId) -> Option<Checklist> {
        self.entry(entry_id)?;
        let entries = self
            .entries
            .iter()
            .filter(|e| e.id() != entry_id)
            .cloned()
            .collect();
        Some(Checklist {
            entries,
            ..self.clone()
        })
    }

    /// Copy with the entry at `from` moved to `to`
    ///
    /// Both indices must be below `entries.len()`; callers check this.
    pub fn with_entry_moved(&self, from: usize, to: usize) -> Checklist {
        let mut entries = self.entries.clone();
        let moved = entries.remove(from);
        entries.insert(to, moved);
        Checklist {
            entries,
            ..self.clone()
        }
    }
}
