use super::collection::Collection;
use super::defaults::{DEFAULT_EXPORT_FILE_NAME, default_collection};
use super::ids::IdGenerator;
use super::model::{
    Checklist, ChecklistDivider, ChecklistEntry, ChecklistId, ChecklistItem, EntryId, ItemField,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Errors raised by store operations that have a strict contract
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Index {index} is out of range for a checklist with {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Single-writer holder of the current checklist collection
///
/// Each mutation builds a fresh [`Collection`] and swaps it in, so a
/// snapshot taken with [`ChecklistStore::snapshot`] never changes after the
/// fact. Operations aimed at unknown ids leave the collection alone and
/// report `false`/`None` instead of failing.
pub struct ChecklistStore {
    current: Arc<Collection>,
    ids: Box<dyn IdGenerator>,
    /// Checklist whose title is being edited, if any
    editing: Option<ChecklistId>,
    /// Name of the file the current collection was imported from
    source_name: Option<String>,
}

impl ChecklistStore {
    /// Create a store holding an empty collection
    pub fn new(ids: impl IdGenerator + 'static) -> Self {
        Self::with_collection(Collection::new(), ids)
    }

    /// Create a store seeded with the default pre-flight checklist
    pub fn with_defaults(ids: impl IdGenerator + 'static) -> Self {
        Self::with_collection(default_collection(), ids)
    }

    /// Create a store holding `collection`
    pub fn with_collection(collection: Collection, ids: impl IdGenerator + 'static) -> Self {
        let mut ids: Box<dyn IdGenerator> = Box::new(ids);
        ids.reserve_through(collection.max_id());
        Self {
            current: Arc::new(collection),
            ids,
            editing: None,
            source_name: None,
        }
    }

    /// Current collection; later mutations do not affect the returned value
    pub fn snapshot(&self) -> Arc<Collection> {
        Arc::clone(&self.current)
    }

    pub fn collection(&self) -> &Collection {
        &self.current
    }

    pub fn checklist(&self, id: ChecklistId) -> Option<&Checklist> {
        self.current.get(id)
    }

    /// File name to use when exporting the current collection
    pub fn export_file_name(&self) -> &str {
        self.source_name.as_deref().unwrap_or(DEFAULT_EXPORT_FILE_NAME)
    }

    pub fn editing_checklist(&self) -> Option<ChecklistId> {
        self.editing
    }

    /// Enter title-editing mode for `id`
    pub fn begin_editing(&mut self, id: ChecklistId) -> bool {
        if self.current.get(id).is_none() {
            warn!(checklist_id = id, "begin_editing: checklist not found");
            return false;
        }
        self.editing = Some(id);
        true
    }

    /// Leave title-editing mode without renaming
    pub fn cancel_editing(&mut self) {
        self.editing = None;
    }

    fn fresh_id(&mut self) -> Option<u64> {
        let id = self.ids.next_id();
        if id.is_none() {
            warn!(max_id = self.current.max_id(), "id space exhausted; nothing created");
        }
        id
    }

    fn commit(&mut self, next: Collection) {
        self.current = Arc::new(next);
    }

    /// Append a new, empty checklist
    ///
    /// Returns the new id, or `None` when `title` is empty or whitespace or
    /// no fresh id is left.
    pub fn create_checklist(&mut self, title: &str) -> Option<ChecklistId> {
        if title.trim().is_empty() {
            debug!("create_checklist: blank title ignored");
            return None;
        }
        let id = self.fresh_id()?;
        let next = self.current.with_checklist(Checklist::new(id, title));
        self.commit(next);
        debug!(checklist_id = id, "checklist created");
        Some(id)
    }

    pub fn delete_checklist(&mut self, id: ChecklistId) -> bool {
        let Some(next) = self.current.without_checklist(id) else {
            warn!(checklist_id = id, "delete_checklist: checklist not found");
            return false;
        };
        self.commit(next);
        if self.editing == Some(id) {
            self.editing = None;
        }
        debug!(checklist_id = id, "checklist deleted");
        true
    }

    /// Replace a checklist's title; always leaves editing mode
    pub fn rename_checklist(&mut self, id: ChecklistId, new_title: &str) -> bool {
        self.editing = None;
        let Some(next) = self
            .current
            .try_map_checklist(id, |c| Some(c.renamed(new_title)))
        else {
            warn!(checklist_id = id, "rename_checklist: checklist not found");
            return false;
        };
        self.commit(next);
        debug!(checklist_id = id, "checklist renamed");
        true
    }

    fn append_entry(&mut self, checklist_id: ChecklistId, entry: ChecklistEntry) -> Option<EntryId> {
        let entry_id = entry.id();
        let kind = entry.kind();
        let Some(next) = self
            .current
            .try_map_checklist(checklist_id, |c| Some(c.with_entry(entry.clone())))
        else {
            warn!(checklist_id, %kind, "append: checklist not found");
            return None;
        };
        self.commit(next);
        debug!(checklist_id, entry_id, %kind, "entry appended");
        Some(entry_id)
    }

    /// Append a "New Item" / "CHECK" placeholder item
    pub fn add_item(&mut self, checklist_id: ChecklistId) -> Option<EntryId> {
        if self.current.get(checklist_id).is_none() {
            warn!(checklist_id, "add_item: checklist not found");
            return None;
        }
        let id = self.fresh_id()?;
        self.append_entry(checklist_id, ChecklistItem::placeholder(id).into())
    }

    pub fn add_divider(&mut self, checklist_id: ChecklistId) -> Option<EntryId> {
        if self.current.get(checklist_id).is_none() {
            warn!(checklist_id, "add_divider: checklist not found");
            return None;
        }
        let id = self.fresh_id()?;
        self.append_entry(checklist_id, ChecklistDivider { id }.into())
    }

    /// Set `target` or `state` on an item
    ///
    /// The value is stored as given. Unknown ids and dividers are ignored.
    pub fn update_item_field(
        &mut self,
        checklist_id: ChecklistId,
        entry_id: EntryId,
        field: ItemField,
        value: &str,
    ) -> bool {
        let Some(next) = self
            .current
            .try_map_checklist(checklist_id, |c| c.with_item_field(entry_id, field, value))
        else {
            warn!(checklist_id, entry_id, %field, "update_item_field: no item to update");
            return false;
        };
        self.commit(next);
        debug!(checklist_id, entry_id, %field, "item updated");
        true
    }

    /// Remove an item or divider
    pub fn delete_entry(&mut self, checklist_id: ChecklistId, entry_id: EntryId) -> bool {
        let Some(next) = self
            .current
            .try_map_checklist(checklist_id, |c| c.without_entry(entry_id))
        else {
            warn!(checklist_id, entry_id, "delete_entry: entry not found");
            return false;
        };
        self.commit(next);
        debug!(checklist_id, entry_id, "entry deleted");
        true
    }

    /// Move the entry at `from` so that it ends up at `to`
    ///
    /// Returns `Ok(false)` for an unknown checklist or equal indices.
    pub fn reorder_entries(
        &mut self,
        checklist_id: ChecklistId,
        from: usize,
        to: usize,
    ) -> Result<bool, StoreError> {
        let Some(checklist) = self.current.get(checklist_id) else {
            warn!(checklist_id, "reorder_entries: checklist not found");
            return Ok(false);
        };
        let len = checklist.entries.len();
        for index in [from, to] {
            if index >= len {
                return Err(StoreError::IndexOutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(false);
        }

        let next = self
            .current
            .try_map_checklist(checklist_id, |c| Some(c.with_entry_moved(from, to)));
        if let Some(next) = next {
            self.commit(next);
        }
        debug!(checklist_id, from, to, "entries reordered");
        Ok(true)
    }

    /// Swap in an imported collection wholesale
    pub fn replace_collection(&mut self, collection: Collection, source_name: Option<String>) {
        self.ids.reserve_through(collection.max_id());
        self.commit(collection);
        self.editing = None;
        self.source_name = source_name;
        debug!(checklists = self.current.len(), "collection replaced");
    }
}
