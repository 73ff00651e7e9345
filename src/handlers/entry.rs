//! Entry-level handlers: add items and dividers, edit, delete, reorder

use crate::ChecklistServerHandler;
use crate::checklist::{ChecklistId, EntryId, ItemField};
use crate::handlers::checklist::{IDS_EXHAUSTED, not_found};
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl ChecklistServerHandler {
    /// Appends a placeholder item ("New Item" / "CHECK"), then applies any
    /// initial target or state given.
    pub async fn handle_add_item(
        &self,
        checklist_id: ChecklistId,
        target: Option<String>,
        state: Option<String>,
    ) -> McpResult<String> {
        let mut store = self.lock_store()?;
        if store.checklist(checklist_id).is_none() {
            return Ok(not_found(checklist_id));
        }
        let Some(item_id) = store.add_item(checklist_id) else {
            return Ok(IDS_EXHAUSTED.to_string());
        };

        for (field, value) in [(ItemField::Target, target), (ItemField::State, state)] {
            if let Some(value) = value {
                let value = validation::normalize_field_value(field, &value);
                store.update_item_field(checklist_id, item_id, field, &value);
            }
        }

        Ok(format!(
            "Item created with ID: {} (checklist: {})",
            item_id, checklist_id
        ))
    }

    /// Appends a divider.
    pub async fn handle_add_divider(&self, checklist_id: ChecklistId) -> McpResult<String> {
        let mut store = self.lock_store()?;
        if store.checklist(checklist_id).is_none() {
            return Ok(not_found(checklist_id));
        }
        match store.add_divider(checklist_id) {
            Some(divider_id) => Ok(format!(
                "Divider created with ID: {} (checklist: {})",
                divider_id, checklist_id
            )),
            None => Ok(IDS_EXHAUSTED.to_string()),
        }
    }

    /// Sets `target` or `state` on an item. States are upper-cased.
    pub async fn handle_update_item(
        &self,
        checklist_id: ChecklistId,
        item_id: EntryId,
        field: String,
        value: String,
    ) -> McpResult<String> {
        let field = validation::parse_item_field(&field)?;
        let value = validation::normalize_field_value(field, &value);

        let mut store = self.lock_store()?;
        if store.update_item_field(checklist_id, item_id, field, &value) {
            return Ok(format!("Item {} {} set to {}", item_id, field, value));
        }

        let Some(checklist) = store.checklist(checklist_id) else {
            return Ok(not_found(checklist_id));
        };
        match checklist.entry(item_id) {
            Some(entry) if entry.is_divider() => Ok(format!(
                "Entry {} is a divider and has no {}; nothing changed",
                item_id, field
            )),
            _ => Ok(format!(
                "Item {} not found in checklist {}; nothing changed",
                item_id, checklist_id
            )),
        }
    }

    /// Removes an item or divider.
    pub async fn handle_delete_entry(
        &self,
        checklist_id: ChecklistId,
        entry_id: EntryId,
    ) -> McpResult<String> {
        let mut store = self.lock_store()?;
        if store.delete_entry(checklist_id, entry_id) {
            Ok(format!("Entry {} deleted", entry_id))
        } else if store.checklist(checklist_id).is_none() {
            Ok(not_found(checklist_id))
        } else {
            Ok(format!(
                "Entry {} not found in checklist {}; nothing changed",
                entry_id, checklist_id
            ))
        }
    }

    /// Moves the entry at `from_index` to `to_index` (zero-based).
    pub async fn handle_reorder_entries(
        &self,
        checklist_id: ChecklistId,
        from_index: usize,
        to_index: usize,
    ) -> McpResult<String> {
        let mut store = self.lock_store()?;
        if store.checklist(checklist_id).is_none() {
            return Ok(not_found(checklist_id));
        }
        match store.reorder_entries(checklist_id, from_index, to_index) {
            Ok(true) => Ok(format!(
                "Entry moved from position {} to {}",
                from_index, to_index
            )),
            Ok(false) => Ok("Entry is already at that position; nothing changed".to_string()),
            Err(e) => {
                drop(store);
                bail_public!(_, "{}", e);
            }
        }
    }
}
