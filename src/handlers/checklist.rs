//! Checklist-level handlers: list, create, delete, rename

use crate::ChecklistServerHandler;
use crate::checklist::ChecklistId;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl ChecklistServerHandler {
    /// Lists every checklist with entry positions and ids.
    pub async fn handle_list_checklists(&self) -> McpResult<String> {
        let store = self.lock_store()?;
        Ok(formatting::format_checklists(
            store.collection(),
            store.editing_checklist(),
        ))
    }

    /// Appends a new, empty checklist.
    pub async fn handle_create_checklist(&self, title: String) -> McpResult<String> {
        let mut store = self.lock_store()?;
        match store.create_checklist(&title) {
            Some(id) => Ok(format!("Checklist created with ID: {} ({})", id, title)),
            None if title.trim().is_empty() => Ok(
                "Checklist title is empty; nothing created. Provide a title such as 'Before Landing'."
                    .to_string(),
            ),
            None => Ok(IDS_EXHAUSTED.to_string()),
        }
    }

    /// Removes a checklist together with all of its entries.
    pub async fn handle_delete_checklist(&self, checklist_id: ChecklistId) -> McpResult<String> {
        let mut store = self.lock_store()?;
        if store.delete_checklist(checklist_id) {
            Ok(format!("Checklist {} deleted", checklist_id))
        } else {
            Ok(not_found(checklist_id))
        }
    }

    /// Replaces a checklist's title.
    pub async fn handle_rename_checklist(
        &self,
        checklist_id: ChecklistId,
        title: String,
    ) -> McpResult<String> {
        let mut store = self.lock_store()?;
        if store.rename_checklist(checklist_id, &title) {
            Ok(format!("Checklist {} renamed to {}", checklist_id, title))
        } else {
            Ok(not_found(checklist_id))
        }
    }
}

pub(crate) const IDS_EXHAUSTED: &str =
    "No fresh IDs are left above the highest imported ID; nothing created. Re-import with smaller IDs.";

pub(crate) fn not_found(checklist_id: ChecklistId) -> String {
    format!(
        "Checklist {} not found; nothing changed. Use list_checklists() to see available checklists.",
        checklist_id
    )
}
