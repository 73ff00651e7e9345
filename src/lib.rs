//! Aerolist Checklist Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for editing
//! aviation-style checklists: titled lists of target/state items separated
//! by dividers, which can be reordered, exported and imported as JSON, and
//! rendered as a print view.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `ChecklistServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `checklist` module - Data model, copy-on-write edits and the store
//! - **Transfer Layer**: `serializer` and `storage` modules - JSON export/import
//!
//! State lives in memory for the session; nothing is written unless an
//! export is requested.
//!
//! # Example
//!
//! ```no_run
//! use aerolist::ChecklistServerHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = ChecklistServerHandler::open(None, ".", true)?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod checklist;
pub mod formatting;
pub mod handlers;
pub mod serializer;
pub mod storage;
pub mod validation;

use anyhow::{Context as _, Result};
use mcp_attr::Result as McpResult;
use mcp_attr::bail_public;
use mcp_attr::server::{McpServer, mcp_server};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

// Re-export commonly used types
pub use checklist::{
    Checklist, ChecklistEntry, ChecklistId, ChecklistStore, ClockIds, Collection, EntryId,
    EntryKind, ItemField, SequentialIds,
};
pub use storage::Storage;

/// MCP Server handler for checklist editing
///
/// Wraps a [`ChecklistStore`] for the session and a [`Storage`] for
/// export/import files.
pub struct ChecklistServerHandler {
    pub(crate) store: Mutex<ChecklistStore>,
    pub(crate) storage: Storage,
}

impl ChecklistServerHandler {
    /// Create a handler from an existing store
    pub fn new(store: ChecklistStore, storage: Storage) -> Self {
        Self {
            store: Mutex::new(store),
            storage,
        }
    }

    /// Create a handler for a new session
    ///
    /// # Arguments
    /// * `import_path` - JSON file to load at startup (optional)
    /// * `export_dir` - Directory relative export/import paths resolve against
    /// * `seed_defaults` - Start with the default pre-flight checklist when nothing is imported
    ///
    /// # Example
    /// ```no_run
    /// # use aerolist::ChecklistServerHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = ChecklistServerHandler::open(Some("c172.json"), ".", false)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn open(
        import_path: Option<&str>,
        export_dir: impl AsRef<Path>,
        seed_defaults: bool,
    ) -> Result<Self> {
        let storage = Storage::new(export_dir);

        let store = match import_path {
            Some(path) => {
                let (collection, file_name) = storage
                    .read_blocking(path)
                    .with_context(|| format!("Failed to import checklists from {}", path))?;
                let mut store = ChecklistStore::new(ClockIds::new());
                store.replace_collection(collection, Some(file_name));
                store
            }
            None if seed_defaults => ChecklistStore::with_defaults(ClockIds::new()),
            None => ChecklistStore::new(ClockIds::new()),
        };

        Ok(Self::new(store, storage))
    }

    pub(crate) fn lock_store(&self) -> McpResult<MutexGuard<'_, ChecklistStore>> {
        match self.store.lock() {
            Ok(guard) => Ok(guard),
            Err(_) => {
                bail_public!(_, "Checklist store is unavailable after an earlier failure");
            }
        }
    }

    /// Current collection, for inspection
    pub fn snapshot(&self) -> McpResult<Arc<Collection>> {
        Ok(self.lock_store()?.snapshot())
    }
}

/// Checklist editor for aviation-style "challenge / response" checklists.
///
/// A collection holds named checklists. Each checklist is an ordered list of entries:
/// - **item**: a target (what to check, e.g. "Fuel Quantity") and a state (expected result, e.g. "CHECK")
/// - **divider**: a section break with no content
///
/// Entries are addressed by checklist ID plus entry ID; reordering uses zero-based positions
/// as shown by list_checklists. States are stored upper-case.
/// Everything lives in memory for this session - use export_checklists to keep your work.
#[mcp_server]
impl McpServer for ChecklistServerHandler {
    /// **Review**: Show all checklists with entry positions, IDs and kinds. Start here.
    #[tool]
    async fn list_checklists(&self) -> McpResult<String> {
        self.handle_list_checklists().await
    }

    /// **Create**: Add a new, empty checklist at the end of the collection.
    #[tool]
    async fn create_checklist(
        &self,
        /// Title, e.g. "Before Takeoff" (must not be blank)
        title: String,
    ) -> McpResult<String> {
        self.handle_create_checklist(title).await
    }

    /// **Delete**: Remove a checklist and all of its entries.
    #[tool]
    async fn delete_checklist(
        &self,
        /// Checklist ID
        checklist_id: u64,
    ) -> McpResult<String> {
        self.handle_delete_checklist(checklist_id).await
    }

    /// **Rename**: Change a checklist's title.
    #[tool]
    async fn rename_checklist(
        &self,
        /// Checklist ID
        checklist_id: u64,
        /// New title
        title: String,
    ) -> McpResult<String> {
        self.handle_rename_checklist(checklist_id, title).await
    }

    /// **Add item**: Append an item to a checklist. Defaults to target "New Item", state "CHECK".
    #[tool]
    async fn add_item(
        &self,
        /// Checklist ID
        checklist_id: u64,
        /// Target, e.g. "Master Switch" (optional)
        target: Option<String>,
        /// State, e.g. "ON" - upper-cased (optional)
        state: Option<String>,
    ) -> McpResult<String> {
        self.handle_add_item(checklist_id, target, state).await
    }

    /// **Add divider**: Append a section divider to a checklist.
    #[tool]
    async fn add_divider(
        &self,
        /// Checklist ID
        checklist_id: u64,
    ) -> McpResult<String> {
        self.handle_add_divider(checklist_id).await
    }

    /// **Edit item**: Set the target or state of an item. Dividers have no fields.
    #[tool]
    async fn update_item(
        &self,
        /// Checklist ID
        checklist_id: u64,
        /// Item ID
        item_id: u64,
        /// Field: target/state
        field: String,
        /// New value (state is upper-cased)
        value: String,
    ) -> McpResult<String> {
        self.handle_update_item(checklist_id, item_id, field, value)
            .await
    }

    /// **Delete entry**: Remove an item or divider from a checklist.
    #[tool]
    async fn delete_entry(
        &self,
        /// Checklist ID
        checklist_id: u64,
        /// Entry ID (item or divider)
        entry_id: u64,
    ) -> McpResult<String> {
        self.handle_delete_entry(checklist_id, entry_id).await
    }

    /// **Reorder**: Move the entry at one position to another (zero-based, as in list_checklists).
    #[tool]
    async fn reorder_entries(
        &self,
        /// Checklist ID
        checklist_id: u64,
        /// Current position of the entry
        from_index: usize,
        /// Position the entry should end up at
        to_index: usize,
    ) -> McpResult<String> {
        self.handle_reorder_entries(checklist_id, from_index, to_index)
            .await
    }

    /// **Export**: Save all checklists as pretty-printed JSON.
    /// Defaults to the imported file name, or aviation-checklists.json.
    #[tool]
    async fn export_checklists(
        &self,
        /// Plain file name inside the export directory; ".json" is appended if missing (optional)
        file_name: Option<String>,
    ) -> McpResult<String> {
        self.handle_export(file_name).await
    }

    /// **Import**: Replace ALL current checklists with the contents of a JSON file.
    /// On failure the current checklists are kept.
    #[tool]
    async fn import_checklists(
        &self,
        /// Path to a .json file produced by export_checklists
        path: String,
    ) -> McpResult<String> {
        self.handle_import(path).await
    }

    /// **Print**: Render every checklist as a print-ready text view without IDs.
    #[tool]
    async fn print_checklists(
        &self,
        /// Line width in characters, default 60, clamped to 20..=200 (optional)
        width: Option<usize>,
    ) -> McpResult<String> {
        self.handle_print(width).await
    }
}
