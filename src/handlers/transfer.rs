//! Export, import and print handlers

use crate::ChecklistServerHandler;
use crate::formatting;
use crate::serializer::{self, ExportError};
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};
use tracing::warn;

impl ChecklistServerHandler {
    /// Writes the whole collection as JSON.
    ///
    /// The file always lands in the export directory; names carrying a
    /// directory part are rejected. When the file cannot be written, the
    /// JSON is returned inline so the caller can save it by hand.
    pub async fn handle_export(&self, file_name: Option<String>) -> McpResult<String> {
        let requested = match file_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Some(validation::export_file_name(name)?),
            _ => None,
        };
        let (snapshot, file_name) = {
            let store = self.lock_store()?;
            let file_name =
                requested.unwrap_or_else(|| store.export_file_name().to_string());
            (store.snapshot(), file_name)
        };

        match self.storage.write(&snapshot, &file_name).await {
            Ok(path) => Ok(format!(
                "Exported {} checklist(s) to {}",
                snapshot.len(),
                path.display()
            )),
            Err(ExportError::Write { path, source }) => {
                warn!(path = %path.display(), error = %source, "export write failed, returning JSON inline");
                match serializer::export(&snapshot) {
                    Ok(json) => Ok(format!(
                        "Could not save {} ({}). Checklists are included below as JSON; paste them into a text file and save it as .json\n\n{}",
                        path.display(),
                        source,
                        json
                    )),
                    Err(e) => {
                        bail_public!(_, "Unable to export checklists: {}", e);
                    }
                }
            }
            Err(e) => {
                bail_public!(_, "Unable to export checklists: {}", e);
            }
        }
    }

    /// Replaces the whole collection with the contents of a JSON file.
    ///
    /// The file is read before the store is touched; on any failure the
    /// current checklists stay as they are.
    pub async fn handle_import(&self, path: String) -> McpResult<String> {
        let (collection, file_name) = match self.storage.read(&path).await {
            Ok(loaded) => loaded,
            Err(e) => {
                bail_public!(_, "Import failed, checklists unchanged: {}", e);
            }
        };

        let count = collection.len();
        let mut store = self.lock_store()?;
        store.replace_collection(collection, Some(file_name.clone()));
        Ok(format!("Imported {} checklist(s) from {}", count, file_name))
    }

    /// Renders the print view of every checklist.
    pub async fn handle_print(&self, width: Option<usize>) -> McpResult<String> {
        let width = width
            .unwrap_or(formatting::PRINT_WIDTH)
            .clamp(formatting::MIN_PRINT_WIDTH, formatting::MAX_PRINT_WIDTH);
        let snapshot = self.lock_store()?.snapshot();
        if snapshot.is_empty() {
            return Ok("No checklists to print".to_string());
        }
        Ok(formatting::render_print_view(&snapshot, width))
    }
}
