use crate::checklist::Collection;
use crate::serializer::{self, ExportError, ImportError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File access for exports and imports
///
/// Relative paths are resolved against the export directory. Nothing is
/// written unless an export is requested.
pub struct Storage {
    export_dir: PathBuf,
}

impl Storage {
    pub fn new(export_dir: impl AsRef<Path>) -> Self {
        Self {
            export_dir: export_dir.as_ref().to_path_buf(),
        }
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.export_dir.join(path)
        }
    }

    /// Read and parse an import file, returning the collection and the file name
    pub async fn read(&self, path: impl AsRef<Path>) -> Result<(Collection, String), ImportError> {
        let path = self.resolve(path);
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ImportError::Read {
                path: path.clone(),
                source,
            })?;
        Self::parse(&path, &content)
    }

    /// Blocking variant of [`Storage::read`], used at startup
    pub fn read_blocking(&self, path: impl AsRef<Path>) -> Result<(Collection, String), ImportError> {
        let path = self.resolve(path);
        let content = fs::read_to_string(&path).map_err(|source| ImportError::Read {
            path: path.clone(),
            source,
        })?;
        Self::parse(&path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<(Collection, String), ImportError> {
        let collection = serializer::import(content)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!(path = %path.display(), checklists = collection.len(), "imported checklists");
        Ok((collection, file_name))
    }

    /// Write `collection` as JSON to `file_name` and return the full path
    pub async fn write(&self, collection: &Collection, file_name: &str) -> Result<PathBuf, ExportError> {
        let content = serializer::export(collection)?;
        let path = self.resolve(file_name);
        tokio::fs::write(&path, content)
            .await
            .map_err(|source| ExportError::Write {
                path: path.clone(),
                source,
            })?;
        info!(path = %path.display(), checklists = collection.len(), "exported checklists");
        Ok(path)
    }
}
