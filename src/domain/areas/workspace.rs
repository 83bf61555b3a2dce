use crate::domain::objects::document::{DocumentError, DocumentFormat};
use std::path::{Path, PathBuf};

/// The directory that relative document paths are resolved against.
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Absolute paths are returned unchanged.
    pub fn resolve(&self, file: &str) -> PathBuf {
        self.path.join(file)
    }

    pub async fn read_document(&self, file: &str) -> Result<String, DocumentError> {
        let path = self.resolve(file);

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| DocumentError::Read {
                path: path.clone(),
                source,
            })?;
        let text = DocumentFormat::from_path(&path)?.extract(&path, &bytes)?;

        log::debug!(
            "Extracted {} characters from {:?} ({} bytes)",
            text.chars().count(),
            path,
            bytes.len()
        );

        Ok(text)
    }
}
