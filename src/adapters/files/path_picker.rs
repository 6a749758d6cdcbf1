//! Implements FilePicker over a filesystem path.

use crate::domain::{Attachment, DomainError};
use crate::ports::FilePicker;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Picks the file at a fixed path. `None` means nothing selected.
pub struct PathFilePicker {
    path: Option<PathBuf>,
}

impl PathFilePicker {
    pub fn new(path: Option<impl AsRef<Path>>) -> Self {
        Self {
            path: path.map(|p| p.as_ref().to_path_buf()),
        }
    }

    /// Blank or whitespace-only input means no selection.
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        Self::new((!trimmed.is_empty()).then_some(trimmed))
    }
}

#[async_trait::async_trait]
impl FilePicker for PathFilePicker {
    async fn selected_file(&self) -> Result<Option<Attachment>, DomainError> {
        let Some(path) = &self.path else {
            return Ok(None);
        };

        let bytes = fs::read(path)
            .await
            .map_err(|e| DomainError::FileRead(format!("{}: {}", path.display(), e)))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        debug!(path = %path.display(), size = bytes.len(), "file selected");
        Ok(Some(Attachment::new(file_name, bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_selected_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        std::fs::write(&path, b"%PDF").unwrap();

        let picked = PathFilePicker::new(Some(&path))
            .selected_file()
            .await
            .unwrap()
            .unwrap();

        assert_eq!(picked.file_name, "report.pdf");
        assert_eq!(picked.bytes, b"%PDF");
    }

    #[tokio::test]
    async fn test_blank_input_is_no_selection() {
        let picked = PathFilePicker::from_input("   ")
            .selected_file()
            .await
            .unwrap();
        assert!(picked.is_none());
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let picker = PathFilePicker::new(Some(&missing));

        let err = picker.selected_file().await.unwrap_err();
        assert!(matches!(err, DomainError::FileRead(_)));
    }
}
