//! File uploader: selected file in, one multipart POST out, receipt to the alert sink.

use crate::domain::{DomainError, UploadReceipt};
use crate::ports::{AlertSink, ChatBackend, FilePicker};
use std::sync::Arc;
use tracing::{info, warn};

/// Uploads the picker's selected file and shows the backend's message as an alert.
pub struct FileUploader {
    backend: Arc<dyn ChatBackend>,
    picker: Arc<dyn FilePicker>,
    alert: Arc<dyn AlertSink>,
}

impl FileUploader {
    pub fn new(
        backend: Arc<dyn ChatBackend>,
        picker: Arc<dyn FilePicker>,
        alert: Arc<dyn AlertSink>,
    ) -> Self {
        Self {
            backend,
            picker,
            alert,
        }
    }

    /// Upload the selected file.
    ///
    /// With no file selected the request is omitted and `DomainError::NoFileSelected`
    /// is returned. Empty (zero-byte) files are uploaded as-is.
    pub async fn upload(&self) -> Result<UploadReceipt, DomainError> {
        let Some(file) = self.picker.selected_file().await? else {
            warn!("upload requested with no file selected");
            return Err(DomainError::NoFileSelected);
        };

        info!(file = %file.file_name, size = file.len(), "uploading file");
        let receipt = self.backend.upload_file(&file).await?;

        self.alert.alert(&receipt.message);
        Ok(receipt)
    }
}
