//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{Attachment, ChatMessage, ChatReply, DomainError, UploadReceipt};

/// Chat backend. One HTTP round trip per call, no retries.
#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync {
    /// POST the message to `/send_message` and decode the `response` field.
    async fn send_message(&self, message: &ChatMessage) -> Result<ChatReply, DomainError>;

    /// POST the file as multipart part `file` to `/upload` and decode the `message` field.
    async fn upload_file(&self, file: &Attachment) -> Result<UploadReceipt, DomainError>;
}

/// File source for the uploader. Stands in for the page's file-picker input.
#[async_trait::async_trait]
pub trait FilePicker: Send + Sync {
    /// Returns the first selected file, or `None` when nothing is selected.
    async fn selected_file(&self) -> Result<Option<Attachment>, DomainError>;
}

/// Text sink for chat replies. Stands in for the page's `response` element.
pub trait ResponseSink: Send + Sync {
    fn show_response(&self, text: &str);
}

/// Blocking notification for upload receipts. Stands in for the page's modal alert.
pub trait AlertSink: Send + Sync {
    fn alert(&self, message: &str);
}
