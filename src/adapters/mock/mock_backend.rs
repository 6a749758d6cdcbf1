//! Mock backend for running without a server.
//!
//! Returns canned replies built from the request.

use crate::domain::{Attachment, ChatMessage, ChatReply, DomainError, UploadReceipt};
use crate::ports::ChatBackend;
use std::time::Duration;
use tracing::info;

/// Offline backend. Echoes messages and acknowledges uploads
/// after a simulated network delay.
pub struct MockBackend {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockBackend {
    /// Create a new mock backend with default delay (100ms).
    pub fn new() -> Self {
        Self { delay_ms: 100 }
    }

    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ChatBackend for MockBackend {
    async fn send_message(&self, message: &ChatMessage) -> Result<ChatReply, DomainError> {
        info!(
            input_len = message.input.len(),
            "[MOCK] Simulating chat reply"
        );
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        Ok(ChatReply {
            response: format!("[MOCK] You said: {}", message.input),
        })
    }

    async fn upload_file(&self, file: &Attachment) -> Result<UploadReceipt, DomainError> {
        info!(
            file = %file.file_name,
            size = file.len(),
            "[MOCK] Simulating upload"
        );
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        Ok(UploadReceipt {
            message: format!(
                "[MOCK] File {} ({} bytes) uploaded successfully!",
                file.file_name,
                file.len()
            ),
        })
    }
}
