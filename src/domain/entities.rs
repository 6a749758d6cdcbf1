//! Domain entities. Request-scoped values exchanged with the chat backend.
//!
//! No HTTP/IO types here; adapters map wire bodies into these.

use serde::Serialize;

/// Outgoing chat request. Serialized as `{"input": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub input: String,
}

impl ChatMessage {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Reply to a chat request. Carries the backend's `response` text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub response: String,
}

/// A file selected for upload: name as reported by the picker plus raw bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Bytes are elided; attachments can be large.
impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Reply to an upload. Carries the backend's `message` text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_wire_shape() {
        let body = serde_json::to_string(&ChatMessage::new("hello")).unwrap();
        assert_eq!(body, r#"{"input":"hello"}"#);
    }

    #[test]
    fn test_attachment_debug_elides_bytes() {
        let file = Attachment::new("report.pdf", vec![0u8; 4096]);
        let dbg = format!("{:?}", file);
        assert!(dbg.contains("report.pdf"));
        assert!(dbg.contains("4096"));
        assert!(!dbg.contains("0, 0"));
    }
}
