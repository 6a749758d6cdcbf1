//! In-memory port fakes for use-case tests.

use crate::domain::{Attachment, ChatMessage, ChatReply, DomainError, UploadReceipt};
use crate::ports::{AlertSink, ChatBackend, FilePicker, ResponseSink};
use std::sync::Mutex;
use std::time::Duration;

/// Records every call. Replies with fixed texts, or fails with `MissingField`.
pub struct RecordingBackend {
    reply: Option<(String, String)>,
    delay: Duration,
    messages: Mutex<Vec<ChatMessage>>,
    uploads: Mutex<Vec<Attachment>>,
}

impl RecordingBackend {
    pub fn replying(response: &str, message: &str) -> Self {
        Self {
            reply: Some((response.to_string(), message.to_string())),
            delay: Duration::ZERO,
            messages: Mutex::default(),
            uploads: Mutex::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            ..Self::replying("", "")
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages.lock().unwrap().clone()
    }

    pub fn uploads(&self) -> Vec<Attachment> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ChatBackend for RecordingBackend {
    async fn send_message(&self, message: &ChatMessage) -> Result<ChatReply, DomainError> {
        self.messages.lock().unwrap().push(message.clone());
        tokio::time::sleep(self.delay).await;
        match &self.reply {
            Some((response, _)) => Ok(ChatReply {
                response: response.clone(),
            }),
            None => Err(DomainError::MissingField("response")),
        }
    }

    async fn upload_file(&self, file: &Attachment) -> Result<UploadReceipt, DomainError> {
        self.uploads.lock().unwrap().push(file.clone());
        tokio::time::sleep(self.delay).await;
        match &self.reply {
            Some((_, message)) => Ok(UploadReceipt {
                message: message.clone(),
            }),
            None => Err(DomainError::MissingField("message")),
        }
    }
}

pub struct FixedPicker(Option<Attachment>);

impl FixedPicker {
    pub fn with(file: Attachment) -> Self {
        Self(Some(file))
    }

    pub fn empty() -> Self {
        Self(None)
    }
}

#[async_trait::async_trait]
impl FilePicker for FixedPicker {
    async fn selected_file(&self) -> Result<Option<Attachment>, DomainError> {
        Ok(self.0.clone())
    }
}

#[derive(Default)]
pub struct MemorySink(Mutex<Vec<String>>);

impl MemorySink {
    pub fn shown(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl ResponseSink for MemorySink {
    fn show_response(&self, text: &str) {
        self.0.lock().unwrap().push(text.to_string());
    }
}

#[derive(Default)]
pub struct MemoryAlert(Mutex<Vec<String>>);

impl MemoryAlert {
    pub fn alerts(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl AlertSink for MemoryAlert {
    fn alert(&self, message: &str) {
        self.0.lock().unwrap().push(message.to_string());
    }
}
