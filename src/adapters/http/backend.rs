//! reqwest adapter for the chat backend. Implements `ChatBackend`.
//!
//! JSON POST to `/send_message`, multipart POST to `/upload`. No retries.

use super::reply::{text_field, truncate_body};
use crate::domain::{Attachment, ChatMessage, ChatReply, DomainError, UploadReceipt};
use crate::ports::ChatBackend;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::{debug, info, warn};

pub const SEND_MESSAGE_PATH: &str = "/send_message";
pub const UPLOAD_PATH: &str = "/upload";

/// Multipart field name the backend reads the file from.
pub const UPLOAD_FIELD: &str = "file";

/// HTTP backend client.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client for `base_url` (e.g. "http://127.0.0.1:5000").
    ///
    /// A trailing `/` is dropped. `timeout` of `None` waits indefinitely.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, DomainError> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder
            .build()
            .map_err(|e| DomainError::Transport(format!("build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check status, then decode `field` from the body.
    async fn read_reply(
        response: reqwest::Response,
        field: &'static str,
    ) -> Result<String, DomainError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| DomainError::Transport(format!("read body: {}", e)))?;

        if !status.is_success() {
            warn!(status = %status, body = %truncate_body(&text), "backend returned error");
            return Err(DomainError::Status {
                status: status.as_u16(),
                body: truncate_body(&text),
            });
        }

        debug!(body_len = text.len(), field, "decoding reply");
        text_field(&text, field)
    }
}

#[async_trait::async_trait]
impl ChatBackend for HttpBackend {
    async fn send_message(&self, message: &ChatMessage) -> Result<ChatReply, DomainError> {
        let url = self.endpoint(SEND_MESSAGE_PATH);
        info!(url = %url, input_len = message.input.len(), "POST chat message");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(message)
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("HTTP request failed: {}", e)))?;

        let response = Self::read_reply(response, "response").await?;
        Ok(ChatReply { response })
    }

    async fn upload_file(&self, file: &Attachment) -> Result<UploadReceipt, DomainError> {
        let url = self.endpoint(UPLOAD_PATH);
        info!(url = %url, file = %file.file_name, size = file.len(), "POST file upload");

        // Content type (with boundary) is set by reqwest from the form.
        let part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("HTTP request failed: {}", e)))?;

        let message = Self::read_reply(response, "message").await?;
        Ok(UploadReceipt { message })
    }
}
