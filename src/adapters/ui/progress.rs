//! Spinner shown while a backend request is pending.
//!
//! Wraps any `ChatBackend`; the spinner is cleared before the reply reaches a sink.

use crate::domain::{Attachment, ChatMessage, ChatReply, DomainError, UploadReceipt};
use crate::ports::ChatBackend;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(80);

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.magenta} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(TICK);
    pb
}

/// `ChatBackend` decorator that spins while the inner call is in flight.
pub struct SpinnerBackend {
    inner: Arc<dyn ChatBackend>,
}

impl SpinnerBackend {
    pub fn new(inner: Arc<dyn ChatBackend>) -> Self {
        Self { inner }
    }
}

#[async_trait::async_trait]
impl ChatBackend for SpinnerBackend {
    async fn send_message(&self, message: &ChatMessage) -> Result<ChatReply, DomainError> {
        let pb = spinner("Waiting for reply...");
        let result = self.inner.send_message(message).await;
        pb.finish_and_clear();
        result
    }

    async fn upload_file(&self, file: &Attachment) -> Result<UploadReceipt, DomainError> {
        let pb = spinner("Uploading...");
        let result = self.inner.upload_file(file).await;
        pb.finish_and_clear();
        result
    }
}
