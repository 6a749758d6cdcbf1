//! Message sender: text in, one POST out, reply text to the response sink.

use crate::domain::{ChatMessage, ChatReply, DomainError};
use crate::ports::{ChatBackend, ResponseSink};
use std::sync::Arc;
use tracing::info;

/// Sends one chat message per call and writes the reply to a `ResponseSink`.
pub struct MessageSender {
    backend: Arc<dyn ChatBackend>,
    sink: Arc<dyn ResponseSink>,
}

impl MessageSender {
    pub fn new(backend: Arc<dyn ChatBackend>, sink: Arc<dyn ResponseSink>) -> Self {
        Self { backend, sink }
    }

    /// Send `input` as `{"input": ...}`. On success the reply text is written to the sink
    /// exactly once; on failure nothing is written and the error is returned.
    pub async fn send(&self, input: &str) -> Result<ChatReply, DomainError> {
        let message = ChatMessage::new(input);
        info!(input_len = input.len(), "sending chat message");

        let reply = self.backend.send_message(&message).await?;

        self.sink.show_response(&reply.response);
        info!(reply_len = reply.response.len(), "chat reply displayed");
        Ok(reply)
    }
}
