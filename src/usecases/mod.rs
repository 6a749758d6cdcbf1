//! Application use cases. Orchestrate domain logic via ports.

pub mod file_uploader;
pub mod message_sender;

#[cfg(test)]
mod test_support;

pub use file_uploader::FileUploader;
pub use message_sender::MessageSender;

#[cfg(test)]
mod tests {
    use super::test_support::{FixedPicker, MemoryAlert, MemorySink, RecordingBackend};
    use super::*;
    use crate::domain::{Attachment, ChatMessage};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_concurrent_send_and_upload_stay_independent() {
        let backend = Arc::new(
            RecordingBackend::replying("hi there", "Upload complete")
                .with_delay(Duration::from_millis(20)),
        );
        let sink = Arc::new(MemorySink::default());
        let alert = Arc::new(MemoryAlert::default());
        let picker = Arc::new(FixedPicker::with(Attachment::new(
            "report.pdf",
            b"bytes".to_vec(),
        )));

        let sender = MessageSender::new(backend.clone(), sink.clone());
        let uploader = FileUploader::new(backend.clone(), picker, alert.clone());

        let (sent, uploaded) = tokio::join!(sender.send("hello"), uploader.upload());
        sent.unwrap();
        uploaded.unwrap();

        assert_eq!(backend.messages(), vec![ChatMessage::new("hello")]);
        assert_eq!(backend.uploads().len(), 1);
        assert_eq!(sink.shown(), vec!["hi there".to_string()]);
        assert_eq!(alert.alerts(), vec!["Upload complete".to_string()]);
    }
}
