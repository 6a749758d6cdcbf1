//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Menu loop: send a message, upload a file, or quit.

use super::console::{ConsoleAlert, ConsoleResponseSink, print_error};
use crate::adapters::files::PathFilePicker;
use crate::domain::{Attachment, DomainError};
use crate::ports::{ChatBackend, FilePicker, InputPort};
use crate::usecases::{FileUploader, MessageSender};
use async_trait::async_trait;
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{Select, Text};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Applies the neon prompt theme to every subsequent inquire prompt.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("❯").with_fg(Color::LightMagenta))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(Color::LightCyan));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    SendMessage,
    UploadFile,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 3] = [Self::SendMessage, Self::UploadFile, Self::Quit];
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::SendMessage => "Send message",
            Self::UploadFile => "Upload file",
            Self::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Esc / Ctrl-C end the session instead of failing it.
fn is_cancel(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// File picker that asks for a path. Blank answer means no file selected.
pub struct PromptFilePicker;

#[async_trait]
impl FilePicker for PromptFilePicker {
    async fn selected_file(&self) -> Result<Option<Attachment>, DomainError> {
        let path = Text::new("File to upload:")
            .with_help_message("leave blank for no file")
            .prompt()
            .map_err(|e| DomainError::Prompt(e.to_string()))?;
        PathFilePicker::from_input(&path).selected_file().await
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    sender: MessageSender,
    uploader: FileUploader,
}

impl TuiInputPort {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            sender: MessageSender::new(Arc::clone(&backend), Arc::new(ConsoleResponseSink)),
            uploader: FileUploader::new(
                backend,
                Arc::new(PromptFilePicker),
                Arc::new(ConsoleAlert::new(true)),
            ),
        }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let action = match Select::new("What next?", MenuAction::ALL.to_vec()).prompt() {
                Ok(action) => action,
                Err(e) if is_cancel(&e) => break,
                Err(e) => return Err(DomainError::Prompt(e.to_string())),
            };

            let result = match action {
                MenuAction::SendMessage => match Text::new("chatbox:").prompt() {
                    Ok(input) => self.sender.send(&input).await.map(|_| ()),
                    Err(e) if is_cancel(&e) => continue,
                    Err(e) => Err(DomainError::Prompt(e.to_string())),
                },
                MenuAction::UploadFile => self.uploader.upload().await.map(|_| ()),
                MenuAction::Quit => break,
            };

            if let Err(e) = result {
                warn!(action = %action, error = %e, "operation failed");
                print_error(&e);
            }
        }
        Ok(())
    }
}
