//! Domain errors. Returned by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Request could not be sent, timed out, or the body could not be read.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Backend answered with a non-2xx status. `body` is truncated.
    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid JSON in reply: {0}")]
    Decode(String),

    #[error("Reply has no `{0}` field")]
    MissingField(&'static str),

    /// Backend reported a failure through an `error` key instead of the expected field.
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("No file selected")]
    NoFileSelected,

    #[error("Failed to read file: {0}")]
    FileRead(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),
}
