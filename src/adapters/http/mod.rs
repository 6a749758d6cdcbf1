//! HTTP adapter. Talks to the chat backend with reqwest.

pub mod backend;
pub mod reply;

pub use backend::HttpBackend;
