//! Mock adapters for offline use.

pub mod mock_backend;

pub use mock_backend::MockBackend;
