//! Infrastructure adapters. Implement outbound ports.
//!
//! HTTP backend, offline mock, filesystem, terminal UI. Map errors to DomainError.

pub mod files;
pub mod http;
pub mod mock;
pub mod ui;
