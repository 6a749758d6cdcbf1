//! chatbox-client: send chat messages and upload files to a chat backend.
//! Hexagonal Architecture.

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
