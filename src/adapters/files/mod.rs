//! Filesystem adapters.

pub mod path_picker;

pub use path_picker::PathFilePicker;
