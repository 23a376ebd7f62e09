//! Repository traits (interfaces)
//!
//! Contracts for the image being scanned and for the storage carved files
//! are written to. Infrastructure provides the implementations.

mod file_writer;
mod image_source;

pub use file_writer::{CarvedFileWriter, FileWriterError, WriteOptions, WriteOutcome};
pub use image_source::{ImageSource, SourceError};
