//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories: memory-mapped and
//! in-memory image sources, and the local file writer.

pub mod image_source;
pub mod persistence;
