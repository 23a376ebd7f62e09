//! Domain entities
//!
//! Core objects of the carving domain: signatures, the matches the scan
//! engine resolves, and the files the carver writes.

mod carved_file;
mod scan_match;
mod signature;

pub use carved_file::CarvedFile;
pub use scan_match::ScanMatch;
pub use signature::{Signature, SignatureError};
