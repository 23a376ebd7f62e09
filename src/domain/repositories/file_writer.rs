//! File writer trait
//!
//! Defines the interface for persisting carved extents.

use crate::domain::entities::CarvedFile;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when writing carved files
#[derive(Error, Debug)]
pub enum FileWriterError {
    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("Output path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Options for writing carved files
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Replace files that already exist at the destination
    pub overwrite: bool,
}

/// What happened to one write request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(CarvedFile),
    /// Destination existed and overwrite was not requested
    Skipped(PathBuf),
}

/// Trait for writing carved files to storage
///
/// # Example
///
/// ```ignore
/// let writer = LocalFileWriter::new(Path::new("recovered"))?;
/// let outcome = writer.write(1, "000000000007.jpg", &bytes, &WriteOptions::default())?;
/// ```
pub trait CarvedFileWriter {
    /// Creates a writer for the given output directory, creating it if needed
    fn new(output_dir: &Path) -> Result<Self, FileWriterError>
    where
        Self: Sized;

    /// Writes `data` as `file_name` inside the output directory
    fn write(
        &self,
        match_id: u64,
        file_name: &str,
        data: &[u8],
        options: &WriteOptions,
    ) -> Result<WriteOutcome, FileWriterError>;

    fn output_dir(&self) -> &Path;

    /// Number of files written so far
    fn files_written(&self) -> usize;

    /// Total bytes written so far
    fn bytes_written(&self) -> u64;
}
