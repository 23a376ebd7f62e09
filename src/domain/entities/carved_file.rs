//! Carved file entity
//!
//! Record of one extent written to disk by the carver.

use std::path::{Path, PathBuf};

/// A file written by the carver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarvedFile {
    match_id: u64,
    path: PathBuf,
    size: u64,
    sha256: String,
}

impl CarvedFile {
    pub fn new(match_id: u64, path: PathBuf, size: u64, sha256: String) -> Self {
        Self {
            match_id,
            path,
            size,
            sha256,
        }
    }

    /// Id of the scan match this file was carved from
    pub fn match_id(&self) -> u64 {
        self.match_id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final path component, for display
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Lowercase hex SHA-256 of the written bytes
    pub fn sha256(&self) -> &str {
        &self.sha256
    }
}
