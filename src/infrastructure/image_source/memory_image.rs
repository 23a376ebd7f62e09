//! In-memory image implementation
//!
//! Holds the whole image in a buffer. Suited to small images and to
//! callers that already have the bytes.

use crate::domain::repositories::{ImageSource, SourceError};
use std::fs;
use std::path::{Path, PathBuf};

/// Image held in an owned buffer
#[derive(Debug, Clone)]
pub struct MemoryImage {
    data: Vec<u8>,
    path: PathBuf,
}

impl MemoryImage {
    /// Wraps bytes that did not come from a file
    pub fn from_bytes(label: impl Into<PathBuf>, data: Vec<u8>) -> Self {
        Self {
            data,
            path: label.into(),
        }
    }
}

impl ImageSource for MemoryImage {
    fn open(path: &Path) -> Result<Self, SourceError> {
        if path.is_dir() {
            return Err(SourceError::NotAFile {
                path: path.to_path_buf(),
            });
        }
        let data = fs::read(path).map_err(|e| SourceError::not_found(path, e))?;
        Ok(Self {
            data,
            path: path.to_path_buf(),
        })
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
