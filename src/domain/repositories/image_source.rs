//! Image source trait
//!
//! Defines read-only, random-access access to the raw image being carved.
//! The scan engine only ever sees a byte slice; implementations decide
//! whether that slice is memory-mapped or held in a buffer.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when opening or reading an image
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Image not found or not readable: {}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Image is not a regular file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("Failed to memory-map {}: {source}", path.display())]
    Map {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid offset: {offset} exceeds image size {image_size}")]
    InvalidOffset { offset: u64, image_size: u64 },
}

impl SourceError {
    /// Maps an open/stat failure to `SourceNotFound`
    pub(crate) fn not_found(path: &Path, source: io::Error) -> Self {
        SourceError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Trait for read-only access to a raw image
///
/// # Example
///
/// ```ignore
/// let image = MmapImage::open(Path::new("disk.img"))?;
/// let head = image.read_at(0, 512)?;
/// ```
pub trait ImageSource {
    /// Opens the image for reading
    fn open(path: &Path) -> Result<Self, SourceError>
    where
        Self: Sized;

    /// Path the image was opened from
    fn path(&self) -> &Path;

    /// The whole image as one contiguous slice
    fn as_bytes(&self) -> &[u8];

    /// Total size in bytes
    fn size(&self) -> u64 {
        self.as_bytes().len() as u64
    }

    /// Reads up to `length` bytes at `offset`, clamped to the end of the image
    ///
    /// The slice is shorter than `length` when the range runs past the end.
    fn read_at(&self, offset: u64, length: u64) -> Result<&[u8], SourceError> {
        let data = self.as_bytes();
        let image_size = data.len() as u64;
        if offset > image_size {
            return Err(SourceError::InvalidOffset { offset, image_size });
        }

        let end = offset.saturating_add(length).min(image_size);
        Ok(&data[offset as usize..end as usize])
    }
}
