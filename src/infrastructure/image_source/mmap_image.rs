//! Memory-mapped image implementation
//!
//! Provides zero-copy read access to image files. The mapping lives as long
//! as the `MmapImage` and is released when it is dropped.

use crate::domain::repositories::{ImageSource, SourceError};
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Read-only memory-mapped image
///
/// Zero-length files are not mapped; they behave as an empty image.
///
/// # Example
///
/// ```ignore
/// let image = MmapImage::open(Path::new("disk.img"))?;
/// let head = image.read_at(0, 512)?;
/// ```
pub struct MmapImage {
    mmap: Option<Mmap>,
    path: PathBuf,
}

impl ImageSource for MmapImage {
    fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(|e| SourceError::not_found(path, e))?;
        let metadata = file
            .metadata()
            .map_err(|e| SourceError::not_found(path, e))?;

        if metadata.is_dir() {
            return Err(SourceError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let mmap = if metadata.len() == 0 {
            None
        } else {
            // SAFETY: the mapping is read-only; the image is treated as
            // immutable for the lifetime of this value.
            let mmap = unsafe { Mmap::map(&file) }.map_err(|e| SourceError::Map {
                path: path.to_path_buf(),
                source: e,
            })?;
            Some(mmap)
        };

        Ok(Self {
            mmap,
            path: path.to_path_buf(),
        })
    }

    fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }
}
