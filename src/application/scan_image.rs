//! Scan image use case
//!
//! Opens an image, runs the scan engine over it and releases the image
//! before returning.

use crate::application::dto::{ScanOptions, ScanReport};
use crate::domain::repositories::ImageSource;
use crate::domain::services::{ScanEngine, ScanError, SignatureCatalog};
use crate::infrastructure::image_source::MmapImage;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Scan image use case
///
/// Scans a raw image for every signature in the catalog.
pub struct ScanImageUseCase<'c> {
    engine: ScanEngine<'c>,
}

impl<'c> ScanImageUseCase<'c> {
    /// Creates the use case for a catalog
    pub fn new(catalog: &'c SignatureCatalog) -> Result<Self, ScanError> {
        Ok(Self {
            engine: ScanEngine::new(catalog)?,
        })
    }

    pub fn engine(&self) -> &ScanEngine<'c> {
        &self.engine
    }

    /// Memory-maps the image at `path` and scans it
    pub fn execute(&self, path: &Path, options: &ScanOptions) -> Result<ScanReport<'c>, ScanError> {
        let image = MmapImage::open(path)?;
        self.execute_on(&image, options)
    }

    /// Scans an already opened image source
    pub fn execute_on<S: ImageSource + ?Sized>(
        &self,
        image: &S,
        options: &ScanOptions,
    ) -> Result<ScanReport<'c>, ScanError> {
        let start_time = Instant::now();
        let image_size = image.size();

        info!(
            path = %image.path().display(),
            size = image_size,
            signatures = self.engine.catalog().len(),
            "starting scan"
        );

        let matches = self.engine.scan_source(image, options.limit);
        let duration = start_time.elapsed();

        info!(
            matches = matches.len(),
            elapsed_secs = duration.as_secs_f64(),
            "scan complete"
        );

        Ok(ScanReport {
            source_path: image.path().to_path_buf(),
            image_size,
            duration,
            matches,
        })
    }
}
