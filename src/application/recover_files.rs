//! Recover files use case
//!
//! Carves a set of scan matches out of an image into an output directory.

use crate::application::dto::RecoveryResult;
use crate::domain::entities::ScanMatch;
use crate::domain::repositories::{CarvedFileWriter, ImageSource};
use crate::domain::services::{CarveError, Carver, RecoverOptions};
use crate::infrastructure::image_source::MmapImage;
use crate::infrastructure::persistence::LocalFileWriter;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Recover files use case
pub struct RecoverFilesUseCase;

impl RecoverFilesUseCase {
    /// Opens the image and writes the selected matches into `output_dir`
    ///
    /// The image must exist before the output directory is touched.
    pub fn execute(
        image_path: &Path,
        matches: &[ScanMatch<'_>],
        output_dir: &Path,
        options: &RecoverOptions,
    ) -> Result<RecoveryResult, CarveError> {
        let image = MmapImage::open(image_path)?;
        let writer = LocalFileWriter::new(output_dir)?;
        Self::execute_with(&image, matches, writer, options)
    }

    /// Carves from an opened image through any writer
    pub fn execute_with<S, W>(
        image: &S,
        matches: &[ScanMatch<'_>],
        writer: W,
        options: &RecoverOptions,
    ) -> Result<RecoveryResult, CarveError>
    where
        S: ImageSource + ?Sized,
        W: CarvedFileWriter,
    {
        let start_time = Instant::now();
        let mut result = RecoveryResult::new(
            image.path().to_path_buf(),
            writer.output_dir().to_path_buf(),
        );

        info!(
            candidates = matches.len(),
            output = %writer.output_dir().display(),
            "starting recovery"
        );

        let carver = Carver::new(writer);
        let summary = carver.carve(image, matches, options)?;

        result.written = summary.written;
        result.skipped_existing = summary.skipped_existing;
        result.skipped_empty = summary.skipped_empty;
        result.duration = start_time.elapsed();

        info!(
            written = result.files_recovered(),
            bytes = carver.writer().bytes_written(),
            skipped = result.skipped_existing,
            "recovery complete"
        );

        Ok(result)
    }
}
