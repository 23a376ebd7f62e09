//! Carver
//!
//! Copies each selected match's byte range out of the image and hands it
//! to a file writer.

use crate::domain::entities::{CarvedFile, ScanMatch};
use crate::domain::repositories::{
    CarvedFileWriter, FileWriterError, ImageSource, SourceError, WriteOptions, WriteOutcome,
};
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during carving
#[derive(Error, Debug)]
pub enum CarveError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Writer(#[from] FileWriterError),
}

/// Which matches to carve and how
#[derive(Debug, Clone, Default)]
pub struct RecoverOptions {
    /// Only carve matches with these ids
    pub ids: Option<HashSet<u64>>,
    /// Only carve matches with these extensions (case-insensitive)
    pub only_extensions: Option<HashSet<String>>,
    /// Replace existing destination files
    pub overwrite: bool,
}

impl RecoverOptions {
    pub fn with_ids(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.ids = Some(ids.into_iter().collect());
        self
    }

    pub fn with_extensions<S: Into<String>>(mut self, extensions: impl IntoIterator<Item = S>) -> Self {
        self.only_extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Whether `m` passes the id and extension filters
    pub fn selects(&self, m: &ScanMatch<'_>) -> bool {
        if let Some(ids) = &self.ids {
            if !ids.contains(&m.id()) {
                return false;
            }
        }
        if let Some(extensions) = &self.only_extensions {
            if !extensions
                .iter()
                .any(|e| e.eq_ignore_ascii_case(m.extension()))
            {
                return false;
            }
        }
        true
    }
}

/// Per-run tally of what the carver did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarveSummary {
    pub written: Vec<CarvedFile>,
    /// Destinations that already existed
    pub skipped_existing: usize,
    /// Matches whose byte range was empty
    pub skipped_empty: usize,
}

/// Carves matches out of an image through a writer
pub struct Carver<W: CarvedFileWriter> {
    writer: W,
}

impl<W: CarvedFileWriter> Carver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Writes every selected match, in match order
    ///
    /// Ranges running past the end of the image are clamped; a match that
    /// starts past the end is counted in `skipped_empty`. Existing
    /// destinations are left alone unless `options.overwrite` is set.
    pub fn carve<S: ImageSource + ?Sized>(
        &self,
        source: &S,
        matches: &[ScanMatch<'_>],
        options: &RecoverOptions,
    ) -> Result<CarveSummary, CarveError> {
        let write_options = WriteOptions {
            overwrite: options.overwrite,
        };
        let mut summary = CarveSummary::default();

        let image_size = source.size();

        for m in matches.iter().filter(|m| options.selects(m)) {
            // Offsets past the end read as an empty range
            let data = source.read_at(m.offset().min(image_size), m.size())?;
            if data.is_empty() {
                debug!(id = m.id(), offset = m.offset(), image_size, "empty range, skipping");
                summary.skipped_empty += 1;
                continue;
            }

            match self
                .writer
                .write(m.id(), &m.filename(), data, &write_options)?
            {
                WriteOutcome::Written(file) => {
                    debug!(
                        id = m.id(),
                        path = %file.path().display(),
                        size = file.size(),
                        "carved match"
                    );
                    summary.written.push(file);
                }
                WriteOutcome::Skipped(path) => {
                    warn!(id = m.id(), path = %path.display(), "destination exists, skipping");
                    summary.skipped_existing += 1;
                }
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Signature;

    #[test]
    fn test_selects_by_id_and_extension() {
        let jpg = Signature::new("JPEG image", "jpg", b"\xFF\xD8\xFF".to_vec(), 64).unwrap();
        let pdf = Signature::new("PDF document", "pdf", b"%PDF-".to_vec(), 64).unwrap();
        let a = ScanMatch::new(1, 7, 13, &jpg);
        let b = ScanMatch::new(2, 20, 13, &pdf);

        let all = RecoverOptions::default();
        assert!(all.selects(&a) && all.selects(&b));

        let by_id = RecoverOptions::default().with_ids([2]);
        assert!(!by_id.selects(&a));
        assert!(by_id.selects(&b));

        let by_ext = RecoverOptions::default().with_extensions(["jpg"]);
        assert!(by_ext.selects(&a));
        assert!(!by_ext.selects(&b));

        let both = RecoverOptions::default().with_ids([1]).with_extensions(["pdf"]);
        assert!(!both.selects(&a) && !both.selects(&b));
    }

    #[test]
    fn test_extension_filter_ignores_case() {
        let jpg = Signature::new("JPEG image", "jpg", b"\xFF\xD8\xFF".to_vec(), 64).unwrap();
        let m = ScanMatch::new(1, 7, 13, &jpg);

        assert!(RecoverOptions::default().with_extensions(["JPG"]).selects(&m));
        assert!(RecoverOptions::default().with_extensions(["Jpg"]).selects(&m));
        assert!(!RecoverOptions::default().with_extensions(["JPEG"]).selects(&m));
    }
}
