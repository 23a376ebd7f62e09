//! Recovery result DTO

use crate::domain::entities::CarvedFile;
use crate::utils::format::human_readable_size;
use std::path::PathBuf;
use std::time::Duration;

/// Result of a recovery operation
#[derive(Debug, Clone)]
pub struct RecoveryResult {
    /// Source image path
    pub source_path: PathBuf,
    /// Output directory
    pub output_dir: PathBuf,
    /// Files written, in match order
    pub written: Vec<CarvedFile>,
    /// Matches whose destination already existed
    pub skipped_existing: usize,
    /// Matches with an empty byte range
    pub skipped_empty: usize,
    pub duration: Duration,
}

impl RecoveryResult {
    pub fn new(source_path: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            source_path,
            output_dir,
            written: Vec::new(),
            skipped_existing: 0,
            skipped_empty: 0,
            duration: Duration::ZERO,
        }
    }

    pub fn files_recovered(&self) -> usize {
        self.written.len()
    }

    pub fn bytes_recovered(&self) -> u64 {
        self.written.iter().map(CarvedFile::size).sum()
    }

    /// Returns a summary string
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Recovery complete: {} files recovered ({}) in {:.2}s\n",
            self.files_recovered(),
            human_readable_size(self.bytes_recovered()),
            self.duration.as_secs_f64()
        );
        if self.skipped_existing > 0 {
            summary.push_str(&format!(
                "{} existing files left untouched\n",
                self.skipped_existing
            ));
        }
        if self.skipped_empty > 0 {
            summary.push_str(&format!(
                "{} matches outside the image skipped\n",
                self.skipped_empty
            ));
        }
        summary
    }
}
