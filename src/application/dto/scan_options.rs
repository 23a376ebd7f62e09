//! Scan options DTO

use std::num::NonZeroUsize;

/// Options for scanning an image
///
/// Restricting the scan to some file types is done on the catalog itself,
/// see `SignatureCatalog::retain_extensions`.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Stop after this many matches, counted in discovery order
    pub limit: Option<NonZeroUsize>,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the match limit; zero means no limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = NonZeroUsize::new(limit);
        self
    }
}
