//! Scan engine
//!
//! Finds every signature header in an image, resolves each hit to an
//! extent, and returns the matches ordered by offset with ids 1..N.
//!
//! All headers are located in a single pass with an Aho-Corasick automaton
//! (O(n + m + z) for an image of n bytes, m pattern bytes and z hits).
//! Hits are then walked signature by signature, which is the discovery
//! order the match limit counts in.

use crate::domain::entities::ScanMatch;
use crate::domain::repositories::ImageSource;
use crate::domain::services::extent::{self, FooterCursor};
use crate::domain::services::SignatureCatalog;
use aho_corasick::AhoCorasick;
use memchr::memmem::Finder;
use std::num::NonZeroUsize;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur while preparing a scan
#[derive(Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    Source(#[from] crate::domain::repositories::SourceError),

    #[error("Failed to build header matcher: {0}")]
    Matcher(#[from] aho_corasick::BuildError),
}

/// Signature scan engine bound to one catalog
///
/// The engine holds only read-only state, so one instance can scan any
/// number of images, including concurrently.
///
/// # Example
///
/// ```
/// use sigcarve::domain::services::{ScanEngine, SignatureCatalog};
///
/// let catalog = SignatureCatalog::builtin();
/// let engine = ScanEngine::new(&catalog).unwrap();
/// let image = b"garbage\xFF\xD8\xFFJPEGDATA\xFF\xD9";
/// let matches = engine.scan(image, None);
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].offset(), 7);
/// assert_eq!(matches[0].size(), 13);
/// ```
pub struct ScanEngine<'c> {
    catalog: &'c SignatureCatalog,
    /// Header automaton; pattern index equals catalog index
    header_matcher: Option<AhoCorasick>,
    /// Footer finders, parallel to the catalog
    footer_finders: Vec<Option<Finder<'static>>>,
}

impl<'c> ScanEngine<'c> {
    /// Builds the header automaton and footer finders for `catalog`
    pub fn new(catalog: &'c SignatureCatalog) -> Result<Self, ScanError> {
        let header_matcher = if catalog.is_empty() {
            None
        } else {
            Some(AhoCorasick::new(catalog.iter().map(|s| s.header()))?)
        };

        let footer_finders = catalog
            .iter()
            .map(|s| s.footer().map(|f| Finder::new(f).into_owned()))
            .collect();

        Ok(Self {
            catalog,
            header_matcher,
            footer_finders,
        })
    }

    pub fn catalog(&self) -> &'c SignatureCatalog {
        self.catalog
    }

    /// Scans an opened image source
    pub fn scan_source<S: ImageSource + ?Sized>(
        &self,
        source: &S,
        limit: Option<NonZeroUsize>,
    ) -> Vec<ScanMatch<'c>> {
        self.scan(source.as_bytes(), limit)
    }

    /// Scans `image` and returns matches sorted by offset, ids 1..N
    ///
    /// With a `limit`, collection stops as soon as `limit` matches exist in
    /// discovery order: every hit of the first signature, then the second,
    /// and so on. The result is sorted afterwards, so a low limit favours
    /// signatures listed early in the catalog over matches at low offsets.
    pub fn scan(&self, image: &[u8], limit: Option<NonZeroUsize>) -> Vec<ScanMatch<'c>> {
        let Some(matcher) = &self.header_matcher else {
            return Vec::new();
        };

        let headers = self.locate_headers(matcher, image, limit);
        let mut matches: Vec<ScanMatch<'c>> = Vec::new();

        'signatures: for (index, offsets) in headers.into_iter().enumerate() {
            let signature = &self.catalog.as_slice()[index];
            let mut footer = self.footer_finders[index].as_ref().map(FooterCursor::new);

            for offset in offsets {
                let search_from = offset + signature.header().len();
                let footer_hit = footer.as_mut().and_then(|cursor| {
                    cursor
                        .next_from(image, search_from)
                        .map(|hit| (hit, cursor.footer_len()))
                });
                let resolved =
                    extent::resolve_end(image.len(), search_from, footer_hit, signature.max_size());

                debug!(
                    offset,
                    size = resolved.end - offset,
                    extension = signature.extension(),
                    kind = ?resolved.kind,
                    "signature match"
                );

                let id = matches.len() as u64 + 1;
                matches.push(ScanMatch::new(
                    id,
                    offset as u64,
                    (resolved.end - offset) as u64,
                    signature,
                ));

                if limit.is_some_and(|l| matches.len() >= l.get()) {
                    debug!(limit = matches.len(), "match limit reached");
                    break 'signatures;
                }
            }
        }

        // Stable: equal offsets keep discovery order
        matches.sort_by_key(|m| m.offset());
        for (index, m) in matches.iter_mut().enumerate() {
            m.set_id(index as u64 + 1);
        }

        matches
    }

    /// Header offsets per signature, non-overlapping within each signature
    ///
    /// A signature's next hit must start at or past the end of its previous
    /// hit's header, which is what resuming a plain substring search just
    /// past each hit would produce.
    fn locate_headers(
        &self,
        matcher: &AhoCorasick,
        image: &[u8],
        limit: Option<NonZeroUsize>,
    ) -> Vec<Vec<usize>> {
        let signatures = self.catalog.as_slice();
        let mut headers: Vec<Vec<usize>> = vec![Vec::new(); signatures.len()];
        let mut resume_at: Vec<usize> = vec![0; signatures.len()];
        let cap = limit.map_or(usize::MAX, NonZeroUsize::get);

        // Overlapping mode reports every pattern at every position; for a
        // fixed-length pattern that is ascending start order.
        for hit in matcher.find_overlapping_iter(image) {
            let index = hit.pattern().as_usize();
            let start = hit.start();
            if start < resume_at[index] || headers[index].len() >= cap {
                continue;
            }
            trace!(start, pattern = index, "header hit");
            headers[index].push(start);
            resume_at[index] = hit.end();

            // The first signature alone fills the limit; nothing later can
            // enter the result.
            if headers[0].len() >= cap {
                debug!(start, "limit reached by first signature, stopping header pass");
                break;
            }
        }

        headers
    }
}
