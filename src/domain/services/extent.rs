//! Extent resolution
//!
//! Decides where a matched object ends once its header has been found.
//! A footer hit always wins, even past the size cap; the cap only applies
//! when there is no footer to find. The end never passes the image.

use memchr::memmem::Finder;

/// How an extent end was determined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtentKind {
    /// Closed by the signature's footer
    Footer,
    /// No footer; capped at `max_size` past the header
    SizeCap,
    /// No footer; the cap ran past the end of the image
    Truncated,
}

/// A resolved extent end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtentEnd {
    pub end: usize,
    pub kind: ExtentKind,
}

/// Computes the extent end for a header ending at `search_from`
///
/// `footer_hit` is the start of the first footer at or after `search_from`.
pub fn resolve_end(
    image_len: usize,
    search_from: usize,
    footer_hit: Option<(usize, usize)>,
    max_size: u64,
) -> ExtentEnd {
    if let Some((position, footer_len)) = footer_hit {
        return ExtentEnd {
            end: position.saturating_add(footer_len).min(image_len),
            kind: ExtentKind::Footer,
        };
    }

    let cap = usize::try_from(max_size).unwrap_or(usize::MAX);
    let capped = search_from.saturating_add(cap);
    if capped > image_len {
        ExtentEnd {
            end: image_len,
            kind: ExtentKind::Truncated,
        }
    } else {
        ExtentEnd {
            end: capped,
            kind: ExtentKind::SizeCap,
        }
    }
}

/// Incremental footer search for one signature
///
/// Headers of one signature are visited in ascending order, so the search
/// start only moves forward. The cursor remembers the last footer it found
/// and the point past which no footer exists, which keeps the total work
/// per signature linear in the image size.
pub struct FooterCursor<'f> {
    finder: &'f Finder<'static>,
    last_hit: Option<usize>,
    exhausted_from: Option<usize>,
}

impl<'f> FooterCursor<'f> {
    pub fn new(finder: &'f Finder<'static>) -> Self {
        Self {
            finder,
            last_hit: None,
            exhausted_from: None,
        }
    }

    pub fn footer_len(&self) -> usize {
        self.finder.needle().len()
    }

    /// First footer occurrence at or after `from`
    ///
    /// `from` must not decrease between calls.
    pub fn next_from(&mut self, haystack: &[u8], from: usize) -> Option<usize> {
        if let Some(hit) = self.last_hit {
            if hit >= from {
                return Some(hit);
            }
        }
        if let Some(exhausted) = self.exhausted_from {
            if from >= exhausted {
                return None;
            }
        }

        let from = from.min(haystack.len());
        match self.finder.find(&haystack[from..]) {
            Some(relative) => {
                let hit = from + relative;
                self.last_hit = Some(hit);
                Some(hit)
            }
            None => {
                self.exhausted_from = Some(from);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_wins_over_cap() {
        let end = resolve_end(1000, 3, Some((500, 2)), 10);
        assert_eq!(
            end,
            ExtentEnd {
                end: 502,
                kind: ExtentKind::Footer
            }
        );
    }

    #[test]
    fn test_cap_without_footer() {
        let end = resolve_end(1000, 3, None, 10);
        assert_eq!(end.end, 13);
        assert_eq!(end.kind, ExtentKind::SizeCap);
    }

    #[test]
    fn test_cap_clamped_to_image() {
        let end = resolve_end(33, 25, None, 40 * 1024 * 1024);
        assert_eq!(end.end, 33);
        assert_eq!(end.kind, ExtentKind::Truncated);
    }

    #[test]
    fn test_huge_cap_does_not_overflow() {
        let end = resolve_end(10, 5, None, u64::MAX);
        assert_eq!(end.end, 10);
    }

    #[test]
    fn test_cursor_reuses_last_hit() {
        let finder = Finder::new(b"END").into_owned();
        let mut cursor = FooterCursor::new(&finder);
        let data = b"aaENDbbEND";

        assert_eq!(cursor.next_from(data, 0), Some(2));
        assert_eq!(cursor.next_from(data, 2), Some(2));
        assert_eq!(cursor.next_from(data, 3), Some(7));
        assert_eq!(cursor.next_from(data, 8), None);
        assert_eq!(cursor.next_from(data, 9), None);
        assert_eq!(cursor.footer_len(), 3);
    }

    #[test]
    fn test_cursor_at_end_of_haystack() {
        let finder = Finder::new(b"X").into_owned();
        let mut cursor = FooterCursor::new(&finder);
        assert_eq!(cursor.next_from(b"abc", 3), None);
    }
}
