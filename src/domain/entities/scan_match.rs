//! Scan match entity
//!
//! A match is one resolved extent: where a header was found, how far the
//! object is believed to extend, and which signature produced it.

use super::signature::Signature;
use crate::utils::format::{MatchRow, format_offset_decimal};

/// A signature hit with its resolved extent
///
/// The signature is borrowed from the catalog the scan ran against; the
/// catalog outlives every match it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanMatch<'c> {
    id: u64,
    offset: u64,
    size: u64,
    signature: &'c Signature,
}

impl<'c> ScanMatch<'c> {
    /// Creates a match. Ids are normally assigned by the scan engine.
    pub fn new(id: u64, offset: u64, size: u64, signature: &'c Signature) -> Self {
        Self {
            id,
            offset,
            size,
            signature,
        }
    }

    /// 1-based identifier, in ascending offset order within one result set
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Offset of the header's first byte within the image
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Extent length in bytes
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Offset one past the last byte of the extent
    pub fn end(&self) -> u64 {
        self.offset + self.size
    }

    pub fn signature(&self) -> &'c Signature {
        self.signature
    }

    pub fn extension(&self) -> &'c str {
        self.signature.extension()
    }

    /// Output filename: 12-digit zero-padded decimal offset plus extension
    pub fn filename(&self) -> String {
        format!(
            "{}.{}",
            format_offset_decimal(self.offset),
            self.signature.extension()
        )
    }

    /// Display row used by the table renderer
    pub fn to_row(&self) -> MatchRow {
        MatchRow::from_match(self)
    }

    pub(crate) fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf() -> Signature {
        Signature::new("PDF document", "pdf", b"%PDF-".to_vec(), 1024).unwrap()
    }

    #[test]
    fn test_filename_is_zero_padded() {
        let sig = pdf();
        let m = ScanMatch::new(1, 20, 13, &sig);
        assert_eq!(m.filename(), "000000000020.pdf");
    }

    #[test]
    fn test_end() {
        let sig = pdf();
        let m = ScanMatch::new(3, 100, 28, &sig);
        assert_eq!(m.end(), 128);
        assert_eq!(m.extension(), "pdf");
    }
}
