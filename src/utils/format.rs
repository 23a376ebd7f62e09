//! Size and offset formatting for reports

use crate::domain::entities::ScanMatch;

const SIZE_UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
const LARGEST_UNIT: &str = "TiB";

/// Formats a byte count with 1024-based units and one decimal place
///
/// `13` becomes `"13.0 B"`, `1536` becomes `"1.5 KiB"`. Values past the
/// GiB range stay in TiB.
pub fn human_readable_size(size: u64) -> String {
    let mut value = size as f64;
    for unit in SIZE_UNITS {
        if value < 1024.0 {
            return format!("{:.1} {}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.1} {}", value, LARGEST_UNIT)
}

/// `0x` followed by at least eight uppercase hex digits
pub fn format_offset_hex(offset: u64) -> String {
    format!("0x{:08X}", offset)
}

/// Twelve-digit zero-padded decimal, used as the carved filename stem
pub fn format_offset_decimal(offset: u64) -> String {
    format!("{:012}", offset)
}

/// Display row for one match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRow {
    pub id: String,
    pub offset: String,
    pub extension: String,
    pub size: String,
    pub description: String,
}

impl MatchRow {
    pub fn from_match(m: &ScanMatch<'_>) -> Self {
        Self {
            id: m.id().to_string(),
            offset: format_offset_hex(m.offset()),
            extension: m.extension().to_string(),
            size: human_readable_size(m.size()),
            description: m.signature().label().to_string(),
        }
    }

    /// Cells in column order: ID, Offset, Type, Size, Description
    pub fn cells(&self) -> [&str; 5] {
        [
            self.id.as_str(),
            self.offset.as_str(),
            self.extension.as_str(),
            self.size.as_str(),
            self.description.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Signature;

    #[test]
    fn test_human_readable_size() {
        assert_eq!(human_readable_size(0), "0.0 B");
        assert_eq!(human_readable_size(13), "13.0 B");
        assert_eq!(human_readable_size(1023), "1023.0 B");
        assert_eq!(human_readable_size(1024), "1.0 KiB");
        assert_eq!(human_readable_size(1536), "1.5 KiB");
        assert_eq!(human_readable_size(25 * 1024 * 1024), "25.0 MiB");
        assert_eq!(human_readable_size(3 * 1024 * 1024 * 1024), "3.0 GiB");
        assert_eq!(human_readable_size(2 * 1024u64.pow(4)), "2.0 TiB");
        assert_eq!(human_readable_size(4096 * 1024u64.pow(4)), "4096.0 TiB");
    }

    #[test]
    fn test_offsets() {
        assert_eq!(format_offset_hex(7), "0x00000007");
        assert_eq!(format_offset_hex(0xDEADBEEF), "0xDEADBEEF");
        assert_eq!(format_offset_hex(0x1_0000_0000), "0x100000000");
        assert_eq!(format_offset_decimal(7), "000000000007");
    }

    #[test]
    fn test_row_uses_description_then_name() {
        let described = Signature::new("JPEG image", "jpg", b"\xFF\xD8\xFF".to_vec(), 64)
            .unwrap()
            .with_description("Common digital photo format");
        let row = ScanMatch::new(1, 7, 13, &described).to_row();
        assert_eq!(
            row.cells(),
            ["1", "0x00000007", "jpg", "13.0 B", "Common digital photo format"]
        );

        let bare = Signature::new("PDF document", "pdf", b"%PDF-".to_vec(), 64).unwrap();
        let row = ScanMatch::new(2, 20, 13, &bare).to_row();
        assert_eq!(row.description, "PDF document");
    }
}
