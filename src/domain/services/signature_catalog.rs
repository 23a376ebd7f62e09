//! Signature catalog
//!
//! The ordered list of signatures a scan searches for. The built-in catalog
//! is compiled in; extending it is a code change.

use crate::domain::entities::{Signature, SignatureError};

const MIB: u64 = 1024 * 1024;

/// Built-in signatures, in scan order
pub static BUILTIN_SIGNATURES: [Signature; 8] = [
    Signature::builtin(
        "JPEG image",
        "jpg",
        b"\xFF\xD8\xFF",
        Some(b"\xFF\xD9"),
        25 * MIB,
        Some("Common digital photo format"),
    ),
    Signature::builtin(
        "Portable Network Graphics",
        "png",
        b"\x89PNG\r\n\x1a\n",
        Some(b"IEND\xAEB`\x82"),
        20 * MIB,
        None,
    ),
    Signature::builtin("PDF document", "pdf", b"%PDF-", Some(b"%%EOF"), 40 * MIB, None),
    Signature::builtin(
        "ZIP archive",
        "zip",
        b"PK\x03\x04",
        Some(b"PK\x05\x06"),
        100 * MIB,
        None,
    ),
    Signature::builtin("MP3 audio", "mp3", b"ID3", None, 20 * MIB, None),
    Signature::builtin(
        "SQLite database",
        "sqlite",
        b"SQLite format 3\x00",
        None,
        50 * MIB,
        None,
    ),
    Signature::builtin("GIF image", "gif", b"GIF8", Some(b";"), 10 * MIB, None),
    Signature::builtin("Portable Executable", "exe", b"MZ", None, 50 * MIB, None),
];

/// Ordered collection of signatures
///
/// Catalog order decides discovery order during a scan, which only shows in
/// the output through tie order and the match limit.
///
/// # Example
///
/// ```
/// use sigcarve::domain::services::SignatureCatalog;
///
/// let catalog = SignatureCatalog::builtin();
/// assert_eq!(catalog.len(), 8);
/// assert_eq!(catalog.find_by_extension("jpg").unwrap().name(), "JPEG image");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureCatalog {
    signatures: Vec<Signature>,
}

impl SignatureCatalog {
    /// Creates a catalog from signatures, validating each one
    pub fn new(signatures: Vec<Signature>) -> Result<Self, SignatureError> {
        for signature in &signatures {
            signature.validate()?;
        }
        Ok(Self { signatures })
    }

    /// The compiled-in catalog
    pub fn builtin() -> Self {
        Self {
            signatures: BUILTIN_SIGNATURES.to_vec(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Signature> {
        self.signatures.iter()
    }

    pub fn as_slice(&self) -> &[Signature] {
        &self.signatures
    }

    pub fn get(&self, index: usize) -> Option<&Signature> {
        self.signatures.get(index)
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// First signature with the given extension (case-insensitive)
    pub fn find_by_extension(&self, extension: &str) -> Option<&Signature> {
        self.signatures
            .iter()
            .find(|s| s.extension().eq_ignore_ascii_case(extension))
    }

    /// Keeps only signatures whose extension is listed, preserving order
    ///
    /// An empty list keeps everything.
    pub fn retain_extensions<S: AsRef<str>>(&mut self, extensions: &[S]) {
        if extensions.is_empty() {
            return;
        }
        self.signatures.retain(|s| {
            extensions
                .iter()
                .any(|e| s.extension().eq_ignore_ascii_case(e.as_ref()))
        });
    }
}

impl<'a> IntoIterator for &'a SignatureCatalog {
    type Item = &'a Signature;
    type IntoIter = std::slice::Iter<'a, Signature>;

    fn into_iter(self) -> Self::IntoIter {
        self.signatures.iter()
    }
}
