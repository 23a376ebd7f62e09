//! Signature-based file carving.
//!
//! Scans raw images for known file headers, resolves each hit to an extent
//! (footer, size cap, or end of image) and carves the extents into files.
//!
//! ```
//! use sigcarve::{ScanEngine, SignatureCatalog};
//!
//! let catalog = SignatureCatalog::builtin();
//! let engine = ScanEngine::new(&catalog).unwrap();
//!
//! let mut image = b"garbage".to_vec();
//! image.extend_from_slice(b"\xFF\xD8\xFFJPEGDATA\xFF\xD9");
//! image.extend_from_slice(b"%PDF-1.7\nbody");
//!
//! let matches = engine.scan(&image, None);
//! let extensions: Vec<&str> = matches.iter().map(|m| m.extension()).collect();
//! assert_eq!(extensions, ["jpg", "pdf"]);
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod utils;

pub use application::dto::{MatchRecord, RecoveryResult, ScanOptions, ScanReport};
pub use application::{RecoverFilesUseCase, ScanImageUseCase};
pub use domain::entities::{CarvedFile, ScanMatch, Signature, SignatureError};
pub use domain::repositories::{ImageSource, SourceError};
pub use domain::services::{CarveError, RecoverOptions, ScanEngine, ScanError, SignatureCatalog};
pub use infrastructure::image_source::{MemoryImage, MmapImage};
