//! Domain services
//!
//! The scan engine, extent resolution, the signature catalog and the carver.

mod carver;
pub mod extent;
mod scan_engine;
mod signature_catalog;

pub use carver::{CarveError, CarveSummary, Carver, RecoverOptions};
pub use scan_engine::{ScanEngine, ScanError};
pub use signature_catalog::{BUILTIN_SIGNATURES, SignatureCatalog};
