//! Data Transfer Objects

mod recovery_result;
mod scan_options;
mod scan_report;

pub use recovery_result::RecoveryResult;
pub use scan_options::ScanOptions;
pub use scan_report::{MatchRecord, ScanReport};
