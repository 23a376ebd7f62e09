//! Scan report DTO

use crate::domain::entities::ScanMatch;
use crate::utils::format::human_readable_size;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// Result of scanning one image
#[derive(Debug, Clone)]
pub struct ScanReport<'c> {
    /// Image that was scanned
    pub source_path: PathBuf,
    /// Image size in bytes
    pub image_size: u64,
    pub duration: Duration,
    /// Matches sorted by offset, ids 1..N
    pub matches: Vec<ScanMatch<'c>>,
}

impl<'c> ScanReport<'c> {
    pub fn total_matches(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Match count per extension
    pub fn type_counts(&self) -> BTreeMap<&'c str, usize> {
        let mut counts = BTreeMap::new();
        for m in &self.matches {
            *counts.entry(m.extension()).or_insert(0) += 1;
        }
        counts
    }

    /// JSON-ready records, one per match
    pub fn records(&self) -> Vec<MatchRecord> {
        self.matches.iter().map(MatchRecord::from).collect()
    }

    /// Returns a summary string
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Scanned {} ({}) in {:.2}s\n",
            self.source_path.display(),
            human_readable_size(self.image_size),
            self.duration.as_secs_f64()
        );
        summary.push_str(&format!("Found {} potential files\n", self.total_matches()));
        for (extension, count) in self.type_counts() {
            summary.push_str(&format!("  - {}: {}\n", extension, count));
        }
        summary
    }
}

/// Serialized form of one match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub id: u64,
    pub offset: u64,
    pub size: u64,
    pub extension: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: Option<String>,
}

impl From<&ScanMatch<'_>> for MatchRecord {
    fn from(m: &ScanMatch<'_>) -> Self {
        let signature = m.signature();
        Self {
            id: m.id(),
            offset: m.offset(),
            size: m.size(),
            extension: signature.extension().to_string(),
            type_name: signature.name().to_string(),
            description: signature.description().map(str::to_string),
        }
    }
}
