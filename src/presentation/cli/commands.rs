//! CLI commands using clap

use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// sigcarve - signature-based file carver
///
/// Scans raw disk images, memory dumps or arbitrary blobs for known file
/// signatures and carves the matched regions into standalone files.
#[derive(Parser, Debug)]
#[command(name = "sigcarve")]
#[command(version)]
#[command(about = "Scan raw images for file signatures and carve them out", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan an image for known signatures
    Scan {
        /// Path to the disk image to scan
        image: PathBuf,

        /// Maximum number of matches to report
        #[arg(long)]
        limit: Option<NonZeroUsize>,

        /// Emit machine readable JSON output
        #[arg(long)]
        json: bool,

        /// Only search for these extensions (e.g. jpg,png)
        #[arg(short = 't', long, value_delimiter = ',')]
        types: Option<Vec<String>>,
    },

    /// Recover carved files from an image
    Recover {
        /// Path to the disk image to scan
        image: PathBuf,

        /// Directory where recovered files are written
        output: PathBuf,

        /// Recover only the matches with the given identifiers
        #[arg(long, num_args = 1..)]
        ids: Option<Vec<u64>>,

        /// Recover only files with the given extensions (e.g. jpg png)
        #[arg(long, num_args = 1..)]
        only_types: Option<Vec<String>>,

        /// Maximum number of matches to consider
        #[arg(long)]
        limit: Option<NonZeroUsize>,

        /// Overwrite existing files in the output directory
        #[arg(long)]
        overwrite: bool,
    },

    /// List the compiled-in signatures
    ListSignatures,
}
