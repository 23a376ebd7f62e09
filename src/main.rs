use anyhow::{Context, Result};
use clap::Parser;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::path::Path;

use sigcarve::presentation::cli::{self, Cli, Commands, output};
use sigcarve::{RecoverFilesUseCase, RecoverOptions, ScanImageUseCase, ScanOptions, SignatureCatalog};

fn main() -> Result<()> {
    let args = Cli::parse();
    cli::init_tracing(args.verbose, args.debug);

    match args.command {
        Commands::Scan {
            image,
            limit,
            json,
            types,
        } => run_scan(&image, limit, json, types.unwrap_or_default(), args.verbose),
        Commands::Recover {
            image,
            output,
            ids,
            only_types,
            limit,
            overwrite,
        } => {
            let options = RecoverOptions {
                ids: ids.map(|ids| ids.into_iter().collect::<HashSet<_>>()),
                only_extensions: only_types.map(|t| t.into_iter().collect::<HashSet<_>>()),
                overwrite,
            };
            run_recover(&image, &output, limit, &options, args.verbose)
        }
        Commands::ListSignatures => {
            println!("{}", output::render_signatures(&SignatureCatalog::builtin()));
            Ok(())
        }
    }
}

fn run_scan(
    image: &Path,
    limit: Option<NonZeroUsize>,
    json: bool,
    types: Vec<String>,
    verbose: bool,
) -> Result<()> {
    let mut catalog = SignatureCatalog::builtin();
    catalog.retain_extensions(&types);

    let use_case = ScanImageUseCase::new(&catalog).context("Failed to prepare signatures")?;
    let report = use_case
        .execute(image, &ScanOptions { limit })
        .with_context(|| format!("Failed to scan {}", image.display()))?;

    if json {
        println!("{}", output::render_scan_json(&report)?);
    } else {
        println!("{}", output::render_scan(&report));
    }
    if verbose {
        eprint!("{}", report.summary());
    }
    Ok(())
}

fn run_recover(
    image: &Path,
    output_dir: &Path,
    limit: Option<NonZeroUsize>,
    options: &RecoverOptions,
    verbose: bool,
) -> Result<()> {
    let catalog = SignatureCatalog::builtin();
    let use_case = ScanImageUseCase::new(&catalog).context("Failed to prepare signatures")?;
    let report = use_case
        .execute(image, &ScanOptions { limit })
        .with_context(|| format!("Failed to scan {}", image.display()))?;

    let result = RecoverFilesUseCase::execute(image, &report.matches, output_dir, options)
        .with_context(|| format!("Failed to recover files into {}", output_dir.display()))?;

    println!("{}", output::render_recovery(&result));
    if verbose {
        eprint!("{}", result.summary());
    }
    Ok(())
}
