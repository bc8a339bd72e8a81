mod install;
mod manifest;
mod reconcile;
mod scan;
mod utils;

use anyhow::Context;
use clap::Parser;
use install::install_file;
use manifest::load_manifest;
use reconcile::{emit_report, reconcile};
use scan::list_files;
use std::path::{Path, PathBuf};
use tracing::{debug, warn, Level};
use tracing_subscriber::FmtSubscriber;
use utils::{DEFAULT_DESTINATION, MANIFEST_FILE};

/// ROM set checker - verifies files against a SHA-256 manifest and installs
/// the good ones
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// ROM source folder
    #[arg(short, long)]
    source: PathBuf,

    /// ROM destination folder
    #[arg(short, long, default_value = DEFAULT_DESTINATION)]
    destination: PathBuf,

    /// Force overwrite existing files
    #[arg(short, long)]
    force: bool,

    /// Write a "missing.txt" file
    #[arg(short, long)]
    missing: bool,

    /// Output some verbose debugging info
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    println!("Running ROM checker");
    debug!("Looking for ROMs at {}", args.source.display());
    debug!("Storing ROMs at {}", args.destination.display());

    println!("Loading '{}'", MANIFEST_FILE);
    let manifest = load_manifest(Path::new(MANIFEST_FILE))
        .with_context(|| format!("Failed to load '{}'", MANIFEST_FILE))?;

    let files = list_files(&args.source)?;
    println!("Found {} files, start checking ...", files.len());

    let mut nbr_files_copied = 0u64;
    for (i, filename) in files.iter().enumerate() {
        match install_file(
            &args.source,
            &args.destination,
            filename,
            &manifest,
            args.force,
        ) {
            Ok(outcome) => {
                if outcome.copied() {
                    nbr_files_copied += 1;
                }
            }
            Err(err) => warn!("Skipping '{}': {}", filename, err),
        }
        if i % 100 == 0 {
            println!("Checked {} files ...", i);
        }
    }

    // The copy stage is done; derive what is still missing or incorrect.
    let report = reconcile(&manifest, &args.destination);
    emit_report(&report, args.missing).context("Failed to write the missing-file report")?;

    println!("{}", "=".repeat(80));
    println!(
        "(*) Copied '{}' new files from {} to {}",
        nbr_files_copied,
        args.source.display(),
        args.destination.display()
    );

    Ok(())
}
