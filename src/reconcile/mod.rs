mod report;

pub use report::ReportEntry;

use crate::manifest::Manifest;
use crate::utils::{hash_file, MISSING_REPORT_FILE};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// Compare the destination folder against the full manifest.
///
/// This is a fresh derivation, independent of whatever the copy phase did,
/// so files that were already in place but stale or corrupt are caught too.
/// Entries come back in manifest order. A destination file that exists but
/// cannot be read is reported as missing, with a warning.
pub fn reconcile(manifest: &Manifest, dest_dir: &Path) -> Vec<ReportEntry> {
    let mut report = Vec::new();

    for entry in manifest.iter() {
        let dest_path = dest_dir.join(&entry.filename);
        if !dest_path.exists() {
            report.push(ReportEntry::Missing(entry.filename.clone()));
            continue;
        }

        match hash_file(&dest_path) {
            Ok(found) if found == entry.digest => {}
            Ok(found) => report.push(ReportEntry::Mismatch {
                filename: entry.filename.clone(),
                expected: entry.digest.clone(),
                found,
            }),
            Err(err) => {
                warn!(
                    "Could not read '{}' for verification: {}",
                    dest_path.display(),
                    err
                );
                report.push(ReportEntry::Missing(entry.filename.clone()));
            }
        }
    }

    report
}

/// Print the report to stdout, one entry per line, and optionally write the
/// same lines to the fixed-name `missing.txt` in the working directory.
pub fn emit_report(report: &[ReportEntry], write_to_file: bool) -> Result<(), std::io::Error> {
    if write_to_file {
        write_report(report, Path::new(MISSING_REPORT_FILE))?;
    }

    for entry in report {
        println!("{}", entry);
    }

    Ok(())
}

/// Write the report lines, newline-terminated, truncating any prior content
pub fn write_report(report: &[ReportEntry], path: &Path) -> Result<(), std::io::Error> {
    let mut file = File::create(path)?;
    for entry in report {
        writeln!(file, "{}", entry)?;
    }
    Ok(())
}
