pub mod install;
pub mod manifest;
pub mod reconcile;
pub mod scan;
pub mod utils;

// Re-export commonly used types
pub use install::{install_file, CopyOutcome, InstallError};
pub use manifest::{load_manifest, Manifest, ManifestEntry, ManifestError};
pub use reconcile::{emit_report, reconcile, write_report, ReportEntry};
pub use scan::{list_files, ScanError};
pub use utils::{compute_hash, hash_file};
