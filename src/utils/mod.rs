mod hash;

pub use hash::{compute_hash, hash_file};

/// The fixed name of the manifest file, resolved against the working directory
pub const MANIFEST_FILE: &str = "roms.sha256";

/// The fixed name of the missing-file report
pub const MISSING_REPORT_FILE: &str = "missing.txt";

/// Default destination folder for verified ROMs
pub const DEFAULT_DESTINATION: &str = "Roms";
