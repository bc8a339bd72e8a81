use std::fmt;

/// One line of the missing-file report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEntry {
    /// The manifest names this file but the destination does not have it
    Missing(String),
    /// The destination file exists but its content digest is wrong
    Mismatch {
        filename: String,
        expected: String,
        found: String,
    },
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportEntry::Missing(filename) => write!(f, "{}", filename),
            ReportEntry::Mismatch {
                filename,
                expected,
                found,
            } => write!(
                f,
                "{} exist with unexpected hash, expect: {} found: {}",
                filename, expected, found
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_displays_bare_filename() {
        let entry = ReportEntry::Missing("a.zip".to_string());
        assert_eq!(entry.to_string(), "a.zip");
    }

    #[test]
    fn test_mismatch_displays_both_digests() {
        let entry = ReportEntry::Mismatch {
            filename: "a.zip".to_string(),
            expected: "aaa".to_string(),
            found: "bbb".to_string(),
        };
        assert_eq!(
            entry.to_string(),
            "a.zip exist with unexpected hash, expect: aaa found: bbb"
        );
    }
}
