use std::collections::HashMap;

/// A single known-good record from the manifest file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub filename: String,
    pub digest: String,
}

/// The authoritative mapping of filename to expected SHA-256 digest.
///
/// Entries keep the order they first appeared in the manifest file. A
/// duplicate filename replaces the digest in place, so the last entry wins
/// without moving the file to the end of the iteration order.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
    index: HashMap<String, usize>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing the digest in place if the filename is
    /// already known
    pub fn insert(&mut self, filename: String, digest: String) {
        match self.index.get(&filename) {
            Some(&pos) => self.entries[pos].digest = digest,
            None => {
                self.index.insert(filename.clone(), self.entries.len());
                self.entries.push(ManifestEntry { filename, digest });
            }
        }
    }

    /// Look up the expected digest for a filename
    pub fn get(&self, filename: &str) -> Option<&str> {
        self.index
            .get(filename)
            .map(|&pos| self.entries[pos].digest.as_str())
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.index.contains_key(filename)
    }

    /// Iterate entries in manifest order
    pub fn iter(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
