//! File identity used as the cache key.
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use sha2::{Digest, Sha256};

use crate::error::Result;

/// Identity of one load request: which file, in which version, with which
/// row limit.
///
/// Replacing or touching the database changes `size` or `modified_ns`, so
/// stale entries are never hit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    pub path: PathBuf,
    pub size: u64,
    pub modified_ns: u128,
    pub limit: Option<usize>,
}

impl Fingerprint {
    /// Fingerprints `path` as it is on disk right now.
    pub fn of(path: &Path, limit: Option<usize>) -> Result<Self> {
        let path = path.canonicalize()?;
        let metadata = path.metadata()?;
        let modified_ns = metadata
            .modified()?
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or_default();

        Ok(Self {
            path,
            size: metadata.len(),
            modified_ns,
            limit,
        })
    }

    /// Short hex digest for log lines.
    ///
    /// Returns the first 8 bytes of a SHA-256 over every field.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.path.to_string_lossy().as_bytes());
        hasher.update(self.size.to_le_bytes());
        hasher.update(self.modified_ns.to_le_bytes());
        match self.limit {
            Some(limit) => {
                hasher.update([1u8]);
                hasher.update((limit as u64).to_le_bytes());
            }
            None => hasher.update([0u8]),
        }
        hex::encode(&hasher.finalize()[..8])
    }
}
