//! Identity-preserving result cache.
use std::collections::HashMap;
use std::sync::Arc;

use starmap_core::System;

use super::Fingerprint;

/// Loaded forests keyed by [`Fingerprint`].
///
/// A hit hands out another handle to the same allocation, so repeated loads
/// of an unchanged file are pointer-equal (`Arc::ptr_eq`).
#[derive(Debug, Default)]
pub struct IdentityCache {
    entries: HashMap<Fingerprint, Arc<[System]>>,
}

impl IdentityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &Fingerprint) -> Option<Arc<[System]>> {
        self.entries.get(key).cloned()
    }

    pub fn insert(&mut self, key: Fingerprint, systems: Arc<[System]>) {
        self.entries.insert(key, systems);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn key(limit: Option<usize>) -> Fingerprint {
        Fingerprint {
            path: PathBuf::from("/tmp/a.db"),
            size: 1,
            modified_ns: 2,
            limit,
        }
    }

    #[test]
    fn hits_share_allocation() {
        let mut cache = IdentityCache::new();
        let systems: Arc<[System]> = Arc::from(Vec::new());
        cache.insert(key(None), Arc::clone(&systems));

        let hit = cache.get(&key(None)).unwrap();
        assert!(Arc::ptr_eq(&hit, &systems));
        assert!(cache.get(&key(Some(1))).is_none());

        cache.clear();
        assert!(cache.is_empty());
    }
}
