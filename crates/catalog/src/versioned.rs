// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::collections::BTreeMap;

use parking_lot::RwLock;

use memgres_core::interface::CommitVersion;

/// The history of one catalog definition: for each commit that touched it,
/// the definition as of that commit (`None` once deleted). Readers resolve
/// the newest entry at or below their version.
#[derive(Debug)]
pub struct Versioned<T> {
    entries: RwLock<BTreeMap<CommitVersion, Option<T>>>,
}

impl<T: Clone> Versioned<T> {
    pub fn new() -> Self {
        Self { entries: RwLock::new(BTreeMap::new()) }
    }

    pub fn get(&self, version: CommitVersion) -> Option<T> {
        self.entries
            .read()
            .range(..=version)
            .next_back()
            .and_then(|(_, value)| value.clone())
    }

    pub fn get_latest(&self) -> Option<T> {
        self.entries.read().last_key_value().and_then(|(_, value)| value.clone())
    }

    pub fn insert(&self, version: CommitVersion, value: Option<T>) {
        self.entries.write().insert(version, value);
    }
}

impl<T: Clone> Default for Versioned<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::Versioned;

    #[test]
    fn test_get_resolves_at_or_below_version() {
        let versioned = Versioned::new();
        versioned.insert(2, Some("a"));
        versioned.insert(5, Some("b"));

        assert_eq!(versioned.get(1), None);
        assert_eq!(versioned.get(2), Some("a"));
        assert_eq!(versioned.get(4), Some("a"));
        assert_eq!(versioned.get(5), Some("b"));
        assert_eq!(versioned.get(9), Some("b"));
    }

    #[test]
    fn test_delete_marker_hides_value() {
        let versioned = Versioned::new();
        versioned.insert(1, Some("a"));
        versioned.insert(3, None);

        assert_eq!(versioned.get(2), Some("a"));
        assert_eq!(versioned.get(3), None);
        assert_eq!(versioned.get_latest(), None);
    }
}
