//! Run-scoped deduplication of accepted listings.

use std::collections::HashSet;
use std::fmt;

/// Identity of a physical item (or auction) across feed sightings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey(String);

impl DedupKey {
    /// Key derived from an item's wear float.
    #[must_use]
    pub fn float(value: f64) -> Self {
        Self(format!("float:{value}"))
    }

    /// Key derived from an opaque listing id.
    #[must_use]
    pub fn id(id: &str) -> Self {
        Self(format!("id:{id}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DedupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Set of keys already accepted during this run.
///
/// Grows monotonically: keys are never evicted, so a relisted item is
/// suppressed for the lifetime of the process.
#[derive(Debug, Default)]
pub struct DedupStore {
    keys: HashSet<DedupKey>,
}

impl DedupStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` has been recorded before.
    #[must_use]
    pub fn seen(&self, key: &DedupKey) -> bool {
        self.keys.contains(key)
    }

    /// Record `key`. Returns `true` if it was not already present.
    pub fn record(&mut self, key: DedupKey) -> bool {
        self.keys.insert(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
