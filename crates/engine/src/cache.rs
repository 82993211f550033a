// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Discovery result cache
//!
//! Reachability walks over a large schema index are the expensive part of
//! completion, so raw discovery results are memoized per effective query.
//! The cache is owned by the embedder and injected into every pipeline
//! call; it drops all entries whenever the index revision moves, as a
//! reloaded schema arrives under a fresh revision stamp. Completion runs
//! on a single editor event loop, so no locking is involved.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

/// The effective discovery query, used as cache key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Identity-key lookup
    Ident,
    /// Reachability walk under a placeholder-free join path
    Attribute(Vec<String>),
}

/// Memoized raw discovery results
///
/// Entries hold raw candidate sets, before the ignore list and
/// placeholder filtering are applied, so exclusion stays a per-call
/// concern and never goes stale inside the cache.
#[derive(Debug, Default)]
pub struct DiscoveryCache {
    entries: HashMap<CacheKey, BTreeSet<String>>,
    revision: Option<u64>,
}

impl DiscoveryCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Align the cache with an index revision
    ///
    /// Every entry is dropped when the revision differs from the one the
    /// cache was filled under. No partial invalidation is attempted.
    pub fn sync_revision(&mut self, revision: u64) {
        if self.revision == Some(revision) {
            return;
        }
        if self.revision.is_some() {
            debug!(
                revision,
                dropped = self.entries.len(),
                "schema index changed, clearing discovery cache"
            );
        }
        self.entries.clear();
        self.revision = Some(revision);
    }

    /// Look up the raw result for a query
    pub fn get(&self, key: &CacheKey) -> Option<&BTreeSet<String>> {
        self.entries.get(key)
    }

    /// Store the raw result for a query
    pub fn put(&mut self, key: CacheKey, raw: BTreeSet<String>) {
        self.entries.insert(key, raw);
    }

    /// Number of memoized queries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether anything is memoized
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
