// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Instrumented schema index for testing
//!
//! Wraps a static index, counts reachability queries, and can be armed to
//! fail on demand.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use pathql_complete_schema::{SchemaError, SchemaIndex, SchemaResult, StaticIndex};

/// Schema-index double with call counting and failure injection
#[derive(Debug)]
pub struct MockIndex {
    inner: StaticIndex,
    reachable_calls: AtomicUsize,
    reachable_error: Option<SchemaError>,
    identity_error: Option<SchemaError>,
}

impl MockIndex {
    /// Wrap an index
    pub fn new(inner: StaticIndex) -> Self {
        Self {
            inner,
            reachable_calls: AtomicUsize::new(0),
            reachable_error: None,
            identity_error: None,
        }
    }

    /// Builder method: every reachability query fails with `error`
    pub fn with_reachable_error(mut self, error: SchemaError) -> Self {
        self.reachable_error = Some(error);
        self
    }

    /// Builder method: every identity query fails with `error`
    pub fn with_identity_error(mut self, error: SchemaError) -> Self {
        self.identity_error = Some(error);
        self
    }

    /// Number of reachability queries served so far
    pub fn reachable_calls(&self) -> usize {
        self.reachable_calls.load(Ordering::Relaxed)
    }
}

impl SchemaIndex for MockIndex {
    fn reachable_under(&self, path: &[String]) -> SchemaResult<BTreeSet<String>> {
        self.reachable_calls.fetch_add(1, Ordering::Relaxed);
        match &self.reachable_error {
            Some(err) => Err(err.clone()),
            None => self.inner.reachable_under(path),
        }
    }

    fn identities(&self) -> SchemaResult<BTreeSet<String>> {
        match &self.identity_error {
            Some(err) => Err(err.clone()),
            None => self.inner.identities(),
        }
    }

    fn ignored(&self) -> SchemaResult<BTreeSet<String>> {
        self.inner.ignored()
    }

    fn revision(&self) -> u64 {
        self.inner.revision()
    }
}
