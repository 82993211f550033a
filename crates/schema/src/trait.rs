// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Schema index trait
//!
//! This module defines the read-only query interface the completion engine
//! uses. [`StaticIndex`](crate::StaticIndex) is the provided
//! implementation; embedders with their own resolver registry can
//! implement the trait directly and enumerate attributes however they
//! like.

use std::collections::BTreeSet;

use crate::error::SchemaResult;

/// Read-only queries over a schema index
///
/// All methods are synchronous: completion runs inside a single editor
/// event-loop turn and never awaits. Implementations are expected to be
/// cheap per call or to memoize internally.
///
/// # Examples
///
/// ```rust,ignore
/// use pathql_complete_schema::SchemaIndex;
///
/// fn root_attribute_count(index: &dyn SchemaIndex) -> usize {
///     index.reachable_under(&[]).map(|set| set.len()).unwrap_or(0)
/// }
/// ```
pub trait SchemaIndex: Send + Sync {
    /// Attributes reachable as inputs under the given join path
    ///
    /// The path is ordered from the outermost join to the innermost. An
    /// empty path yields the root-resolvable attribute set. The result is
    /// a flat set of keys; nesting below the queried level is not
    /// represented.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::MalformedIndex` if the backing data cannot be
    /// interpreted as an index, or `SchemaError::HookFailure` if a
    /// caller-supplied enumeration hook breaks.
    fn reachable_under(&self, path: &[String]) -> SchemaResult<BTreeSet<String>>;

    /// Declared ident keys
    ///
    /// These complete at ident positions (entity addresses), not at
    /// attribute positions.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`SchemaIndex::reachable_under`].
    fn identities(&self) -> SchemaResult<BTreeSet<String>>;

    /// Keys completion must never suggest
    ///
    /// # Errors
    ///
    /// Same failure modes as [`SchemaIndex::reachable_under`].
    fn ignored(&self) -> SchemaResult<BTreeSet<String>>;

    /// Identity stamp of this index instance
    ///
    /// The discovery cache compares stamps instead of index contents: a
    /// different stamp means the cache is stale and is cleared wholesale.
    /// Rebuilding an index after a schema change must produce a new stamp;
    /// deep equality of contents is deliberately not consulted.
    fn revision(&self) -> u64;
}
