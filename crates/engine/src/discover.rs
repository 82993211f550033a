// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Candidate discovery
//!
//! Maps a resolved cursor context to the attribute keys the schema index
//! can offer at that position. Raw query results are memoized in the
//! injected [`DiscoveryCache`]; the ignore list and placeholder filtering
//! are applied after memoization, per call.

use std::collections::BTreeSet;

use pathql_complete_context::ResolvedContext;
use pathql_complete_schema::{SchemaIndex, SchemaResult, is_placeholder};
use tracing::debug;

use crate::cache::{CacheKey, DiscoveryCache};

/// Discover the candidate set for a resolved context
///
/// A `None` context and a malformed index both produce an empty set:
/// these are normal "no suggestions" outcomes, not errors. Failures
/// raised by caller-supplied enumeration hooks propagate so the caller
/// can log them.
pub fn discover(
    index: &dyn SchemaIndex,
    context: Option<&ResolvedContext>,
    cache: &mut DiscoveryCache,
) -> SchemaResult<BTreeSet<String>> {
    let Some(context) = context else {
        return Ok(BTreeSet::new());
    };

    cache.sync_revision(index.revision());

    let key = cache_key(context);
    let raw = match cache.get(&key) {
        Some(hit) => hit.clone(),
        None => {
            let Some(raw) = tolerate_malformed(raw_candidates(index, &key))? else {
                return Ok(BTreeSet::new());
            };
            cache.put(key.clone(), raw.clone());
            raw
        }
    };

    let Some(ignored) = tolerate_malformed(index.ignored())? else {
        return Ok(BTreeSet::new());
    };

    let mut candidates: BTreeSet<String> = raw.difference(&ignored).cloned().collect();
    if matches!(key, CacheKey::Attribute(_)) {
        candidates.retain(|candidate| !is_placeholder(candidate));
    }
    Ok(candidates)
}

/// Check whether a completed key could expand into a join
///
/// Placeholder keys always can. At an attribute position the schema
/// decides: the key has children when anything is reachable under the
/// context path extended by it. Non-attribute contexts and index errors
/// mean no expansion.
pub fn key_has_children(
    index: &dyn SchemaIndex,
    cache: &mut DiscoveryCache,
    context: Option<&ResolvedContext>,
    key: &str,
) -> bool {
    if is_placeholder(key) {
        return true;
    }
    let Some(ResolvedContext::Attribute { path }) = context else {
        return false;
    };

    cache.sync_revision(index.revision());

    let mut extended = path.clone();
    extended.push(key.to_string());
    let query = cache_key(&ResolvedContext::Attribute { path: extended });

    if let Some(hit) = cache.get(&query) {
        return !hit.is_empty();
    }
    match raw_candidates(index, &query) {
        Ok(raw) => {
            let has_children = !raw.is_empty();
            cache.put(query, raw);
            has_children
        }
        Err(err) => {
            debug!(%err, key, "child probe failed, treating key as a leaf");
            false
        }
    }
}

/// The effective query for a context
///
/// Placeholder-namespaced segments are dropped from the walk path; they
/// group edits client-side and do not exist in the schema graph.
fn cache_key(context: &ResolvedContext) -> CacheKey {
    match context {
        ResolvedContext::Ident => CacheKey::Ident,
        ResolvedContext::Attribute { path } => CacheKey::Attribute(
            path.iter()
                .filter(|key| !is_placeholder(key))
                .cloned()
                .collect(),
        ),
    }
}

fn raw_candidates(index: &dyn SchemaIndex, key: &CacheKey) -> SchemaResult<BTreeSet<String>> {
    match key {
        CacheKey::Ident => index.identities(),
        CacheKey::Attribute(path) => index.reachable_under(path),
    }
}

/// Collapse a malformed-index failure into "no result"
///
/// A malformed index is a normal editor state (schema still loading, bad
/// live-reload payload) and must never error the pipeline; hook failures
/// pass through.
fn tolerate_malformed(
    result: SchemaResult<BTreeSet<String>>,
) -> SchemaResult<Option<BTreeSet<String>>> {
    match result {
        Ok(set) => Ok(Some(set)),
        Err(err) if err.is_malformed() => {
            debug!(%err, "index not usable, completing with an empty candidate set");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
