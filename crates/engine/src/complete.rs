// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Completion pipeline
//!
//! The core entry point ties the stages together: fragment
//! classification, context resolution, candidate discovery, fuzzy
//! ranking, and the replacement span the editor should apply.

use pathql_complete_context::resolve_context;
use pathql_complete_schema::SchemaIndex;
use pathql_complete_token::{Position, Token};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cache::DiscoveryCache;
use crate::discover::discover;
use crate::error::EngineResult;
use crate::fuzzy::{is_blank_fragment, rank};

/// A computed completion popup
///
/// `candidates` are ordered best-first. Applying a candidate means
/// replacing the span from `from` to `to` with its text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResult {
    /// Candidate texts, best match first
    pub candidates: Vec<String>,
    /// Replacement span start
    pub from: Position,
    /// Replacement span end
    pub to: Position,
}

/// Compute the completion popup for a token under the cursor
///
/// Returns `Ok(None)` when no popup should appear: an unresolvable
/// cursor position, a position the schema offers nothing at, or a
/// malformed index. A non-blank fragment that filters every candidate
/// away still pops up, with no rows, so the popup can narrow as the
/// user types.
///
/// # Errors
///
/// Propagates enumeration-hook failures and unusable fragments; the
/// caller owns logging. Either way the editor shows nothing.
pub fn complete(
    index: &dyn SchemaIndex,
    cursor: Position,
    token: &Token,
    fragment: &str,
    cache: &mut DiscoveryCache,
) -> EngineResult<Option<CompletionResult>> {
    let blank = is_blank_fragment(fragment);
    let (from, to) = if blank {
        (cursor, cursor)
    } else {
        let typed = fragment.chars().count() as u32;
        (
            Position::new(cursor.line, cursor.ch.saturating_sub(typed)),
            Position::new(cursor.line, token.end),
        )
    };

    let context = resolve_context(index, token);
    let raw = discover(index, context.as_ref(), cache)?;
    if raw.is_empty() {
        debug!(?context, "no candidates at cursor");
        return Ok(None);
    }

    let ranked = rank(fragment, raw)?;
    Ok(Some(CompletionResult {
        candidates: ranked.into_iter().map(|m| m.text).collect(),
        from,
        to,
    }))
}
