// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Completion context resolution
//!
//! [`resolve_context`] classifies the cursor position from the token's
//! nesting-frame chain. The walk is a single explicit loop; each step
//! either settles on a context, gives up, or moves one frame toward the
//! document root, so it terminates after at most `depth` steps.

use pathql_complete_schema::SchemaIndex;
use pathql_complete_token::{FrameKey, Mode, ModeState, Token};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Resolved completion context at a token
///
/// The no-match outcome is `None` at the [`resolve_context`] return, not a
/// variant here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ResolvedContext {
    /// The cursor sits inside an ident expression; ident keys complete here
    Ident,
    /// The cursor sits at an attribute position reached through `path`
    Attribute {
        /// Join keys from the outermost recognized join down to the cursor;
        /// empty at a top-level attribute position
        path: Vec<String>,
    },
}

impl ResolvedContext {
    /// Check if this is an ident context
    pub fn is_ident(&self) -> bool {
        matches!(self, ResolvedContext::Ident)
    }

    /// Check if this is an attribute context
    pub fn is_attribute(&self) -> bool {
        matches!(self, ResolvedContext::Attribute { .. })
    }

    /// Attribute path, when this is an attribute context
    pub fn path(&self) -> Option<&[String]> {
        match self {
            ResolvedContext::Attribute { path } => Some(path),
            ResolvedContext::Ident => None,
        }
    }
}

/// Resolve the completion context for a token
///
/// Walks the token's frame chain. Ident and join frames demand that the
/// token text selects the frame key before they resolve; parameter
/// expressions re-enter the walk at their host frame, where the token text
/// no longer applies. `None` means no completion applies at this position.
pub fn resolve_context(index: &dyn SchemaIndex, token: &Token) -> Option<ResolvedContext> {
    let mut frame: &ModeState = &token.state;
    let mut text: Option<&str> = Some(token.text.as_str());

    loop {
        match frame.mode {
            Mode::Ident => {
                return key_selected(frame.key.as_ref(), text).then_some(ResolvedContext::Ident);
            }
            Mode::Join => {
                if !key_selected(frame.key.as_ref(), text) {
                    return None;
                }
                // A join key completes against the structure that encloses
                // its braces, two frames up. A parameter expression sitting
                // directly behind the join is skipped as one extra frame.
                let start = match frame.previous.as_deref() {
                    Some(prev) if prev.mode == Mode::ParamExpr => prev
                        .previous
                        .as_deref()
                        .and_then(|p| p.previous.as_deref()),
                    Some(prev) => prev.previous.as_deref(),
                    None => None,
                };
                return Some(find_attribute_context(index, start));
            }
            Mode::AttrList => {
                return Some(find_attribute_context(index, frame.previous.as_deref()));
            }
            Mode::ParamExpr => {
                // Parameter bodies complete as if at their host frame; the
                // token text belongs to the parameter map, not to that frame.
                frame = frame.previous.as_deref()?;
                text = None;
            }
            Mode::Other => return None,
        }
    }
}

/// Whether the token text selects the frame key
///
/// An absent key always matches; a present key needs the token text to
/// equal it. After a parameter-expression re-entry there is no token text,
/// so only absent keys match.
fn key_selected(key: Option<&FrameKey>, text: Option<&str>) -> bool {
    match (key, text) {
        (None, _) => true,
        (Some(key), Some(text)) => key.matches_text(text),
        (Some(_), None) => false,
    }
}

/// Collect the attribute path by walking join frames toward the root
///
/// Each visited join frame contributes its key. An ident-keyed join or a
/// key resolvable at the schema root anchors the path and stops the walk;
/// an unrecognized key is a passthrough join, two frames up to the next
/// candidate. Any other frame shape ends the walk with the prefix
/// collected so far.
fn find_attribute_context(index: &dyn SchemaIndex, start: Option<&ModeState>) -> ResolvedContext {
    let mut path: Vec<String> = Vec::new();
    let mut frame = start;

    while let Some(current) = frame {
        match (current.mode, &current.key) {
            (Mode::Join, Some(FrameKey::Ident(key))) => {
                path.push(key.clone());
                break;
            }
            (Mode::Join, Some(FrameKey::Text(key))) => {
                path.push(key.clone());
                if root_resolvable(index, key) {
                    break;
                }
                frame = current
                    .previous
                    .as_deref()
                    .and_then(|p| p.previous.as_deref());
            }
            _ => break,
        }
    }

    // collected innermost-first
    path.reverse();
    ResolvedContext::Attribute { path }
}

/// Whether a key is resolvable with no inputs
///
/// An index failure here only downgrades the key to a passthrough; the
/// walk itself never fails.
fn root_resolvable(index: &dyn SchemaIndex, key: &str) -> bool {
    match index.reachable_under(&[]) {
        Ok(roots) => roots.contains(key),
        Err(err) => {
            debug!(%err, key, "root reachability probe failed, treating key as passthrough");
            false
        }
    }
}
