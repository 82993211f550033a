// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Editor binding
//!
//! The engine reaches the editor through a small capability trait: read
//! the cursor and token, apply a replacement, move the cursor, request
//! the hint popup. [`completion_at_cursor`] and [`expand_join`] are the
//! two commands a binding wires to editor events.

use pathql_complete_schema::SchemaIndex;
use pathql_complete_token::{Mode, Position, Token, TokenKind};

use crate::cache::DiscoveryCache;
use crate::complete::{CompletionResult, complete};
use crate::config::EngineOptions;
use crate::error::EngineResult;

/// Editor capabilities the engine consumes
///
/// Implementations wrap a concrete editor widget; the engine never
/// touches editor internals beyond these five calls.
pub trait Editor {
    /// Current cursor position
    fn cursor(&self) -> Position;

    /// Token covering a position, with its nesting state
    fn token_at(&self, position: Position) -> Option<Token>;

    /// Replace a text span
    fn replace_range(&mut self, text: &str, from: Position, to: Position);

    /// Move the cursor
    fn set_cursor(&mut self, position: Position);

    /// Ask the editor to (re)display the completion popup
    fn show_hint(&mut self);
}

/// Compute completions for the editor's current cursor
///
/// Reads the token under the cursor, takes the fragment typed up to the
/// cursor column, and delegates to [`complete`]. The candidate list is
/// truncated to `options.max_candidates` when set. No token at the
/// cursor means no popup.
pub fn completion_at_cursor<E: Editor>(
    editor: &E,
    index: &dyn SchemaIndex,
    cache: &mut DiscoveryCache,
    options: &EngineOptions,
) -> EngineResult<Option<CompletionResult>> {
    let cursor = editor.cursor();
    let Some(token) = editor.token_at(cursor) else {
        return Ok(None);
    };

    let fragment = token.text_before(cursor.ch);
    let mut result = complete(index, cursor, &token, fragment, cache)?;
    if let (Some(result), Some(cap)) = (result.as_mut(), options.max_candidates) {
        result.candidates.truncate(cap);
    }
    Ok(result)
}

/// Expand the key under the cursor into a join
///
/// Applies only to expandable keys (`CompositeAtom`) inside an attribute
/// list. A key sitting at its frame indent becomes a multi-line join with
/// the bracket body on its own line; anything else expands inline. The
/// cursor lands between the new brackets and the hint popup is requested
/// so completion continues inside the join. Returns whether an edit was
/// applied.
pub fn expand_join<E: Editor>(editor: &mut E) -> bool {
    let cursor = editor.cursor();
    let Some(token) = editor.token_at(cursor) else {
        return false;
    };
    if token.kind != TokenKind::CompositeAtom || token.state.mode != Mode::AttrList {
        return false;
    }

    let from = Position::new(cursor.line, token.start);
    let to = Position::new(cursor.line, token.end);
    let indent = token.state.indent;

    if token.start == indent {
        let body_indent = " ".repeat(indent as usize + 1);
        let replacement = format!("{{{}\n{}[]}}", token.text, body_indent);
        editor.replace_range(&replacement, from, to);
        editor.set_cursor(Position::new(cursor.line + 1, indent + 2));
    } else {
        let replacement = format!("{{{} []}}", token.text);
        editor.replace_range(&replacement, from, to);
        let text_chars = token.text.chars().count() as u32;
        editor.set_cursor(Position::new(cursor.line, token.start + text_chars + 3));
    }

    editor.show_hint();
    true
}

/// Decide whether a released key should trigger completion
///
/// Printable keystrokes report single-character key names; named keys
/// (`"Shift"`, `"Enter"`) are longer. An already-open popup never
/// re-triggers.
pub fn should_auto_trigger(completion_active: bool, key: &str) -> bool {
    !completion_active && key.chars().count() == 1
}
