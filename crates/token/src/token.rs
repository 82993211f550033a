// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Editor tokens
//!
//! A [`Token`] is the unit the completion engine works from: the text
//! under the cursor, its column span, a coarse classification, and the
//! nesting state the tokenizer attached to it.

use serde::{Deserialize, Serialize};

use crate::state::ModeState;

/// Line/column position as reported by the editor
///
/// Columns count characters from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based line number
    pub line: u32,
    /// Zero-based character column
    pub ch: u32,
}

impl Position {
    /// Create a position
    pub fn new(line: u32, ch: u32) -> Self {
        Self { line, ch }
    }
}

/// Token classification relevant to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// Plain attribute key
    Atom,
    /// Attribute key that may be expanded into a join
    #[serde(rename = "atom-composite")]
    CompositeAtom,
    /// Anything else
    Other,
}

/// A lexical token at the cursor, with its nesting state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Token text
    pub text: String,
    /// Start column on the token's line
    pub start: u32,
    /// End column on the token's line
    pub end: u32,
    /// Token classification
    pub kind: TokenKind,
    /// Nesting state attached by the tokenizer
    pub state: ModeState,
}

impl Token {
    /// Create a token
    pub fn new(
        text: impl Into<String>,
        start: u32,
        end: u32,
        kind: TokenKind,
        state: ModeState,
    ) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            kind,
            state,
        }
    }

    /// Token text strictly before the given column
    ///
    /// This is the fragment the user has typed so far when the cursor sits
    /// at column `ch` inside the token. Columns at or before the token
    /// start yield an empty fragment; columns past the token end yield the
    /// whole text.
    pub fn text_before(&self, ch: u32) -> &str {
        let typed = ch.saturating_sub(self.start) as usize;
        match self.text.char_indices().nth(typed) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }
}
