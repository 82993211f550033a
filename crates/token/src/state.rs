// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Lexical nesting state
//!
//! The tokenizer annotates every token with a singly linked stack of
//! nesting frames. The head frame describes the position the token sits
//! in; `previous` chains toward the document root. Chains are acyclic and
//! their depth is bounded by the document's nesting depth.

use serde::{Deserialize, Serialize};

/// Lexical mode of a nesting frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Inside an ident key (an entity address such as `[customer/id 42]`)
    Ident,
    /// Inside a join key (a nested attribute selection)
    Join,
    /// Inside an attribute-name list (a join body or the document root)
    AttrList,
    /// Inside a parameter map attached to an attribute or join
    ParamExpr,
    /// Any other lexical position
    Other,
}

/// Key recorded on a nesting frame
///
/// Plain joins record the text of the key that opened them. Joins keyed by
/// an ident expression record the ident's own attribute key instead; the
/// two shapes behave differently during context resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameKey {
    /// Ordinary textual key, e.g. `customer/orders`
    Text(String),
    /// Ident-expression key; the payload is the ident's attribute key
    Ident(String),
}

impl FrameKey {
    /// Key text regardless of shape
    pub fn as_str(&self) -> &str {
        match self {
            FrameKey::Text(key) | FrameKey::Ident(key) => key,
        }
    }

    /// Whether this is an ident-expression key
    pub fn is_ident(&self) -> bool {
        matches!(self, FrameKey::Ident(_))
    }

    /// Whether the given token text selects this key
    ///
    /// Only textual keys compare against token text; an ident-expression
    /// key is never the literal text of a token.
    pub fn matches_text(&self, text: &str) -> bool {
        matches!(self, FrameKey::Text(key) if key == text)
    }
}

/// A nesting frame in the tokenizer's mode stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeState {
    /// Lexical mode of this frame
    pub mode: Mode,
    /// Key that opened this frame, if any
    #[serde(default)]
    pub key: Option<FrameKey>,
    /// Enclosing frame, toward the document root
    #[serde(default)]
    pub previous: Option<Box<ModeState>>,
    /// Indentation column where this frame opened
    #[serde(default)]
    pub indent: u32,
}

impl ModeState {
    /// Create a frame with the given mode and no key
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            key: None,
            previous: None,
            indent: 0,
        }
    }

    /// Builder method: set a textual key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(FrameKey::Text(key.into()));
        self
    }

    /// Builder method: set an ident-expression key
    pub fn with_ident_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(FrameKey::Ident(key.into()));
        self
    }

    /// Builder method: set the enclosing frame
    pub fn with_previous(mut self, previous: ModeState) -> Self {
        self.previous = Some(Box::new(previous));
        self
    }

    /// Builder method: set the indentation column
    pub fn with_indent(mut self, indent: u32) -> Self {
        self.indent = indent;
        self
    }

    /// Number of frames from this one to the document root
    pub fn depth(&self) -> usize {
        self.frames().count()
    }

    /// Iterate frames from this one toward the document root
    pub fn frames(&self) -> Frames<'_> {
        Frames { next: Some(self) }
    }
}

/// Iterator over a frame chain, head frame first
pub struct Frames<'a> {
    next: Option<&'a ModeState>,
}

impl<'a> Iterator for Frames<'a> {
    type Item = &'a ModeState;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.next?;
        self.next = frame.previous.as_deref();
        Some(frame)
    }
}
