// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # PathQL Complete - Token Model
//!
//! This crate defines the data the external tokenizer hands to the
//! completion engine:
//! - [`Token`]: one lexical token with its span and classification
//! - [`ModeState`]: the linked stack of nesting frames attached to a token
//! - [`Position`]: line/column pairs as the editor reports them
//!
//! The tokenizer itself is not part of this workspace. Everything here is
//! plain data: created fresh per lookup, read by the resolver, never
//! mutated. All types serialize with serde so tokens can cross an
//! embedding boundary as JSON and so test scenarios can be written as
//! data files.

pub mod state;
pub mod token;

// Re-export commonly used types
pub use state::{FrameKey, Frames, Mode, ModeState};
pub use token::{Position, Token, TokenKind};
