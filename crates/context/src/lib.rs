// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # PathQL Complete - Context Resolution Layer
//!
//! This crate answers one question: given the token under the cursor and
//! the nesting-state chain the tokenizer attached to it, what kind of
//! completion applies at that position?
//!
//! ## Overview
//!
//! Every token carries a `state` chain that mirrors the lexical nesting of
//! the query document (joins, attribute lists, ident and parameter
//! expressions). [`resolve_context`] walks that chain and classifies the
//! position either as an ident position or as an attribute position
//! reached through a join path. Candidate discovery later turns the
//! classification into concrete attribute keys.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use pathql_complete_context::{ResolvedContext, resolve_context};
//!
//! match resolve_context(&index, &token) {
//!     Some(ResolvedContext::Ident) => { /* offer ident keys */ }
//!     Some(ResolvedContext::Attribute { path }) => { /* offer attrs under path */ }
//!     None => { /* no completion here */ }
//! }
//! ```

pub mod resolve;

// Re-export commonly used types
pub use resolve::{ResolvedContext, resolve_context};
