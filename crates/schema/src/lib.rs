// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # PathQL Complete - Schema Index
//!
//! This crate provides the schema index abstraction the completion engine
//! queries. It defines the [`SchemaIndex`] trait and a ready-made
//! implementation:
//!
//! - **[`SchemaIndex`]**: read-only queries for what is reachable under a
//!   join path, which ident keys exist, and which keys completion must
//!   never suggest
//! - **[`StaticIndex`]**: an in-memory index built from resolver
//!   declarations (input set -> output tree), either programmatically via
//!   [`IndexBuilder`] or from JSON via [`StaticIndex::from_value`]
//!
//! ## Index model
//!
//! A PathQL schema is a table of resolver entries. Each entry declares the
//! attribute inputs it requires and the tree of attributes it can produce:
//!
//! ```text
//! inputs {}              -> { customer/id {} }
//! inputs { customer/id } -> { customer/name {}
//!                             customer/orders { order/id {}, order/total {} } }
//! ```
//!
//! The entry with no inputs is the root: its outputs are reachable from an
//! empty query. Stepping through a join path unions the nested tree under
//! the step key with the outputs of the entry keyed by exactly that
//! attribute, so reachability follows both nested declarations and
//! single-input resolver edges.
//!
//! ## Key conventions
//!
//! Attribute keys are `namespace/name` strings. The namespace `>` is
//! reserved for placeholder keys, which group query branches without
//! contributing to the attribute path; see [`is_placeholder`].

pub mod error;
pub mod index;
pub mod keys;
pub mod r#trait;

// Re-exports
pub use error::{SchemaError, SchemaResult};
pub use index::{AttrTree, IndexBuilder, IndexData, IoEntry, StaticIndex};
pub use keys::{PLACEHOLDER_NS, is_placeholder, key_namespace};
pub use r#trait::SchemaIndex;
