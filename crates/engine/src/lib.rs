// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # PathQL Complete - Completion Engine
//!
//! This crate computes in-editor completions for PathQL attribute queries.
//!
//! ## Overview
//!
//! Given the token under the cursor (with the nesting state the tokenizer
//! attached to it) and a schema index, the engine provides:
//! - Cursor classification (attribute position, ident position, or nothing)
//! - Schema-driven candidate discovery with an injected memoization cache
//! - Fuzzy, score-ordered candidate ranking
//! - The exact text span a chosen candidate replaces
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Editor binding (engine::editor)    │
//! │   cursor / token / replace / show hint  │
//! └──────────────┬──────────────────────────┘
//!                │ Token + fragment
//!                ↓
//! ┌─────────────────────────────────────────┐
//! │         complete (engine::complete)     │
//! ├─────────────────────────────────────────┤
//! │  context resolution  → discovery        │
//! │  (pathql-complete-     (+ cache)        │
//! │   context)                │             │
//! │                           ↓             │
//! │                     fuzzy ranking       │
//! └──────────────┬──────────────────────────┘
//!                ↓
//!         CompletionResult
//!         { candidates, from, to }
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pathql_complete_engine::{DiscoveryCache, complete};
//! use pathql_complete_schema::StaticIndex;
//!
//! let index = StaticIndex::builder()
//!     .root_attrs(["customer/id", "store/open-hours"])
//!     .build();
//! let mut cache = DiscoveryCache::new();
//!
//! // token and cursor come from the editor binding
//! let popup = complete(&index, cursor, &token, "cust", &mut cache)?;
//! if let Some(popup) = popup {
//!     // show popup.candidates, replace popup.from..popup.to on pick
//! }
//! ```
//!
//! ## Modules
//!
//! - [`complete`]: the completion pipeline and its result type
//! - [`discover`]: schema-driven candidate discovery
//! - [`fuzzy`]: fragment matching and ranking
//! - [`cache`]: the injected discovery cache
//! - [`editor`]: the editor capability trait and editing commands
//! - [`config`]: behavior options for editor bindings
//!
//! ## Error Handling
//!
//! Conditions the pipeline can classify itself are values, not errors:
//! a malformed index and an unresolvable cursor position both complete
//! with no popup. Only enumeration-hook failures and uncompilable
//! fragments surface as [`CompletionError`], for the caller to log.
//!
//! ## Testing
//!
//! ```bash
//! # Run unit tests
//! cargo test -p pathql-complete-engine
//!
//! # Run the data-driven scenario suite
//! cargo test -p pathql-complete-engine --test scenario_tests
//! ```

pub mod cache;
pub mod complete;
pub mod config;
pub mod discover;
pub mod editor;
pub mod error;
pub mod fuzzy;

// Re-exports for convenience
pub use cache::{CacheKey, DiscoveryCache};
pub use complete::{CompletionResult, complete};
pub use config::EngineOptions;
pub use discover::{discover, key_has_children};
pub use editor::{Editor, completion_at_cursor, expand_join, should_auto_trigger};
pub use error::{CompletionError, EngineResult};
pub use fuzzy::{InvalidFragment, RankedMatch, is_blank_fragment, rank};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name
pub const ENGINE_NAME: &str = "pathql-complete";
