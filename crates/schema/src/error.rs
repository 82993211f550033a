// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for schema index operations

use thiserror::Error;

/// Result type alias for schema index operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur while querying a schema index
#[derive(Debug, Error, Clone)]
pub enum SchemaError {
    /// The index data is not shaped like an index
    ///
    /// Candidate discovery treats this as "no candidates", never as a
    /// failure that propagates to the editor.
    #[error("schema index is malformed: {0}")]
    MalformedIndex(String),

    /// A caller-supplied attribute-enumeration hook failed
    ///
    /// Unlike a malformed index this is surfaced to the caller so it can
    /// be logged; completion still degrades to "no candidates".
    #[error("attribute enumeration hook failed: {0}")]
    HookFailure(String),
}

impl SchemaError {
    /// Whether this error reports a malformed index rather than a broken hook
    pub fn is_malformed(&self) -> bool {
        matches!(self, SchemaError::MalformedIndex(_))
    }
}
