// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Completion pipeline error types
//!
//! This module defines the errors the completion pipeline can surface to
//! its caller.

use pathql_complete_schema::SchemaError;

use crate::fuzzy::InvalidFragment;

/// Result type for completion pipeline operations
pub type EngineResult<T> = Result<T, CompletionError>;

/// Errors that can occur while computing completions
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// The typed fragment cannot be turned into a match pattern
    #[error("Fragment error: {0}")]
    Fragment(#[from] InvalidFragment),

    /// Candidate discovery failed in the schema layer
    #[error("Discovery error: {0}")]
    Discovery(#[from] SchemaError),
}

impl CompletionError {
    /// Check if this error should result in an empty completion popup
    ///
    /// Every pipeline failure manifests as "no popup appears"; the caller
    /// owns diagnostics and decides what to log.
    pub fn should_return_empty(&self) -> bool {
        matches!(
            self,
            CompletionError::Fragment(_) | CompletionError::Discovery(_)
        )
    }
}
