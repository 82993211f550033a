// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Engine options
//!
//! Behavior knobs the editor binding passes into completion calls.

/// Completion behavior options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Insert immediately when exactly one candidate remains, instead of
    /// showing a one-row popup
    pub complete_single: bool,

    /// Trigger completion automatically on printable keystrokes
    pub auto_trigger: bool,

    /// Cap on the number of candidates returned, `None` for no cap
    pub max_candidates: Option<usize>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            complete_single: false,
            auto_trigger: true,
            max_candidates: None,
        }
    }
}

impl EngineOptions {
    /// Create the default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether a single remaining candidate completes immediately
    pub fn with_complete_single(mut self, complete_single: bool) -> Self {
        self.complete_single = complete_single;
        self
    }

    /// Set whether printable keystrokes trigger completion
    pub fn with_auto_trigger(mut self, auto_trigger: bool) -> Self {
        self.auto_trigger = auto_trigger;
        self
    }

    /// Cap the number of returned candidates
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = Some(max_candidates);
        self
    }
}
