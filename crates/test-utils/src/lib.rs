// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for pathql-complete
//!
//! This crate provides common testing components including:
//! - An instrumented schema-index double with failure injection
//! - Builders for nesting-frame chains and tokens
//! - A shared storefront index fixture
//! - A parser for YAML-based completion scenarios

pub mod fixtures;
pub mod mock_index;
pub mod scenarios;
pub mod stacks;

// Re-exports for convenience
pub use fixtures::{store_index, store_index_value, wide_index};
pub use mock_index::MockIndex;
pub use scenarios::{ScenarioCase, ScenarioError, ScenarioExpect, parse_scenarios};
pub use stacks::{atom_token, attr_list_under, composite_token, root_attr_list};
