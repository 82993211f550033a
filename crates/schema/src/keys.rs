// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Attribute key conventions
//!
//! Attribute keys are `namespace/name` strings; the namespace is optional.
//! One namespace is reserved: `>` marks placeholder keys, which group
//! branches of a query without changing what is reachable underneath them.

/// Reserved namespace for placeholder keys
pub const PLACEHOLDER_NS: &str = ">";

/// Namespace part of a key, if it has one
///
/// ```
/// use pathql_complete_schema::key_namespace;
///
/// assert_eq!(key_namespace("customer/orders"), Some("customer"));
/// assert_eq!(key_namespace("total"), None);
/// ```
pub fn key_namespace(key: &str) -> Option<&str> {
    key.split_once('/').map(|(ns, _)| ns)
}

/// Whether the key lives in the reserved placeholder namespace
pub fn is_placeholder(key: &str) -> bool {
    key_namespace(key) == Some(PLACEHOLDER_NS)
}
