// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Shared schema-index fixtures

use pathql_complete_schema::{AttrTree, StaticIndex};

/// Standard storefront index used across tests
///
/// Roots are `customer/id` (also an ident) and `store/open-hours`, plus a
/// placeholder-namespaced `>/draft` entry that completion must never
/// surface. `customer/id` unlocks the customer attributes and the
/// `customer/orders` join; `order/id` unlocks shipping attributes.
/// `customer/internal-notes` is reachable but on the ignore list.
pub fn store_index() -> StaticIndex {
    StaticIndex::builder()
        .root_attrs(["customer/id", "store/open-hours", ">/draft"])
        .resolver(
            ["customer/id"],
            AttrTree::new()
                .with_attr("customer/name")
                .with_attr("customer/email")
                .with_attr("customer/internal-notes")
                .with_nested(
                    "customer/orders",
                    AttrTree::from_attrs(["order/id", "order/total"]),
                ),
        )
        .resolver(
            ["order/id"],
            AttrTree::from_attrs(["order/shipped?", "order/carrier"]),
        )
        .ident("customer/id")
        .ident("order/id")
        .ignore("customer/internal-notes")
        .build()
}

/// The declarations behind [`store_index`], as the JSON wire shape
pub fn store_index_value() -> serde_json::Value {
    serde_json::json!({
        "io": [
            {
                "inputs": [],
                "outputs": {
                    "customer/id": {},
                    "store/open-hours": {},
                    ">/draft": {}
                }
            },
            {
                "inputs": ["customer/id"],
                "outputs": {
                    "customer/name": {},
                    "customer/email": {},
                    "customer/internal-notes": {},
                    "customer/orders": {
                        "order/id": {},
                        "order/total": {}
                    }
                }
            },
            {
                "inputs": ["order/id"],
                "outputs": {
                    "order/shipped?": {},
                    "order/carrier": {}
                }
            }
        ],
        "idents": ["customer/id", "order/id"],
        "ignore": ["customer/internal-notes"]
    })
}

/// Index with `n` synthetic root attributes, for benchmarks and sizing
/// tests
pub fn wide_index(n: usize) -> StaticIndex {
    StaticIndex::builder()
        .root_attrs((0..n).map(|i| format!("gen/attr-{i:04}")))
        .build()
}
