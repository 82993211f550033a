// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Static schema index
//!
//! [`StaticIndex`] is the in-memory [`SchemaIndex`] implementation. It is
//! built from resolver declarations (entries pairing an input attribute
//! set with the tree of attributes the resolver produces) plus the ident
//! and ignore sets.
//!
//! Reachability walks the declarations: starting from the no-input entry,
//! each join-path step descends into the nested tree under the step key
//! and unions in the outputs of the entry whose input set is exactly that
//! key. Entries requiring several inputs at once do not participate in
//! completion reachability; the walk only follows edges a query path can
//! actually take.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SchemaError, SchemaResult};
use crate::r#trait::SchemaIndex;

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// Nested attribute tree
///
/// Each key maps to the tree of attributes visible inside it; a leaf
/// attribute has an empty subtree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttrTree(BTreeMap<String, AttrTree>);

impl AttrTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Flat tree from leaf attribute keys
    pub fn from_attrs<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tree = AttrTree::new();
        for key in keys {
            tree.0.insert(key.into(), AttrTree::new());
        }
        tree
    }

    /// Builder method: add a leaf attribute
    pub fn with_attr(mut self, key: impl Into<String>) -> Self {
        self.0.insert(key.into(), AttrTree::new());
        self
    }

    /// Builder method: add an attribute with its own subtree
    pub fn with_nested(mut self, key: impl Into<String>, subtree: AttrTree) -> Self {
        self.0.insert(key.into(), subtree);
        self
    }

    /// Subtree under a key
    pub fn get(&self, key: &str) -> Option<&AttrTree> {
        self.0.get(key)
    }

    /// Top-level attribute keys
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Whether the tree has no attributes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Deep union with another tree
    pub fn merge(&mut self, other: &AttrTree) {
        for (key, subtree) in &other.0 {
            self.0.entry(key.clone()).or_default().merge(subtree);
        }
    }
}

/// One resolver declaration: required inputs and producible outputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IoEntry {
    /// Attribute keys the resolver needs
    #[serde(default)]
    pub inputs: BTreeSet<String>,
    /// Attribute tree the resolver produces
    #[serde(default)]
    pub outputs: AttrTree,
}

/// Raw index declaration data
///
/// This is the serde shape [`StaticIndex::from_value`] accepts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexData {
    /// Resolver declarations
    #[serde(default)]
    pub io: Vec<IoEntry>,
    /// Declared ident keys
    #[serde(default)]
    pub idents: BTreeSet<String>,
    /// Keys completion must never suggest
    #[serde(default)]
    pub ignore: BTreeSet<String>,
}

/// Fluent construction of a [`StaticIndex`]
#[derive(Debug, Default)]
pub struct IndexBuilder {
    data: IndexData,
}

impl IndexBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a resolver entry
    pub fn resolver<I, S>(mut self, inputs: I, outputs: AttrTree) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data.io.push(IoEntry {
            inputs: inputs.into_iter().map(Into::into).collect(),
            outputs,
        });
        self
    }

    /// Declare leaf attributes resolvable with no inputs
    pub fn root_attrs<I, S>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.root_outputs(AttrTree::from_attrs(keys))
    }

    /// Declare an output tree resolvable with no inputs
    pub fn root_outputs(mut self, outputs: AttrTree) -> Self {
        self.data.io.push(IoEntry {
            inputs: BTreeSet::new(),
            outputs,
        });
        self
    }

    /// Declare an ident key
    pub fn ident(mut self, key: impl Into<String>) -> Self {
        self.data.idents.insert(key.into());
        self
    }

    /// Exclude a key from completion
    pub fn ignore(mut self, key: impl Into<String>) -> Self {
        self.data.ignore.insert(key.into());
        self
    }

    /// Build the index
    pub fn build(self) -> StaticIndex {
        StaticIndex::new(self.data)
    }
}

/// In-memory schema index built from resolver declarations
#[derive(Debug, Clone)]
pub struct StaticIndex {
    io: HashMap<BTreeSet<String>, AttrTree>,
    idents: BTreeSet<String>,
    ignore: BTreeSet<String>,
    revision: u64,
}

impl StaticIndex {
    /// Build an index from declaration data
    ///
    /// Declarations sharing an input set are merged. Every constructed
    /// index gets a fresh revision stamp, so rebuilding after a schema
    /// change invalidates discovery caches keyed on the stamp.
    pub fn new(data: IndexData) -> Self {
        let mut io: HashMap<BTreeSet<String>, AttrTree> = HashMap::new();
        for entry in data.io {
            io.entry(entry.inputs).or_default().merge(&entry.outputs);
        }
        let index = Self {
            io,
            idents: data.idents,
            ignore: data.ignore,
            revision: NEXT_REVISION.fetch_add(1, Ordering::Relaxed),
        };
        debug!(
            entries = index.io.len(),
            idents = index.idents.len(),
            revision = index.revision,
            "schema index built"
        );
        index
    }

    /// Build an index from a JSON value
    ///
    /// The expected shape is
    /// `{ "io": [{ "inputs": [...], "outputs": {...} }], "idents": [...], "ignore": [...] }`
    /// with every field optional.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::MalformedIndex` when the value does not
    /// deserialize into that shape.
    pub fn from_value(value: serde_json::Value) -> SchemaResult<Self> {
        let data: IndexData = serde_json::from_value(value)
            .map_err(|err| SchemaError::MalformedIndex(err.to_string()))?;
        Ok(Self::new(data))
    }

    /// Fluent builder for an index
    pub fn builder() -> IndexBuilder {
        IndexBuilder::new()
    }
}

impl SchemaIndex for StaticIndex {
    fn reachable_under(&self, path: &[String]) -> SchemaResult<BTreeSet<String>> {
        let mut current = self
            .io
            .get(&BTreeSet::new())
            .cloned()
            .unwrap_or_default();
        for key in path {
            let mut next = current.get(key).cloned().unwrap_or_default();
            let single = BTreeSet::from([key.clone()]);
            if let Some(outputs) = self.io.get(&single) {
                next.merge(outputs);
            }
            current = next;
        }
        Ok(current.keys().cloned().collect())
    }

    fn identities(&self) -> SchemaResult<BTreeSet<String>> {
        Ok(self.idents.clone())
    }

    fn ignored(&self) -> SchemaResult<BTreeSet<String>> {
        Ok(self.ignore.clone())
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}
