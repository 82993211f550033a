// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! YAML-based completion scenario format
//!
//! End-to-end completion cases are written as data: an index declaration,
//! the token under the cursor (with its frame chain), the cursor position,
//! and the expected popup. A case without an `expect` block expects no
//! popup at all.
//!
//! ```yaml
//! cases:
//!   - name: root-fragment
//!     index:
//!       io:
//!         - outputs: { customer/id: {} }
//!     token:
//!       text: "cust"
//!       start: 1
//!       end: 5
//!       kind: atom
//!       state: { mode: attr-list }
//!     cursor: { line: 0, ch: 5 }
//!     expect:
//!       candidates: ["customer/id"]
//!       from: { line: 0, ch: 1 }
//!       to: { line: 0, ch: 5 }
//! ```

use pathql_complete_schema::IndexData;
use pathql_complete_token::{Position, Token};
use serde::Deserialize;
use thiserror::Error;

/// Scenario file parse failure
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The file is not valid YAML for the scenario shape
    #[error("scenario file is not valid: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Expected completion popup
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScenarioExpect {
    /// Candidate texts in expected order
    pub candidates: Vec<String>,
    /// Replacement span start
    pub from: Position,
    /// Replacement span end
    pub to: Position,
}

/// One completion scenario
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioCase {
    /// Case name, for failure messages
    pub name: String,
    /// Schema index declarations
    pub index: IndexData,
    /// Token under the cursor
    pub token: Token,
    /// Cursor position
    pub cursor: Position,
    /// Expected popup; absent means no popup
    #[serde(default)]
    pub expect: Option<ScenarioExpect>,
}

#[derive(Debug, Deserialize)]
struct ScenarioFile {
    cases: Vec<ScenarioCase>,
}

/// Parse a scenario file
///
/// # Errors
///
/// Returns `ScenarioError::Parse` when the content is not valid YAML or
/// does not match the scenario shape.
pub fn parse_scenarios(content: &str) -> Result<Vec<ScenarioCase>, ScenarioError> {
    // Frame keys are externally tagged enums; deserialize them from the
    // `{ text: ... }` singleton-map form the scenario format uses rather
    // than serde_yaml 0.9's default `!text` tag form.
    let file: ScenarioFile = serde_yaml::with::singleton_map_recursive::deserialize(
        serde_yaml::Deserializer::from_str(content),
    )?;
    Ok(file.cases)
}
