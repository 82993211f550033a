// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Fuzzy candidate ranking
//!
//! Scores candidate keys against the fragment the user has typed so far.
//! A blank fragment (empty, or opening brackets/whitespace only) disables
//! filtering so a bare trigger still lists every candidate; anything else
//! compiles into a case-insensitive scattered-character pattern and only
//! matching candidates survive.

use serde::{Deserialize, Serialize};

/// Characters that leave a fragment blank when they make up all of it
///
/// Completion is often triggered right after typing an opening bracket;
/// the bracket itself is part of the token but carries no filter text.
const OPENER_CHARS: [char; 4] = ['(', '{', '[', ' '];

/// A candidate with its match score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    /// Candidate text
    pub text: String,
    /// Match quality, higher is better
    pub score: f64,
}

/// Fragment that cannot be compiled into a match pattern
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid completion fragment: {reason}")]
pub struct InvalidFragment {
    /// What made the fragment unusable
    pub reason: String,
}

/// Check whether a fragment carries no filter information
pub fn is_blank_fragment(fragment: &str) -> bool {
    fragment.chars().all(|c| OPENER_CHARS.contains(&c))
}

/// Compile a fragment into its scattered-character pattern
///
/// Every fragment character is matched literally, in typed order, with
/// arbitrary text allowed in between. Matching is case-insensitive.
fn fuzzy_pattern(fragment: &str) -> Result<regex::Regex, InvalidFragment> {
    if fragment.contains('\0') {
        return Err(InvalidFragment {
            reason: "fragment contains a null byte".to_string(),
        });
    }

    let scattered = fragment
        .chars()
        .map(|c| regex::escape(&c.to_string()))
        .collect::<Vec<_>>()
        .join(".*");

    regex::Regex::new(&format!("(?i){scattered}")).map_err(|err| InvalidFragment {
        reason: err.to_string(),
    })
}

/// Score one matching candidate
///
/// Prefix matches outrank substring matches, which outrank scattered
/// matches; within a tier, tighter candidates score higher. Tiers never
/// overlap: a scattered or offset match forces the candidate to be
/// longer than the fragment, which keeps its bonus below 1.0.
fn score_match(fragment_lower: &str, fragment_chars: f64, candidate: &str) -> f64 {
    let candidate_lower = candidate.to_lowercase();
    let tier = if candidate_lower.starts_with(fragment_lower) {
        3.0
    } else if candidate_lower.contains(fragment_lower) {
        2.0
    } else {
        1.0
    };
    tier + fragment_chars / candidate.chars().count() as f64
}

/// Rank candidates against a typed fragment
///
/// A blank fragment returns every candidate in its given order. Otherwise
/// only fuzzy-matching candidates are kept, sorted best-first; ties fall
/// back to lexicographic order so repeated calls with identical inputs
/// produce identical sequences.
///
/// # Errors
///
/// Returns [`InvalidFragment`] when the fragment cannot be compiled into
/// a match pattern; in practice, when it contains a null byte.
pub fn rank<I, S>(fragment: &str, candidates: I) -> Result<Vec<RankedMatch>, InvalidFragment>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    if is_blank_fragment(fragment) {
        return Ok(candidates
            .into_iter()
            .map(|text| RankedMatch {
                text: text.into(),
                score: 0.0,
            })
            .collect());
    }

    let pattern = fuzzy_pattern(fragment)?;
    let fragment_lower = fragment.to_lowercase();
    let fragment_chars = fragment.chars().count() as f64;

    let mut ranked: Vec<RankedMatch> = candidates
        .into_iter()
        .map(Into::into)
        .filter(|text| pattern.is_match(text))
        .map(|text| {
            let score = score_match(&fragment_lower, fragment_chars, &text);
            RankedMatch { text, score }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.text.cmp(&b.text)));
    Ok(ranked)
}
