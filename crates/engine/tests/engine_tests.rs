// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! End-to-end tests for the completion pipeline
//!
//! Covers discovery filtering, cache behavior, the completion contract,
//! join expansion, and the editor-facing commands, using the shared store
//! fixture and test doubles.

use std::collections::BTreeSet;

use pathql_complete_context::ResolvedContext;
use pathql_complete_engine::{
    DiscoveryCache, Editor, EngineOptions, complete, completion_at_cursor, discover, expand_join,
    key_has_children,
};
use pathql_complete_schema::{SchemaError, StaticIndex};
use pathql_complete_test_utils::{
    MockIndex, atom_token, attr_list_under, composite_token, root_attr_list, store_index,
};
use pathql_complete_token::{Mode, ModeState, Position, Token, TokenKind};

fn set(keys: &[&str]) -> BTreeSet<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

fn attribute(path: &[&str]) -> ResolvedContext {
    ResolvedContext::Attribute {
        path: path.iter().map(|k| k.to_string()).collect(),
    }
}

/// Minimal editor double: a fixed cursor, one prepared token, and a log
/// of the edits the engine applies.
struct MockEditor {
    cursor: Position,
    token: Option<Token>,
    replacements: Vec<(String, Position, Position)>,
    cursor_moves: Vec<Position>,
    hint_requests: usize,
}

impl MockEditor {
    fn new(cursor: Position, token: Option<Token>) -> Self {
        Self {
            cursor,
            token,
            replacements: Vec::new(),
            cursor_moves: Vec::new(),
            hint_requests: 0,
        }
    }
}

impl Editor for MockEditor {
    fn cursor(&self) -> Position {
        self.cursor
    }

    fn token_at(&self, _position: Position) -> Option<Token> {
        self.token.clone()
    }

    fn replace_range(&mut self, text: &str, from: Position, to: Position) {
        self.replacements.push((text.to_string(), from, to));
    }

    fn set_cursor(&mut self, position: Position) {
        self.cursor_moves.push(position);
    }

    fn show_hint(&mut self) {
        self.hint_requests += 1;
    }
}

// ---------------------------------------------------------------------
// Discovery
// ---------------------------------------------------------------------

#[test]
fn test_discover_without_context_is_empty() {
    let index = store_index();
    let mut cache = DiscoveryCache::new();

    let candidates = discover(&index, None, &mut cache).unwrap();
    assert!(candidates.is_empty());
    assert!(cache.is_empty(), "nothing should be memoized for no context");
}

#[test]
fn test_discover_at_root_excludes_placeholders() {
    let index = store_index();
    let mut cache = DiscoveryCache::new();

    let candidates = discover(&index, Some(&attribute(&[])), &mut cache).unwrap();
    assert_eq!(candidates, set(&["customer/id", "store/open-hours"]));
}

#[test]
fn test_discover_under_join_excludes_ignored() {
    let index = store_index();
    let mut cache = DiscoveryCache::new();

    let candidates = discover(&index, Some(&attribute(&["customer/id"])), &mut cache).unwrap();
    assert_eq!(
        candidates,
        set(&["customer/email", "customer/name", "customer/orders"])
    );
}

#[test]
fn test_discover_filters_placeholder_path_segments() {
    let index = store_index();
    let mut cache = DiscoveryCache::new();

    let with_placeholder =
        discover(&index, Some(&attribute(&[">/draft", "customer/id"])), &mut cache).unwrap();
    let without = discover(&index, Some(&attribute(&["customer/id"])), &mut cache).unwrap();
    assert_eq!(with_placeholder, without);
    assert_eq!(cache.len(), 1, "both queries share one cache entry");
}

#[test]
fn test_discover_ident_context_minus_ignored() {
    let index = StaticIndex::builder()
        .ident("customer/id")
        .ident("order/id")
        .ignore("order/id")
        .build();
    let mut cache = DiscoveryCache::new();

    let candidates = discover(&index, Some(&ResolvedContext::Ident), &mut cache).unwrap();
    assert_eq!(candidates, set(&["customer/id"]));
}

#[test]
fn test_discover_is_idempotent() {
    let index = store_index();
    let mut cache = DiscoveryCache::new();
    let context = attribute(&["customer/id"]);

    let first = discover(&index, Some(&context), &mut cache).unwrap();
    let second = discover(&index, Some(&context), &mut cache).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_discover_malformed_index_is_empty() {
    let index = MockIndex::new(store_index())
        .with_reachable_error(SchemaError::MalformedIndex("not a map".to_string()));
    let mut cache = DiscoveryCache::new();

    let candidates = discover(&index, Some(&attribute(&[])), &mut cache).unwrap();
    assert!(candidates.is_empty());
}

#[test]
fn test_discover_hook_failure_propagates() {
    let index = MockIndex::new(store_index())
        .with_reachable_error(SchemaError::HookFailure("connection reset".to_string()));
    let mut cache = DiscoveryCache::new();

    let err = discover(&index, Some(&attribute(&[])), &mut cache).unwrap_err();
    assert!(matches!(err, SchemaError::HookFailure(_)));
}

// ---------------------------------------------------------------------
// Cache
// ---------------------------------------------------------------------

#[test]
fn test_repeat_discovery_hits_the_cache() {
    let index = MockIndex::new(store_index());
    let mut cache = DiscoveryCache::new();
    let context = attribute(&["customer/id"]);

    discover(&index, Some(&context), &mut cache).unwrap();
    assert_eq!(index.reachable_calls(), 1);

    discover(&index, Some(&context), &mut cache).unwrap();
    assert_eq!(index.reachable_calls(), 1, "second call must be served from cache");

    discover(&index, Some(&attribute(&[])), &mut cache).unwrap();
    assert_eq!(index.reachable_calls(), 2, "a different path is a different query");
}

#[test]
fn test_new_index_instance_invalidates_cache() {
    let mut cache = DiscoveryCache::new();

    let old_index = StaticIndex::builder().ident("customer/id").build();
    let candidates = discover(&old_index, Some(&ResolvedContext::Ident), &mut cache).unwrap();
    assert_eq!(candidates, set(&["customer/id"]));

    let new_index = StaticIndex::builder().ident("order/id").build();
    let candidates = discover(&new_index, Some(&ResolvedContext::Ident), &mut cache).unwrap();
    assert_eq!(
        candidates,
        set(&["order/id"]),
        "a rebuilt index must not serve stale identities"
    );
}

// ---------------------------------------------------------------------
// complete
// ---------------------------------------------------------------------

#[test]
fn test_blank_trigger_pops_the_full_list() {
    let index = store_index();
    let mut cache = DiscoveryCache::new();
    let token = Token::new("[", 0, 1, TokenKind::Other, root_attr_list());
    let cursor = Position::new(0, 1);

    let result = complete(&index, cursor, &token, "[", &mut cache)
        .unwrap()
        .unwrap();
    assert_eq!(result.candidates, vec!["customer/id", "store/open-hours"]);
    assert_eq!(result.from, cursor, "blank trigger inserts, replaces nothing");
    assert_eq!(result.to, cursor);
}

#[test]
fn test_fragment_narrows_and_spans_the_token() {
    let index = store_index();
    let mut cache = DiscoveryCache::new();
    let token = atom_token("cust", 1, root_attr_list());
    let cursor = Position::new(0, 5);

    let result = complete(&index, cursor, &token, "cust", &mut cache)
        .unwrap()
        .unwrap();
    assert_eq!(result.candidates, vec!["customer/id"]);
    assert_eq!(result.from, Position::new(0, 1));
    assert_eq!(result.to, Position::new(0, 5));
}

#[test]
fn test_cursor_mid_token_replaces_to_token_end() {
    let index = store_index();
    let mut cache = DiscoveryCache::new();
    let token = atom_token("cust", 1, root_attr_list());
    let cursor = Position::new(0, 3);

    let fragment = token.text_before(cursor.ch);
    assert_eq!(fragment, "cu");

    let result = complete(&index, cursor, &token, fragment, &mut cache)
        .unwrap()
        .unwrap();
    assert_eq!(result.from, Position::new(0, 1));
    assert_eq!(result.to, Position::new(0, 5), "replacement must cover the whole token");
}

#[test]
fn test_candidates_are_ranked_best_first() {
    let index = StaticIndex::builder()
        .root_attrs(["carts/user-total", "last-customer/id", "customer/id"])
        .build();
    let mut cache = DiscoveryCache::new();
    let token = atom_token("cust", 0, root_attr_list());

    let result = complete(&index, Position::new(0, 4), &token, "cust", &mut cache)
        .unwrap()
        .unwrap();
    assert_eq!(
        result.candidates,
        vec!["customer/id", "last-customer/id", "carts/user-total"]
    );
}

#[test]
fn test_empty_after_exclusion_suppresses_popup() {
    let index = StaticIndex::builder()
        .root_attrs(["secret/x"])
        .ignore("secret/x")
        .build();
    let mut cache = DiscoveryCache::new();
    let token = Token::new("[", 0, 1, TokenKind::Other, root_attr_list());

    let result = complete(&index, Position::new(0, 1), &token, "[", &mut cache).unwrap();
    assert_eq!(result, None, "no popup, not an empty popup");
}

#[test]
fn test_non_matching_fragment_keeps_empty_popup() {
    let index = store_index();
    let mut cache = DiscoveryCache::new();
    let token = atom_token("zzz", 1, root_attr_list());

    let result = complete(&index, Position::new(0, 4), &token, "zzz", &mut cache)
        .unwrap()
        .unwrap();
    assert!(result.candidates.is_empty(), "candidates existed, the fragment filtered them");
    assert_eq!(result.from, Position::new(0, 1));
    assert_eq!(result.to, Position::new(0, 4));
}

#[test]
fn test_ignored_candidate_never_appears() {
    let index = store_index();
    let mut cache = DiscoveryCache::new();
    let token = atom_token(
        "customer/internal-notes",
        1,
        attr_list_under(&["customer/id"]),
    );
    let cursor = Position::new(0, 24);

    let result = complete(&index, cursor, &token, "customer/internal-notes", &mut cache)
        .unwrap()
        .unwrap();
    assert!(
        !result
            .candidates
            .contains(&"customer/internal-notes".to_string()),
        "a perfect fuzzy score must not override the ignore list"
    );
}

#[test]
fn test_unresolvable_position_suppresses_popup() {
    let index = store_index();
    let mut cache = DiscoveryCache::new();
    let token = Token::new("\"text\"", 0, 6, TokenKind::Other, ModeState::new(Mode::Other));

    let result = complete(&index, Position::new(0, 6), &token, "", &mut cache).unwrap();
    assert_eq!(result, None);
}

#[test]
fn test_ident_position_completes_identities() {
    let index = store_index();
    let mut cache = DiscoveryCache::new();
    let token = atom_token("cust", 1, ModeState::new(Mode::Ident));

    let result = complete(&index, Position::new(0, 5), &token, "cust", &mut cache)
        .unwrap()
        .unwrap();
    assert_eq!(result.candidates, vec!["customer/id"]);
}

#[test]
fn test_hook_failure_surfaces_an_error() {
    let index = MockIndex::new(store_index())
        .with_reachable_error(SchemaError::HookFailure("connection reset".to_string()));
    let mut cache = DiscoveryCache::new();
    let token = atom_token("cust", 1, root_attr_list());

    let err = complete(&index, Position::new(0, 5), &token, "cust", &mut cache).unwrap_err();
    assert!(err.should_return_empty(), "the editor shows nothing; the caller logs");
}

#[test]
fn test_malformed_index_completes_with_no_popup() {
    let index = MockIndex::new(store_index())
        .with_reachable_error(SchemaError::MalformedIndex("not a map".to_string()));
    let mut cache = DiscoveryCache::new();
    let token = atom_token("cust", 1, root_attr_list());

    let result = complete(&index, Position::new(0, 5), &token, "cust", &mut cache).unwrap();
    assert_eq!(result, None);
}

// ---------------------------------------------------------------------
// key_has_children
// ---------------------------------------------------------------------

#[test]
fn test_key_with_reachable_children() {
    let index = store_index();
    let mut cache = DiscoveryCache::new();
    let root = attribute(&[]);

    assert!(key_has_children(&index, &mut cache, Some(&root), "customer/id"));
}

#[test]
fn test_leaf_key_has_no_children() {
    let index = store_index();
    let mut cache = DiscoveryCache::new();
    let root = attribute(&[]);

    assert!(!key_has_children(&index, &mut cache, Some(&root), "store/open-hours"));
}

#[test]
fn test_placeholder_key_always_expands() {
    let index = store_index();
    let mut cache = DiscoveryCache::new();

    assert!(key_has_children(&index, &mut cache, None, ">/draft"));
}

#[test]
fn test_ident_context_keys_do_not_expand() {
    let index = store_index();
    let mut cache = DiscoveryCache::new();

    assert!(!key_has_children(
        &index,
        &mut cache,
        Some(&ResolvedContext::Ident),
        "customer/id"
    ));
}

#[test]
fn test_child_probe_errors_mean_leaf() {
    let index = MockIndex::new(store_index())
        .with_reachable_error(SchemaError::HookFailure("connection reset".to_string()));
    let mut cache = DiscoveryCache::new();
    let root = attribute(&[]);

    assert!(!key_has_children(&index, &mut cache, Some(&root), "customer/id"));
}

// ---------------------------------------------------------------------
// Editor commands
// ---------------------------------------------------------------------

#[test]
fn test_completion_at_cursor_runs_the_pipeline() {
    let index = store_index();
    let mut cache = DiscoveryCache::new();
    let editor = MockEditor::new(
        Position::new(0, 5),
        Some(atom_token("cust", 1, root_attr_list())),
    );

    let result = completion_at_cursor(&editor, &index, &mut cache, &EngineOptions::default())
        .unwrap()
        .unwrap();
    assert_eq!(result.candidates, vec!["customer/id"]);
    assert_eq!(result.from, Position::new(0, 1));
    assert_eq!(result.to, Position::new(0, 5));
}

#[test]
fn test_completion_at_cursor_without_token() {
    let index = store_index();
    let mut cache = DiscoveryCache::new();
    let editor = MockEditor::new(Position::new(0, 0), None);

    let result =
        completion_at_cursor(&editor, &index, &mut cache, &EngineOptions::default()).unwrap();
    assert_eq!(result, None);
}

#[test]
fn test_max_candidates_caps_the_popup() {
    let index = store_index();
    let mut cache = DiscoveryCache::new();
    let editor = MockEditor::new(
        Position::new(0, 1),
        Some(Token::new("[", 0, 1, TokenKind::Other, root_attr_list())),
    );
    let options = EngineOptions::new().with_max_candidates(1);

    let result = completion_at_cursor(&editor, &index, &mut cache, &options)
        .unwrap()
        .unwrap();
    assert_eq!(result.candidates, vec!["customer/id"]);
}

#[test]
fn test_expand_join_at_line_start() {
    let state = ModeState::new(Mode::AttrList).with_indent(2);
    let token = composite_token("customer/orders", 2, state);
    let mut editor = MockEditor::new(Position::new(4, 10), Some(token));

    assert!(expand_join(&mut editor));
    assert_eq!(
        editor.replacements,
        vec![(
            "{customer/orders\n   []}".to_string(),
            Position::new(4, 2),
            Position::new(4, 17),
        )]
    );
    assert_eq!(editor.cursor_moves, vec![Position::new(5, 4)]);
    assert_eq!(editor.hint_requests, 1, "expansion re-opens the popup inside the join");
}

#[test]
fn test_expand_join_inline() {
    let state = ModeState::new(Mode::AttrList).with_indent(2);
    let token = composite_token("customer/orders", 4, state);
    let mut editor = MockEditor::new(Position::new(4, 10), Some(token));

    assert!(expand_join(&mut editor));
    assert_eq!(
        editor.replacements,
        vec![(
            "{customer/orders []}".to_string(),
            Position::new(4, 4),
            Position::new(4, 19),
        )]
    );
    assert_eq!(editor.cursor_moves, vec![Position::new(4, 22)]);
}

#[test]
fn test_expand_join_rejects_plain_atoms() {
    let token = atom_token("customer/orders", 2, root_attr_list());
    let mut editor = MockEditor::new(Position::new(4, 10), Some(token));

    assert!(!expand_join(&mut editor));
    assert!(editor.replacements.is_empty());
    assert_eq!(editor.hint_requests, 0);
}

#[test]
fn test_expand_join_rejects_other_modes() {
    let token = composite_token("customer/orders", 2, ModeState::new(Mode::Join));
    let mut editor = MockEditor::new(Position::new(4, 10), Some(token));

    assert!(!expand_join(&mut editor));
    assert!(editor.replacements.is_empty());
}
