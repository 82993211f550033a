// Copyright (c) 2025 PathQL contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Builders for nesting-frame chains and tokens
//!
//! Tests describe cursor positions as the frame chain the tokenizer would
//! attach to the token there; these helpers build the common shapes.

use pathql_complete_token::{Mode, ModeState, Token, TokenKind};

/// Chain for a cursor in the top-level attribute list
pub fn root_attr_list() -> ModeState {
    ModeState::new(Mode::AttrList)
}

/// Chain for a cursor in the attribute list nested under the given join
/// keys, outermost join first
///
/// `attr_list_under(&["customer/id", "customer/orders"])` is the position
/// marked `|` in `[{:customer/id [{:customer/orders [|]}]}]`.
pub fn attr_list_under(keys: &[&str]) -> ModeState {
    let mut state = root_attr_list();
    for key in keys {
        state = ModeState::new(Mode::AttrList)
            .with_previous(ModeState::new(Mode::Join).with_key(*key).with_previous(state));
    }
    state
}

/// Atom token spanning `start .. start + chars` on its line
pub fn atom_token(text: &str, start: u32, state: ModeState) -> Token {
    let end = start + text.chars().count() as u32;
    Token::new(text, start, end, TokenKind::Atom, state)
}

/// Composite-atom token, eligible for join expansion
pub fn composite_token(text: &str, start: u32, state: ModeState) -> Token {
    let end = start + text.chars().count() as u32;
    Token::new(text, start, end, TokenKind::CompositeAtom, state)
}
