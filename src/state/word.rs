//! The word-building state machine.
//!
//! A `WordState` is an immutable snapshot of the click history. Each click
//! produces a new snapshot:
//!
//! ```text
//!   ┌────────────┐  click(unused)   ┌───────────────┐
//!   │  0 clicked ├─────────────────►│  1..n clicked │◄──┐ click(unused): append
//!   └────────────┘                  └──────┬────────┘   │
//!                                          │ click(used at i): keep 0..=i
//!                                          └────────────┘
//! ```
//!
//! The used set is never stored. It is computed from the click order, so the
//! two can't drift apart.
use std::collections::HashSet;

use crate::token::{LetterToken, TokenId, find_token};

/// What a click did to the word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The letter was unused and got appended
    Appended,
    /// The letter was already used; everything clicked after it was dropped
    Rewound { discarded: usize },
    /// The id is not part of the current token set
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordState {
    click_order: Vec<TokenId>,
    letters: Vec<char>,
}

impl WordState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one click and returns the resulting snapshot.
    ///
    /// `tokens` is the current token set; ids outside it are ignored.
    pub fn click(&self, tokens: &[LetterToken], id: TokenId) -> (Self, ClickOutcome) {
        let Some(token) = find_token(tokens, id) else {
            return (self.clone(), ClickOutcome::Ignored);
        };

        let next = match self.position_of(id) {
            Some(index) => {
                let keep = index + 1;
                let discarded = self.click_order.len() - keep;
                let next = Self {
                    click_order: self.click_order[..keep].to_vec(),
                    letters: self.letters[..keep].to_vec(),
                };
                (next, ClickOutcome::Rewound { discarded })
            }
            None => {
                let mut next = self.clone();
                next.click_order.push(id);
                next.letters.push(token.letter());
                (next, ClickOutcome::Appended)
            }
        };

        debug_assert!(
            next.0.check_invariants(tokens),
            "word state out of sync with click order: {:?}",
            next.0
        );
        next
    }

    pub fn click_order(&self) -> &[TokenId] {
        &self.click_order
    }

    /// The built word, one letter per clicked token
    pub fn word(&self) -> String {
        self.letters.iter().collect()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.click_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.click_order.is_empty()
    }

    pub fn is_used(&self, id: TokenId) -> bool {
        self.click_order.contains(&id)
    }

    /// Ids of every clicked token, derived from the click order
    pub fn used_ids(&self) -> HashSet<TokenId> {
        self.click_order.iter().copied().collect()
    }

    pub fn position_of(&self, id: TokenId) -> Option<usize> {
        self.click_order.iter().position(|clicked| *clicked == id)
    }

    /// True once every token in a non-empty set has been clicked
    pub fn is_complete(&self, token_count: usize) -> bool {
        token_count > 0 && self.click_order.len() == token_count
    }

    /// Checks that the snapshot agrees with `tokens`: no repeated ids, one
    /// letter per click and each letter matching its token.
    pub fn check_invariants(&self, tokens: &[LetterToken]) -> bool {
        if self.click_order.len() != self.letters.len() {
            return false;
        }
        if self.used_ids().len() != self.click_order.len() {
            return false;
        }
        self.click_order
            .iter()
            .zip(&self.letters)
            .all(|(id, letter)| find_token(tokens, *id).is_some_and(|t| t.letter() == *letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<LetterToken> {
        text.chars()
            .enumerate()
            .map(|(i, c)| LetterToken::new(c, i as f32 * 10.0))
            .collect()
    }

    #[test]
    fn test_click_appends() {
        let tokens = tokens("dog");
        let state = WordState::new();

        let (state, outcome) = state.click(&tokens, tokens[2].id());
        assert_eq!(outcome, ClickOutcome::Appended);
        let (state, _) = state.click(&tokens, tokens[1].id());

        assert_eq!(state.word(), "go");
        assert_eq!(state.click_order(), &[tokens[2].id(), tokens[1].id()]);
        assert!(state.is_used(tokens[1].id()));
        assert!(!state.is_used(tokens[0].id()));
    }

    #[test]
    fn test_click_used_rewinds() {
        let tokens = tokens("bird");
        let mut state = WordState::new();
        for token in &tokens {
            state = state.click(&tokens, token.id()).0;
        }
        assert!(state.is_complete(tokens.len()));

        let (state, outcome) = state.click(&tokens, tokens[1].id());
        assert_eq!(outcome, ClickOutcome::Rewound { discarded: 2 });
        assert_eq!(state.word(), "bi");
        assert_eq!(state.used_ids().len(), 2);
        assert!(!state.is_complete(tokens.len()));
    }

    #[test]
    fn test_rewind_to_first_keeps_it() {
        let tokens = tokens("ox");
        let (state, _) = WordState::new().click(&tokens, tokens[0].id());
        let (state, outcome) = state.click(&tokens, tokens[0].id());

        assert_eq!(outcome, ClickOutcome::Rewound { discarded: 0 });
        assert_eq!(state.click_order(), &[tokens[0].id()]);
        assert_eq!(state.word(), "o");
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let tokens = tokens("hi");
        let (state, _) = WordState::new().click(&tokens, tokens[0].id());
        let (next, outcome) = state.click(&tokens, TokenId::random());

        assert_eq!(outcome, ClickOutcome::Ignored);
        assert_eq!(next, state);
    }

    #[test]
    fn test_snapshots_are_independent() {
        let tokens = tokens("ab");
        let before = WordState::new();
        let (after, _) = before.click(&tokens, tokens[0].id());
        assert!(before.is_empty());
        assert_eq!(after.len(), 1);
    }
}
