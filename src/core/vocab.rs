// --- File: src/core/vocab.rs
use crate::core::types::{Token, TokenId};
use std::collections::HashMap;

/// Dense, append-only numbering of every token the dictionary has seen.
/// Indices are handed out in order and never reused.
#[derive(Debug, Clone, Default)]
pub struct VocabularyIndex {
    ids: HashMap<Token, TokenId>,
    tokens: Vec<Token>,
}

impl VocabularyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `token`, assigning the next free one if it is new.
    pub fn ensure(&mut self, token: &Token) -> TokenId {
        if let Some(&id) = self.ids.get(token) {
            return id;
        }
        let id = self.tokens.len();
        self.tokens.push(token.clone());
        self.ids.insert(token.clone(), id);
        id
    }

    pub fn index_of(&self, token: &str) -> Option<TokenId> {
        self.ids.get(token).copied()
    }

    pub fn token_at(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.ids.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
