// File: src/core/store.rs
use crate::core::normalize::normalize;
use crate::core::types::{Token, TranslationEntry};
use crate::seed::Seed;
use indexmap::IndexMap;

/// Source phrase -> translations, in insertion order.
/// Entries are only ever added or extended.
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    entries: IndexMap<Token, TranslationEntry>,
}

impl TranslationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from raw seed data, normalizing every phrase.
    /// Vote counts are kept as given. Duplicate phrases after
    /// normalization keep the first count seen.
    pub fn from_seed(seed: &Seed) -> Self {
        let mut store = Self::new();
        for (source, languages) in seed {
            let entry = store.entry_or_create(normalize(source));
            for (&language, translations) in languages {
                entry.language_mut(language);
                for (translation, &votes) in translations {
                    entry.insert_with_votes(language, normalize(translation), votes);
                }
            }
        }
        store
    }

    pub fn get(&self, source: &str) -> Option<&TranslationEntry> {
        self.entries.get(source)
    }

    pub fn contains(&self, source: &str) -> bool {
        self.entries.contains_key(source)
    }

    /// Returns the entry for `source`, creating an empty one if needed.
    pub fn entry_or_create(&mut self, source: Token) -> &mut TranslationEntry {
        self.entries.entry(source).or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Token, &TranslationEntry)> {
        self.entries.iter()
    }

    /// Every source phrase followed by its translations, in store order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.entries.iter().flat_map(|(source, entry)| {
            std::iter::once(source).chain(
                entry
                    .languages()
                    .flat_map(|(_, translations)| translations.keys()),
            )
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
