// File: src/learning.rs
use crate::core::normalize::{is_valid_translation, normalize};
use crate::core::store::TranslationStore;
use crate::core::types::{Language, Token};
use crate::core::vocab::VocabularyIndex;
use indexmap::IndexMap;
use tracing::{debug, warn};

/// A phrase and the raw translations a user wants to contribute for it.
#[derive(Debug, Clone)]
pub struct TeachRequest {
    pub phrase: String,
    pub translations: IndexMap<Language, Vec<String>>,
}

impl TeachRequest {
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            translations: IndexMap::new(),
        }
    }

    pub fn with(mut self, language: Language, translations: &[&str]) -> Self {
        self.translations
            .entry(language)
            .or_default()
            .extend(translations.iter().map(|t| t.to_string()));
        self
    }
}

/// What a teach call changed. Not surfaced to chat users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeachOutcome {
    pub key: Token,
    pub added: usize,
    pub rejected: usize,
}

/// The only writer of the store and the vocabulary.
#[derive(Debug, Default)]
pub struct LearningEngine;

impl LearningEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn learn(
        &self,
        store: &mut TranslationStore,
        vocab: &mut VocabularyIndex,
        request: &TeachRequest,
    ) -> TeachOutcome {
        let key = normalize(&request.phrase);
        debug!(key = %key, "teaching phrase");
        vocab.ensure(&key);

        let entry = store.entry_or_create(key.clone());
        let mut added = 0;
        let mut rejected = 0;

        for (&language, raw_translations) in &request.translations {
            entry.language_mut(language);
            for raw in raw_translations {
                if !is_valid_translation(raw) {
                    warn!(translation = %raw, "rejected translation with disallowed characters");
                    rejected += 1;
                    continue;
                }
                let translation = normalize(raw);
                vocab.ensure(&translation);
                if entry.insert(language, translation) {
                    added += 1;
                }
            }
        }

        debug!(key = %key, ?entry, "entry updated");
        TeachOutcome { key, added, rejected }
    }
}
