use crate::core::resolver;
use crate::core::store::TranslationStore;
use crate::core::types::{Language, Token, VoteCount};
use crate::core::vocab::VocabularyIndex;
use crate::error::TalkieError;
use crate::learning::{LearningEngine, TeachOutcome, TeachRequest};
use crate::seed::{builtin_seed, load_seed, Seed};
use indexmap::IndexMap;
use std::path::Path;
use tracing::info;

// The translator owns all dictionary state. Callers that share it across
// threads serialize access themselves (the server wraps it in a Mutex).
#[derive(Debug)]
pub struct TranslatorEngine {
    store: TranslationStore,
    vocab: VocabularyIndex,
    learning_engine: LearningEngine,
}

impl Default for TranslatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslatorEngine {
    /// An engine holding the built-in dictionary.
    pub fn new() -> Self {
        Self::from_seed(&builtin_seed())
    }

    pub fn from_seed(seed: &Seed) -> Self {
        let store = TranslationStore::from_seed(seed);
        let mut vocab = VocabularyIndex::new();
        for token in store.tokens() {
            vocab.ensure(token);
        }
        Self {
            store,
            vocab,
            learning_engine: LearningEngine::new(),
        }
    }

    /// Loads the seed file at `path`, or the built-in dictionary when none is given.
    pub fn from_seed_file_or_builtin(path: Option<&Path>) -> Result<Self, TalkieError> {
        let engine = match path {
            Some(path) => {
                let engine = Self::from_seed(&load_seed(path)?);
                info!(path = %path.display(), entries = engine.store.len(), "loaded seed file");
                engine
            }
            None => Self::new(),
        };
        Ok(engine)
    }

    pub fn resolve(&self, phrase: &str, target: Language) -> Option<String> {
        resolver::resolve(&self.store, phrase, target)
    }

    pub fn resolve_combined(&self, phrase: &str, target: Language) -> Option<String> {
        resolver::resolve_combined(&self.store, phrase, target)
    }

    pub fn translate_all(&self, phrase: &str) -> IndexMap<Language, String> {
        resolver::translate_all(&self.store, phrase)
    }

    pub fn top_translation(&self, phrase: &str, language: Language) -> Option<(Token, VoteCount)> {
        resolver::top_translation(&self.store, phrase, language)
    }

    pub fn teach(&mut self, request: &TeachRequest) -> TeachOutcome {
        self.learning_engine
            .learn(&mut self.store, &mut self.vocab, request)
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    pub fn vocab(&self) -> &VocabularyIndex {
        &self.vocab
    }
}
