// src/core/types.rs
use crate::error::TalkieError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Weight attached to a single translation. Starts at zero and is never decremented.
pub type VoteCount = u32;

/// A unique identifier for a token in the vocabulary.
pub type TokenId = usize;

/// A normalized (lowercased, punctuation-trimmed) string.
/// Only `normalize` builds these, so every `Token` is already in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(String);

impl Token {
    pub(crate) fn from_normalized(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Languages the dictionary knows about.
/// `Spanish` is the source language: store keys are Spanish phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "english")]
    English,
    #[serde(rename = "french")]
    French,
    #[serde(rename = "german")]
    German,
    #[serde(rename = "russian")]
    Russian,
    #[serde(rename = "español")]
    Spanish,
}

impl Language {
    /// The language store keys are written in. Reverse lookups into it
    /// return the source phrase itself.
    pub const SOURCE: Language = Language::Spanish;

    /// The four languages translations are kept for.
    pub const TARGETS: [Language; 4] = [
        Language::English,
        Language::French,
        Language::German,
        Language::Russian,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::French => "french",
            Language::German => "german",
            Language::Russian => "russian",
            Language::Spanish => "español",
        }
    }

    /// Identifier with its first letter upper-cased, as shown in chat replies.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::German => "German",
            Language::Russian => "Russian",
            Language::Spanish => "Español",
        }
    }

    /// Parses a language identifier in English or Spanish spelling
    /// (`english`/`inglés`, `french`/`francés`, `german`/`alemán`,
    /// `russian`/`ruso`, `español`), ignoring case.
    pub fn from_alias(id: &str) -> Result<Language, TalkieError> {
        match id.to_lowercase().as_str() {
            "inglés" | "english" => Ok(Language::English),
            "español" => Ok(Language::Spanish),
            "francés" | "french" => Ok(Language::French),
            "alemán" | "german" => Ok(Language::German),
            "ruso" | "russian" => Ok(Language::Russian),
            _ => Err(TalkieError::UnknownLanguage(id.to_string())),
        }
    }

    /// Like `from_alias`, but unrecognized identifiers fall back to English.
    pub fn from_native(id: &str) -> Language {
        Language::from_alias(id).unwrap_or(Language::English)
    }
}

impl FromStr for Language {
    type Err = TalkieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_alias(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// English dialects with known phrase alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Dialect {
    #[default]
    #[serde(rename = "americano")]
    American,
    #[serde(rename = "british")]
    British,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::American, Dialect::British];

    pub fn id(self) -> &'static str {
        match self {
            Dialect::American => "americano",
            Dialect::British => "british",
        }
    }
}

impl FromStr for Dialect {
    type Err = TalkieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "americano" => Ok(Dialect::American),
            "british" => Ok(Dialect::British),
            _ => Err(TalkieError::UnknownDialect(s.to_string())),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// All known translations of one source phrase, grouped by language.
/// Both levels keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationEntry {
    languages: IndexMap<Language, IndexMap<Token, VoteCount>>,
}

impl TranslationEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translations(&self, language: Language) -> Option<&IndexMap<Token, VoteCount>> {
        self.languages.get(&language)
    }

    pub fn languages(&self) -> impl Iterator<Item = (Language, &IndexMap<Token, VoteCount>)> {
        self.languages.iter().map(|(lang, map)| (*lang, map))
    }

    /// Makes sure a (possibly empty) translation map exists for `language`.
    pub fn language_mut(&mut self, language: Language) -> &mut IndexMap<Token, VoteCount> {
        self.languages.entry(language).or_default()
    }

    /// Inserts `translation` with zero votes unless it is already present.
    /// Returns whether the translation was new.
    pub fn insert(&mut self, language: Language, translation: Token) -> bool {
        self.insert_with_votes(language, translation, 0)
    }

    pub(crate) fn insert_with_votes(
        &mut self,
        language: Language,
        translation: Token,
        votes: VoteCount,
    ) -> bool {
        let map = self.language_mut(language);
        if map.contains_key(&translation) {
            return false;
        }
        map.insert(translation, votes);
        true
    }

    /// The most voted translation for `language`. Ties go to the earliest inserted.
    pub fn top(&self, language: Language) -> Option<(&Token, VoteCount)> {
        let mut best: Option<(&Token, VoteCount)> = None;
        for (token, &votes) in self.languages.get(&language)? {
            match best {
                Some((_, best_votes)) if votes <= best_votes => {}
                _ => best = Some((token, votes)),
            }
        }
        best
    }
}
