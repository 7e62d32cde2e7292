// File: src/core/normalize.rs
use crate::core::types::Token;
use regex::Regex;
use std::sync::LazyLock;

/// Characters stripped from both ends of a phrase.
const BOUNDARY_CHARS: &[char] = &[' ', '?', '!', '¡', '¿', '.', ',', ';'];

/// Word characters, whitespace and a little punctuation. Enough for whole phrases.
static VALID_TRANSLATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\s?¿!¡,.\-]+$").expect("valid translation pattern"));

static SEGMENT_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,.?!;]+").expect("valid segment pattern"));

/// Lowercases `text` and trims boundary punctuation and spaces.
pub fn normalize(text: &str) -> Token {
    Token::from_normalized(text.to_lowercase().trim_matches(BOUNDARY_CHARS).to_string())
}

/// Whether a raw translation may be taught.
pub fn is_valid_translation(text: &str) -> bool {
    VALID_TRANSLATION.is_match(text)
}

/// Splits a multi-clause phrase on runs of `, . ? ! ;`.
/// Segments are trimmed and empty ones dropped.
pub fn split_segments(phrase: &str) -> Vec<&str> {
    SEGMENT_SEPARATOR
        .split(phrase)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}
