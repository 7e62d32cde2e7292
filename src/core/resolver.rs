// File: src/core/resolver.rs
use crate::core::normalize::{normalize, split_segments};
use crate::core::store::TranslationStore;
use crate::core::types::{Language, Token, TranslationEntry, VoteCount};
use indexmap::IndexMap;
use tracing::debug;

/// Renders `"t (votos: n)"` items joined by `", "`. `None` when there is nothing to show.
fn render(translations: &IndexMap<Token, VoteCount>) -> Option<String> {
    if translations.is_empty() {
        return None;
    }
    let items: Vec<String> = translations
        .iter()
        .map(|(translation, votes)| format!("{translation} (votos: {votes})"))
        .collect();
    Some(items.join(", "))
}

fn render_entry(entry: &TranslationEntry, target: Language) -> Option<String> {
    entry.translations(target).and_then(render)
}

fn accumulated(source: &Token) -> String {
    format!("{source} (votos acumulados)")
}

/// Finds the first source phrase (in store order) that lists `key` as a
/// translation in any language.
fn reverse_match<'a>(
    store: &'a TranslationStore,
    key: &str,
) -> Option<(&'a Token, &'a TranslationEntry)> {
    store.iter().find(|(_, entry)| {
        entry
            .languages()
            .any(|(_, translations)| translations.keys().any(|t| t.as_str() == key))
    })
}

/// Translates `phrase` into `target`.
///
/// A known source phrase is rendered directly. Otherwise the phrase is
/// looked up among stored translations and resolved through the first
/// source phrase that lists it.
pub fn resolve(store: &TranslationStore, phrase: &str, target: Language) -> Option<String> {
    let key = normalize(phrase);

    if let Some(rendered) = store
        .get(key.as_str())
        .and_then(|entry| render_entry(entry, target))
    {
        debug!(key = %key, %target, "forward match");
        return Some(rendered);
    }

    let (source, entry) = reverse_match(store, key.as_str())?;
    debug!(key = %key, source = %source, %target, "reverse match");
    if target == Language::SOURCE {
        return Some(accumulated(source));
    }
    Some(render_entry(entry, target).unwrap_or_else(|| accumulated(source)))
}

/// Resolves each clause of `phrase` on its own. Unknown clauses come back
/// as `[clause]`; if none resolve, the whole result is `None`.
pub fn resolve_combined(store: &TranslationStore, phrase: &str, target: Language) -> Option<String> {
    let mut parts = Vec::new();
    let mut any_resolved = false;

    for segment in split_segments(phrase) {
        match resolve(store, segment, target) {
            Some(rendered) => {
                any_resolved = true;
                parts.push(rendered);
            }
            None => parts.push(format!("[{segment}]")),
        }
    }

    any_resolved.then(|| parts.join(", "))
}

/// Resolves a known source phrase into every target language it has translations for.
pub fn translate_all(store: &TranslationStore, phrase: &str) -> IndexMap<Language, String> {
    let key = normalize(phrase);
    if !store.contains(key.as_str()) {
        return IndexMap::new();
    }
    Language::TARGETS
        .into_iter()
        .filter_map(|language| resolve(store, key.as_str(), language).map(|r| (language, r)))
        .collect()
}

/// Highest-voted translation of a source phrase.
pub fn top_translation(
    store: &TranslationStore,
    phrase: &str,
    language: Language,
) -> Option<(Token, VoteCount)> {
    let key = normalize(phrase);
    let (token, votes) = store.get(key.as_str())?.top(language)?;
    Some((token.clone(), votes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{builtin_seed, parse_seed};
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> TranslationStore {
        TranslationStore::from_seed(&builtin_seed())
    }

    #[rstest]
    fn forward_lookup_renders_all_translations(store: TranslationStore) {
        assert_eq!(
            resolve(&store, "¡Viajar!", Language::English).as_deref(),
            Some("travel (votos: 2), trip (votos: 1), journey (votos: 1)")
        );
    }

    #[rstest]
    fn reverse_lookup_to_source_language(store: TranslationStore) {
        assert_eq!(
            resolve(&store, "hello", Language::SOURCE).as_deref(),
            Some("hola (votos acumulados)")
        );
    }

    #[rstest]
    fn reverse_lookup_across_languages(store: TranslationStore) {
        assert_eq!(
            resolve(&store, "Salut", Language::German).as_deref(),
            Some("hallo (votos: 2)")
        );
    }

    #[rstest]
    fn reverse_lookup_without_target_falls_back_to_source() {
        let store = TranslationStore::from_seed(
            &parse_seed(r#"{"gato": {"english": {"cat": 1}}}"#).unwrap(),
        );
        assert_eq!(
            resolve(&store, "cat", Language::Russian).as_deref(),
            Some("gato (votos acumulados)")
        );
    }

    #[rstest]
    fn reverse_lookup_returns_first_match_in_store_order() {
        let store = TranslationStore::from_seed(
            &parse_seed(
                r#"{"hola": {"english": {"hi": 0}, "french": {"salut": 1}},
                    "buenas": {"english": {"hi": 0}, "french": {"bonjour": 1}}}"#,
            )
            .unwrap(),
        );
        assert_eq!(
            resolve(&store, "hi", Language::French).as_deref(),
            Some("salut (votos: 1)")
        );
    }

    #[rstest]
    fn empty_language_map_falls_through_to_reverse() {
        let store = TranslationStore::from_seed(
            &parse_seed(
                r#"{"gato": {"english": {}},
                    "felino": {"english": {"gato": 0}}}"#,
            )
            .unwrap(),
        );
        assert_eq!(
            resolve(&store, "gato", Language::English).as_deref(),
            Some("gato (votos: 0)")
        );
    }

    #[rstest]
    fn unknown_phrase_is_absent(store: TranslationStore) {
        assert_eq!(resolve(&store, "xyzzy", Language::English), None);
    }

    #[rstest]
    fn combined_resolves_each_clause(store: TranslationStore) {
        let combined = resolve_combined(&store, "hola, adios", Language::English).unwrap();
        assert_eq!(combined, "hello (votos: 3), goodbye (votos: 3)");
    }

    #[rstest]
    fn combined_brackets_unknown_clauses(store: TranslationStore) {
        let combined = resolve_combined(&store, "hola, xyzzy", Language::English).unwrap();
        assert!(combined.contains("hello (votos: 3)"));
        assert!(combined.contains("[xyzzy]"));
    }

    #[rstest]
    fn combined_without_any_match_is_absent(store: TranslationStore) {
        assert_eq!(resolve_combined(&store, "foo. bar!", Language::English), None);
        assert_eq!(resolve_combined(&store, "", Language::English), None);
    }

    #[rstest]
    fn translate_all_covers_every_target(store: TranslationStore) {
        let all = translate_all(&store, "hola");
        let languages: Vec<Language> = all.keys().copied().collect();
        assert_eq!(languages, Language::TARGETS.to_vec());
        assert_eq!(all[&Language::Russian], "привет (votos: 4)");
    }

    #[rstest]
    fn translate_all_ignores_non_source_phrases(store: TranslationStore) {
        assert!(translate_all(&store, "hello").is_empty());
    }

    #[rstest]
    #[case("viajar", Language::English, Some(("travel", 2)))]
    #[case("adios", Language::German, Some(("auf wiedersehen", 4)))]
    #[case("hello", Language::English, None)]
    fn picks_top_translation(
        store: TranslationStore,
        #[case] phrase: &str,
        #[case] language: Language,
        #[case] expected: Option<(&str, VoteCount)>,
    ) {
        let top = top_translation(&store, phrase, language);
        assert_eq!(top.as_ref().map(|(t, v)| (t.as_str(), *v)), expected);
    }
}
