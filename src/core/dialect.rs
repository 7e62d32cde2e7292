// File: src/core/dialect.rs
use crate::core::types::Dialect;
use std::collections::BTreeMap;

/// English phrase variants per dialect.
fn phrasebook(dialect: Dialect) -> &'static [(&'static str, &'static str)] {
    match dialect {
        Dialect::American => &[("I got", "I have"), ("I want", "I wanna")],
        Dialect::British => &[("I got", "I've got"), ("I want", "I fancy")],
    }
}

/// How speakers of the other dialects would say `phrase`.
/// The phrase must match a phrasebook entry exactly.
pub fn dialect_alternatives(phrase: &str, current: Dialect) -> Option<BTreeMap<Dialect, &'static str>> {
    let alternatives: BTreeMap<Dialect, &'static str> = Dialect::ALL
        .into_iter()
        .filter(|&dialect| dialect != current)
        .filter_map(|dialect| {
            phrasebook(dialect)
                .iter()
                .find(|(original, _)| *original == phrase)
                .map(|&(_, alternative)| (dialect, alternative))
        })
        .collect();

    (!alternatives.is_empty()).then_some(alternatives)
}
