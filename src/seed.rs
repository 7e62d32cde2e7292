// File: src/seed.rs
use crate::core::types::{Language, VoteCount};
use crate::error::TalkieError;
use indexmap::IndexMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Raw dictionary data as it appears on disk:
/// source phrase -> language -> translation -> votes.
pub type Seed = IndexMap<String, IndexMap<Language, IndexMap<String, VoteCount>>>;

fn translations(pairs: &[(&str, VoteCount)]) -> IndexMap<String, VoteCount> {
    pairs
        .iter()
        .map(|&(text, votes)| (text.to_string(), votes))
        .collect()
}

/// The dictionary every engine starts from when no seed file is given.
pub fn builtin_seed() -> Seed {
    IndexMap::from([
        (
            "hola".to_string(),
            IndexMap::from([
                (Language::English, translations(&[("hello", 3)])),
                (Language::French, translations(&[("salut", 5)])),
                (Language::German, translations(&[("hallo", 2)])),
                (Language::Russian, translations(&[("привет", 4)])),
            ]),
        ),
        (
            "viajar".to_string(),
            IndexMap::from([
                (
                    Language::English,
                    translations(&[("travel", 2), ("trip", 1), ("journey", 1)]),
                ),
                (Language::French, translations(&[("voyager", 4)])),
                (Language::German, translations(&[("reisen", 3)])),
                (Language::Russian, translations(&[("путешествовать", 3)])),
            ]),
        ),
        (
            "adios".to_string(),
            IndexMap::from([
                (Language::English, translations(&[("goodbye", 3)])),
                (Language::French, translations(&[("au revoir", 2)])),
                (Language::German, translations(&[("auf wiedersehen", 4)])),
                (Language::Russian, translations(&[("до свидания", 1)])),
            ]),
        ),
    ])
}

pub fn parse_seed(json: &str) -> Result<Seed, TalkieError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_seed(path: &Path) -> Result<Seed, TalkieError> {
    let file = File::open(path).map_err(|source| TalkieError::SeedIo {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn builtin_seed_has_every_target_language() {
        let seed = builtin_seed();
        assert_eq!(seed.len(), 3);
        for languages in seed.values() {
            let keys: Vec<Language> = languages.keys().copied().collect();
            assert_eq!(keys, Language::TARGETS.to_vec());
        }
    }

    #[test]
    fn parses_store_shaped_json() {
        let seed = parse_seed(r#"{"gato": {"english": {"cat": 2}, "español": {"michi": 0}}}"#).unwrap();
        assert_eq!(seed["gato"][&Language::English]["cat"], 2);
        assert_eq!(seed["gato"][&Language::Spanish]["michi"], 0);
    }

    #[test]
    fn rejects_unknown_language_ids() {
        let err = parse_seed(r#"{"gato": {"klingon": {"cat": 2}}}"#).unwrap_err();
        assert!(matches!(err, TalkieError::SeedFormat(_)));
    }

    #[test]
    fn loads_seed_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"perro": {{"french": {{"chien": 7}}}}}}"#).unwrap();

        let seed = load_seed(file.path()).unwrap();
        assert_eq!(seed["perro"][&Language::French]["chien"], 7);
    }

    #[test]
    fn missing_seed_file_reports_path() {
        let err = load_seed(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/seed.json"));
    }
}
