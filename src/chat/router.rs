// File: src/chat/router.rs
use crate::chat::menu::{invalid_option_text, menu_text, option_text, START_PROMPT};
use crate::core::engine::TranslatorEngine;
use crate::core::types::{Dialect, Language};
use crate::learning::TeachRequest;
use serde::Serialize;
use tracing::debug;

const RESET_KEYWORD: &str = "iniciar";
const MENU_KEYWORD: &str = "cambiar";
const TEACH_PREFIX: &str = "enseñar:";

const TEACH_FORMAT_ERROR: &str =
    "Formato incorrecto. Usa: enseñar: palabra; traducción1, traducción2, ...";

/// One chat turn's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub response: String,
    /// Always the language the turn was received with.
    pub new_language: Language,
}

/// Everything about the user that shapes a reply besides what they typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatContext {
    pub current_language: Language,
    pub native_language: Language,
    /// Carried for clients; does not change replies.
    pub dialect: Dialect,
}

impl ChatContext {
    pub fn new(current_language: Language) -> Self {
        Self {
            current_language,
            native_language: Language::English,
            dialect: Dialect::default(),
        }
    }

    pub fn with_native(mut self, native_language: Language) -> Self {
        self.native_language = native_language;
        self
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }
}

/// Maps one line of user input to a reply.
///
/// Keywords and menu digits are checked first, then the teach command;
/// anything else is translated, whole phrase first and clause by clause
/// as a fallback.
pub fn process_chat_input(
    engine: &mut TranslatorEngine,
    context: ChatContext,
    user_input: &str,
) -> ChatReply {
    let language = context.current_language;
    let native = context.native_language;
    debug!(input = %user_input, %language, %native, dialect = %context.dialect, "chat turn");

    let lowered = user_input.to_lowercase();
    let response = if lowered == RESET_KEYWORD {
        START_PROMPT.to_string()
    } else if lowered == MENU_KEYWORD {
        menu_text(native).to_string()
    } else if !user_input.is_empty() && user_input.chars().all(char::is_numeric) {
        option_text(native, user_input)
            .unwrap_or_else(|| invalid_option_text(native))
            .to_string()
    } else if let Some(content) = strip_prefix_ignore_case(user_input, TEACH_PREFIX) {
        teach_command(engine, language, content.trim())
    } else {
        translate_reply(engine, language, user_input)
    };

    ChatReply {
        response,
        new_language: language,
    }
}

/// Handles `word; translation1, translation2, ...`.
fn teach_command(engine: &mut TranslatorEngine, language: Language, content: &str) -> String {
    let Some((word, translations)) = content.split_once(';') else {
        return TEACH_FORMAT_ERROR.to_string();
    };
    let word = word.trim();
    let translations: Vec<&str> = translations
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();

    let outcome = engine.teach(&TeachRequest::new(word).with(language, &translations));
    debug!(key = %outcome.key, added = outcome.added, rejected = outcome.rejected, "taught via chat");

    format!("Traducción para '{word}' añadida en {}.", language.display_name())
}

fn translate_reply(engine: &TranslatorEngine, language: Language, user_input: &str) -> String {
    let name = language.display_name();
    if let Some(translation) = engine.resolve(user_input, language) {
        return format!("The translation for '{user_input}' in {name} is: {translation}");
    }
    if let Some(combined) = engine.resolve_combined(user_input, language) {
        return format!("The combined translation for '{user_input}' in {name} is: {combined}");
    }
    format!(
        "I don't know the translation for '{user_input}' in {name}.\n\
         If you wish to teach me the translation, send: {TEACH_PREFIX} {user_input}; <your translation>\n\
         Or type another word/phrase, or type '{RESET_KEYWORD}' to return to the start."
    )
}

fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let mut rest = input;
    for expected in prefix.chars() {
        let mut chars = rest.chars();
        let c = chars.next()?;
        if !c.to_lowercase().eq(std::iter::once(expected)) {
            return None;
        }
        rest = chars.as_str();
    }
    Some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn engine() -> TranslatorEngine {
        TranslatorEngine::new()
    }

    fn english() -> ChatContext {
        ChatContext::new(Language::English)
    }

    #[rstest]
    #[case("iniciar")]
    #[case("INICIAR")]
    fn reset_keyword_prompts_start(mut engine: TranslatorEngine, #[case] input: &str) {
        let reply = process_chat_input(&mut engine, english(), input);
        assert_eq!(reply.response, START_PROMPT);
    }

    #[rstest]
    fn menu_keyword_uses_native_language(mut engine: TranslatorEngine) {
        let context = english().with_native(Language::German);
        let reply = process_chat_input(&mut engine, context, "Cambiar");
        assert!(reply.response.starts_with("Menüoptionen:"));
    }

    #[rstest]
    #[case(Language::English, "Please, enter the word or phrase to translate.")]
    #[case(Language::Spanish, "Por favor, introduce la palabra u oración a traducir.")]
    fn option_one_asks_for_phrase(
        mut engine: TranslatorEngine,
        #[case] native: Language,
        #[case] expected: &str,
    ) {
        let reply = process_chat_input(&mut engine, english().with_native(native), "1");
        assert_eq!(reply.response, expected);
    }

    #[rstest]
    #[case("9")]
    #[case("42")]
    #[case("١")]
    #[case("１")]
    fn out_of_range_digit_is_invalid(mut engine: TranslatorEngine, #[case] input: &str) {
        let context = english().with_native(Language::French);
        let reply = process_chat_input(&mut engine, context, input);
        assert_eq!(reply.response, invalid_option_text(Language::French));
    }

    #[rstest]
    fn direct_translation(mut engine: TranslatorEngine) {
        let reply = process_chat_input(&mut engine, english(), "Hola");
        assert_eq!(
            reply.response,
            "The translation for 'Hola' in English is: hello (votos: 3)"
        );
        assert_eq!(reply.new_language, Language::English);
    }

    #[rstest]
    fn combined_translation_fallback(mut engine: TranslatorEngine) {
        let reply = process_chat_input(
            &mut engine,
            ChatContext::new(Language::French),
            "hola, xyzzy",
        );
        assert_eq!(
            reply.response,
            "The combined translation for 'hola, xyzzy' in French is: salut (votos: 5), [xyzzy]"
        );
    }

    #[rstest]
    fn unknown_phrase_suggests_teaching(mut engine: TranslatorEngine) {
        let reply = process_chat_input(&mut engine, english(), "xyzzy");
        assert!(reply
            .response
            .starts_with("I don't know the translation for 'xyzzy' in English."));
        assert!(reply.response.contains("enseñar: xyzzy; <your translation>"));
        assert_eq!(reply.response.lines().count(), 3);
    }

    #[rstest]
    fn teach_command_adds_translation(mut engine: TranslatorEngine) {
        let reply = process_chat_input(&mut engine, english(), "enseñar: Saludo; hi, hey there");
        assert_eq!(reply.response, "Traducción para 'Saludo' añadida en English.");

        let reply = process_chat_input(&mut engine, english(), "saludo");
        assert_eq!(
            reply.response,
            "The translation for 'saludo' in English is: hi (votos: 0), hey there (votos: 0)"
        );
    }

    #[rstest]
    fn teach_command_prefix_ignores_case(mut engine: TranslatorEngine) {
        let context = ChatContext::new(Language::German);
        let reply = process_chat_input(&mut engine, context, "ENSEÑAR: gato; Katze");
        assert_eq!(reply.response, "Traducción para 'gato' añadida en German.");
        assert_eq!(engine.resolve("gato", Language::German).as_deref(), Some("katze (votos: 0)"));
    }

    #[rstest]
    #[case("enseñar: gato")]
    #[case("enseñar:")]
    fn teach_command_without_separator(mut engine: TranslatorEngine, #[case] input: &str) {
        let reply = process_chat_input(&mut engine, english(), input);
        assert_eq!(reply.response, TEACH_FORMAT_ERROR);
        assert!(!engine.store().contains("gato"));
    }

    #[rstest]
    fn new_language_is_echoed(mut engine: TranslatorEngine) {
        for input in ["iniciar", "cambiar", "2", "hola", "enseñar: x; y"] {
            let reply = process_chat_input(&mut engine, ChatContext::new(Language::Russian), input);
            assert_eq!(reply.new_language, Language::Russian);
        }
    }

    #[test]
    fn strips_prefix_by_characters() {
        assert_eq!(strip_prefix_ignore_case("Enseñar: x", TEACH_PREFIX), Some(" x"));
        assert_eq!(strip_prefix_ignore_case("ense", TEACH_PREFIX), None);
        assert_eq!(strip_prefix_ignore_case("ensenar: x", TEACH_PREFIX), None);
    }
}
