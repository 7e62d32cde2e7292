// File: src/chat/menu.rs
//! Fixed chat texts, one set per native language.

use crate::core::types::Language;

pub const START_PROMPT: &str = "Inicio. Por favor, ingresa una palabra u oración a traducir.";

/// Menu text for a native-language identifier. Unknown identifiers get English.
pub fn get_menu(native_language: &str) -> &'static str {
    menu_text(Language::from_native(native_language))
}

pub fn menu_text(native: Language) -> &'static str {
    match native {
        Language::English => {
            "Menu Options:\n\
             1. Translate word or phrase.\n\
             2. Teach translation.\n\
             3. Train model.\n\
             Select an option by typing the corresponding number."
        }
        Language::Spanish => {
            "Menú de opciones:\n\
             1. Traducir palabra u oración.\n\
             2. Enseñar traducción.\n\
             3. Entrenar modelo.\n\
             Seleccione una opción escribiendo el número correspondiente."
        }
        Language::French => {
            "Menu des options:\n\
             1. Traduire un mot ou une phrase.\n\
             2. Enseigner la traduction.\n\
             3. Entraîner le modèle.\n\
             Sélectionnez une option en tapant le numéro correspondant."
        }
        Language::German => {
            "Menüoptionen:\n\
             1. Wort oder Satz übersetzen.\n\
             2. Übersetzung lehren.\n\
             3. Modell trainieren.\n\
             Wählen Sie eine Option, indem Sie die entsprechende Nummer eingeben."
        }
        Language::Russian => {
            "Меню опций:\n\
             1. Перевести слово или фразу.\n\
             2. Обучить перевод.\n\
             3. Обучить модель.\n\
             Выберите вариант, введя соответствующий номер."
        }
    }
}

/// Reply for a numbered menu option, if `option` is one.
pub fn option_text(native: Language, option: &str) -> Option<&'static str> {
    let [translate, teach, train] = match native {
        Language::English => [
            "Please, enter the word or phrase to translate.",
            "To teach a translation, use: enseñar: word; translation(s)",
            "Model training initiated.",
        ],
        Language::Spanish => [
            "Por favor, introduce la palabra u oración a traducir.",
            "Para enseñar una traducción, envía: enseñar: palabra; traducción(es)",
            "Entrenamiento del modelo iniciado.",
        ],
        Language::French => [
            "Veuillez entrer le mot ou la phrase à traduire.",
            "Pour enseigner une traduction, envoyez : enseigner : mot ; traduction(s)",
            "Démarrage de l'entraînement du modèle.",
        ],
        Language::German => [
            "Bitte geben Sie das zu übersetzende Wort oder den Satz ein.",
            "Um eine Übersetzung beizubringen, geben Sie ein: lehren: Wort; Übersetzung(en)",
            "Modelltraining gestartet.",
        ],
        Language::Russian => [
            "Пожалуйста, введите слово или фразу для перевода.",
            "Чтобы обучить перевод, введите: обучить: слово; перевод(ы)",
            "Начата тренировка модели.",
        ],
    };
    match option {
        "1" => Some(translate),
        "2" => Some(teach),
        "3" => Some(train),
        _ => None,
    }
}

pub fn invalid_option_text(native: Language) -> &'static str {
    match native {
        Language::English => "Invalid option. Please select a valid option from the menu.",
        Language::Spanish => "Opción no válida. Seleccione una opción válida desde el menú.",
        Language::French => "Option invalide. Veuillez sélectionner une option valide dans le menu.",
        Language::German => "Ungültige Option. Bitte wählen Sie eine gültige Option aus dem Menü.",
        Language::Russian => {
            "Недопустимый вариант. Пожалуйста, выберите действительный вариант из меню."
        }
    }
}
