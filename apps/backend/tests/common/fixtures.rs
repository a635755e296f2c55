//! Test fixtures and factory functions for creating request bodies.

use serde_json::{json, Value};

/// English to Spanish translations known to the stub translator.
pub const DICTIONARY: &[(&str, &str)] = &[
    ("happy", "feliz"),
    ("hello", "hola"),
    ("glad", "Feliz"),
    ("cheerful", "felices"),
    ("contented", "contento"),
    ("content", "muy feliz"),
];

/// Synonyms the stub thesaurus returns for any word.
pub const HAPPY_SYNONYMS: &[&str] = &["glad", "cheerful", "contented", "content", "joyous"];

pub fn parse_request(input: &str) -> Value {
    json!({ "input": input })
}

pub fn validate_request(answer: &str, valid_answers: &[&str]) -> Value {
    json!({ "answer": answer, "valid_answers": valid_answers })
}

pub fn valid_translations_request(
    source_word: &str,
    translation: &str,
    source_lang: &str,
    target_lang: &str,
) -> Value {
    json!({
        "source_word": source_word,
        "translation": translation,
        "source_lang": source_lang,
        "target_lang": target_lang,
    })
}

pub fn bulk_request(words: &[&str]) -> Value {
    json!({ "words": words, "source_lang": "en", "target_lang": "es" })
}
