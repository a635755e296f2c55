//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from vocab-core
pub use crate::services::translate::BulkTranslation;
pub use vocab_core::{Feedback, ValidationResult};

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_target_lang() -> String {
    "ru".to_string()
}

// Word parsing

#[derive(Debug, Serialize, Deserialize)]
pub struct ParseWordsRequest {
    pub input: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParseWordsResponse {
    pub words: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InputExample {
    pub label: String,
    pub input: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InputExamplesResponse {
    pub examples: Vec<InputExample>,
}

// Answer validation

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateAnswerRequest {
    pub answer: String,
    pub valid_answers: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateAnswerResponse {
    pub is_correct: bool,
    pub similarity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
    /// Learner-facing text for `feedback`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<ValidationResult> for ValidateAnswerResponse {
    fn from(result: ValidationResult) -> Self {
        Self {
            is_correct: result.is_correct,
            similarity: result.similarity,
            feedback: result.feedback,
            message: result.feedback.map(|f| f.message().to_string()),
        }
    }
}

// Translations

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidTranslationsRequest {
    pub source_word: String,
    pub translation: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidTranslationsResponse {
    pub valid_translations: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translation: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BulkTranslateRequest {
    pub words: Vec<String>,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BulkTranslateResponse {
    pub translations: Vec<BulkTranslation>,
}
