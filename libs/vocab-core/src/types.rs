//! Core types shared by the matcher, the expander and the backend.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Why a non-exact answer was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    /// Similarity cleared the high-confidence tier.
    MinorSpelling,
    /// One answer contains the other with a close enough length.
    AlternativeForm,
    /// Similarity cleared the moderate tier.
    Synonym,
}

impl Feedback {
    /// Human-readable message shown to the learner.
    pub fn message(self) -> &'static str {
        match self {
            Self::MinorSpelling => "Close enough! Minor spelling difference.",
            Self::AlternativeForm => "Correct! (Alternative form accepted)",
            Self::Synonym => "Correct! (Synonym accepted)",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of grading one typed answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_correct: bool,
    /// Best similarity against any valid answer, 0.0 to 100.0.
    pub similarity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
}

impl ValidationResult {
    pub(crate) fn exact() -> Self {
        Self {
            is_correct: true,
            similarity: 100.0,
            feedback: None,
        }
    }

    pub(crate) fn accepted(similarity: f64, feedback: Option<Feedback>) -> Self {
        Self {
            is_correct: true,
            similarity,
            feedback,
        }
    }

    pub(crate) fn rejected(similarity: f64) -> Self {
        Self {
            is_correct: false,
            similarity,
            feedback: None,
        }
    }
}

/// Acceptance tiers for the answer matcher.
///
/// The defaults are empirically chosen and meant to be tuned, not derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchThresholds {
    /// Similarity at or above which a typo is tolerated.
    pub accept: f64,
    /// Similarity at or above which a near-synonym is accepted.
    pub synonym: f64,
    /// Minimum shorter/longer length ratio for the containment rule.
    pub min_length_ratio: f64,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            accept: 90.0,
            synonym: 85.0,
            min_length_ratio: 0.7,
        }
    }
}

/// Tuning for synonym expansion and its cache.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpanderConfig {
    /// Minimum similarity between a synonym's translation and the canonical one.
    pub relevance_threshold: f64,
    /// Upper bound on synonyms translated per word.
    pub max_synonyms: usize,
    /// TTL applied to the durable cache layer.
    pub durable_ttl: Duration,
    /// TTL applied to the in-process layer. `None` keeps entries until cleared,
    /// which only suits short-lived processes.
    pub memory_ttl: Option<Duration>,
    /// Only words in this source language are expanded.
    pub expansion_lang: String,
}

impl Default for ExpanderConfig {
    fn default() -> Self {
        Self {
            relevance_threshold: 50.0,
            max_synonyms: 10,
            durable_ttl: Duration::from_secs(24 * 60 * 60),
            memory_ttl: Some(Duration::from_secs(24 * 60 * 60)),
            expansion_lang: "en".to_string(),
        }
    }
}

/// Cache key for one expanded answer set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub source_word: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl CacheKey {
    pub fn new(source_word: &str, source_lang: &str, target_lang: &str) -> Self {
        Self {
            source_word: source_word.to_string(),
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "synonyms:{}_{}_{}",
            self.source_word, self.source_lang, self.target_lang
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_messages() {
        assert_eq!(
            Feedback::MinorSpelling.message(),
            "Close enough! Minor spelling difference."
        );
        assert_eq!(
            Feedback::AlternativeForm.to_string(),
            "Correct! (Alternative form accepted)"
        );
        assert_eq!(Feedback::Synonym.message(), "Correct! (Synonym accepted)");
    }

    #[test]
    fn cache_key_format() {
        let key = CacheKey::new("happy", "en", "ru");
        assert_eq!(key.to_string(), "synonyms:happy_en_ru");
    }

    #[test]
    fn thresholds_partial_deserialize_keeps_defaults() {
        let thresholds: MatchThresholds = serde_json::from_str(r#"{"accept": 95.0}"#).unwrap();
        assert_eq!(thresholds.accept, 95.0);
        assert_eq!(thresholds.synonym, 85.0);
        assert_eq!(thresholds.min_length_ratio, 0.7);
    }

    #[test]
    fn validation_result_skips_empty_feedback() {
        let json = serde_json::to_string(&ValidationResult::exact()).unwrap();
        assert_eq!(json, r#"{"is_correct":true,"similarity":100.0}"#);
    }
}
