//! Core vocabulary quiz library shared by the backend and any other front end.
//!
//! Provides:
//! - Word list parser for pasted vocabulary
//! - Answer matching for typed quiz answers (Levenshtein similarity tiers)
//! - Synonym expansion of valid answers with a two-tier cache
//! - Provider traits for translation and thesaurus services

pub mod cache;
pub mod error;
pub mod matching;
pub mod parser;
pub mod provider;
pub mod synonyms;
pub mod types;

pub use cache::{Cache, MemoryCache, TieredCache};
pub use error::{CacheError, ProviderError};
pub use matching::{
    levenshtein_distance, normalize_text, similarity, validate_answer, validate_answer_with,
    validate_single,
};
pub use parser::{parse_words, INPUT_EXAMPLES};
pub use provider::{NoSynonyms, SynonymSource, Translator};
pub use synonyms::SynonymExpander;
pub use types::{CacheKey, ExpanderConfig, Feedback, MatchThresholds, ValidationResult};
