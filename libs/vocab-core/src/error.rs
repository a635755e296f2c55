//! Error types for vocab-core.
//!
//! None of these escape the public tokenizer, matcher or expander operations.
//! They exist so provider and cache implementations can report what went wrong
//! and the expander can log it before degrading.

use thiserror::Error;

/// Errors reported by translation and thesaurus providers.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("provider returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode provider response: {0}")]
    Decode(String),

    #[error("no translation found for {0:?}")]
    NoTranslation(String),

    #[error("missing credentials: {0} not set")]
    MissingCredentials(&'static str),
}

/// Errors reported by cache backends.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache backend error: {0}")]
    Backend(String),

    #[error("cache serialization error: {0}")]
    Serialization(String),
}
