//! Interfaces to the external translation and thesaurus services.

use async_trait::async_trait;

use crate::error::ProviderError;

/// Machine translation of a single word or phrase.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError>;
}

/// Thesaurus lookup for a source-language word.
#[async_trait]
pub trait SynonymSource: Send + Sync {
    async fn fetch_synonyms(&self, word: &str) -> Result<Vec<String>, ProviderError>;
}

/// Thesaurus used when no provider is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSynonyms;

#[async_trait]
impl SynonymSource for NoSynonyms {
    async fn fetch_synonyms(&self, _word: &str) -> Result<Vec<String>, ProviderError> {
        Ok(vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_synonyms_is_empty() {
        let synonyms = NoSynonyms.fetch_synonyms("happy").await.unwrap();
        assert!(synonyms.is_empty());
    }
}
