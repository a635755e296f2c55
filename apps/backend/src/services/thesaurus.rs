//! English thesaurus lookups through API Ninjas.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use vocab_core::{ProviderError, SynonymSource};

const THESAURUS_URL: &str = "https://api.api-ninjas.com/v1/thesaurus";

/// API Ninjas responds with `{ "word": "happy", "synonyms": [...], "antonyms": [...] }`.
#[derive(Debug, Deserialize)]
struct ThesaurusResponse {
    #[serde(default)]
    synonyms: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct NinjasThesaurus {
    client: Client,
    api_key: String,
}

impl NinjasThesaurus {
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[async_trait]
impl SynonymSource for NinjasThesaurus {
    async fn fetch_synonyms(&self, word: &str) -> Result<Vec<String>, ProviderError> {
        tracing::debug!(word, "fetching synonyms");

        let response = self
            .client
            .get(THESAURUS_URL)
            .query(&[("word", word)])
            .header("X-Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let body: ThesaurusResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        tracing::debug!(word, count = body.synonyms.len(), "synonyms received");
        Ok(body.synonyms)
    }
}
