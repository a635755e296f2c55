//! Machine translation over free public endpoints.
//!
//! Google's unofficial `translate_a/single` endpoint is tried first. When it
//! fails or echoes the input back, MyMemory is asked instead and its best
//! high-quality match is used.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use vocab_core::{ProviderError, Translator};

const GOOGLE_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";
const MYMEMORY_URL: &str = "https://api.mymemory.translated.net/get";

/// Minimum MyMemory match score for a candidate translation.
const MIN_MATCH: f64 = 0.9;
/// Minimum MyMemory quality score for a candidate translation.
const MIN_QUALITY: f64 = 70.0;

/// Translator backed by Google with a MyMemory fallback.
#[derive(Debug, Clone)]
pub struct HttpTranslator {
    client: Client,
    google_url: String,
    mymemory_url: String,
}

impl HttpTranslator {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            google_url: GOOGLE_TRANSLATE_URL.to_string(),
            mymemory_url: MYMEMORY_URL.to_string(),
        }
    }

    async fn google(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<Option<String>, ProviderError> {
        let response = self
            .client
            .get(&self.google_url)
            .query(&[
                ("client", "gtx"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        let data: Value = decode(response).await?;
        Ok(google_translation(&data, text))
    }

    async fn mymemory(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<Option<String>, ProviderError> {
        let langpair = format!("{}|{}", source_lang, target_lang);
        let response = self
            .client
            .get(&self.mymemory_url)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        let data: MyMemoryResponse = decode(response).await?;
        Ok(mymemory_translation(&data, text))
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError> {
        match self.google(text, source_lang, target_lang).await {
            Ok(Some(translated)) => return Ok(translated),
            Ok(None) => tracing::debug!(text, "google returned no usable translation"),
            Err(e) => tracing::debug!(text, error = %e, "google translate failed, trying MyMemory"),
        }

        match self.mymemory(text, source_lang, target_lang).await? {
            Some(translated) => Ok(translated),
            None => {
                tracing::warn!(text, source_lang, target_lang, "no good translation found");
                Err(ProviderError::NoTranslation(text.to_string()))
            }
        }
    }
}

async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Status {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("unknown").to_string(),
        });
    }
    response
        .json()
        .await
        .map_err(|e| ProviderError::Decode(e.to_string()))
}

fn differs(candidate: &str, text: &str) -> bool {
    !candidate.is_empty() && candidate.to_lowercase() != text.trim().to_lowercase()
}

/// Google responds with `[[["translated", "original", ...], ...], ...]`, one
/// inner array per sentence.
fn google_translation(data: &Value, text: &str) -> Option<String> {
    let segments = data.get(0)?.as_array()?;
    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0)?.as_str())
        .collect();
    let translated = translated.trim();

    differs(translated, text).then(|| translated.to_string())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryResponse {
    response_status: Value,
    response_data: Option<MyMemoryData>,
    #[serde(default)]
    matches: Vec<MyMemoryMatch>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryData {
    translated_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MyMemoryMatch {
    translation: Option<String>,
    #[serde(rename = "match")]
    match_score: Value,
    quality: Value,
}

/// MyMemory mixes numbers and numeric strings in the same fields.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn mymemory_translation(data: &MyMemoryResponse, text: &str) -> Option<String> {
    if as_number(&data.response_status) != Some(200.0) {
        return None;
    }

    let mut best: Option<(f64, &str)> = None;
    for candidate in &data.matches {
        let Some(translation) = candidate.translation.as_deref().map(str::trim) else {
            continue;
        };
        let (Some(score), Some(quality)) =
            (as_number(&candidate.match_score), as_number(&candidate.quality))
        else {
            continue;
        };
        if !differs(translation, text) || score < MIN_MATCH || quality < MIN_QUALITY {
            continue;
        }

        let rank = score * 0.6 + quality / 100.0 * 0.4;
        if best.map_or(true, |(best_rank, _)| rank > best_rank) {
            best = Some((rank, translation));
        }
    }
    if let Some((_, translation)) = best {
        return Some(translation.to_string());
    }

    let translated = data
        .response_data
        .as_ref()?
        .translated_text
        .as_deref()?
        .trim();
    differs(translated, text).then(|| translated.to_string())
}

/// One word of a bulk translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkTranslation {
    pub word: String,
    pub translation: String,
    /// False when the provider failed and the word was echoed back.
    pub translated: bool,
}

/// Translate a word list in order. A failed word maps to itself.
pub async fn translate_bulk(
    translator: &dyn Translator,
    words: &[String],
    source_lang: &str,
    target_lang: &str,
) -> Vec<BulkTranslation> {
    let mut results = Vec::with_capacity(words.len());
    for word in words.iter().map(|w| w.trim()).filter(|w| !w.is_empty()) {
        let result = match translator.translate(word, source_lang, target_lang).await {
            Ok(translation) => BulkTranslation {
                word: word.to_string(),
                translation,
                translated: true,
            },
            Err(e) => {
                tracing::warn!(word, error = %e, "bulk translation failed, keeping original");
                BulkTranslation {
                    word: word.to_string(),
                    translation: word.to_string(),
                    translated: false,
                }
            }
        };
        results.push(result);
    }
    results
}
