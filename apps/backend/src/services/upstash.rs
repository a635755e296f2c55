//! Durable cache on Upstash Redis, spoken to over its REST API.
//!
//! Every command is a `POST` of a JSON array such as `["GET", "key"]` to the
//! database URL, answered with `{"result": ...}` or `{"error": "..."}`.
//! Answer sets are stored as JSON text.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use vocab_core::{Cache, CacheError};

use crate::config::UpstashConfig;

#[derive(Debug, Deserialize)]
struct CommandResponse {
    #[serde(default)]
    result: Value,
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpstashCache {
    client: Client,
    url: String,
    token: String,
}

impl UpstashCache {
    pub fn new(client: Client, config: &UpstashConfig) -> Self {
        Self {
            client,
            url: config.url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    async fn command(&self, args: &[String]) -> Result<Value, CacheError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(args)
            .send()
            .await
            .map_err(|e| CacheError::Backend(e.to_string()))?;

        let body: CommandResponse = response
            .json()
            .await
            .map_err(|e| CacheError::Backend(e.to_string()))?;

        match body.error {
            Some(error) => Err(CacheError::Backend(error)),
            None => Ok(body.result),
        }
    }
}

#[async_trait]
impl Cache for UpstashCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<String>>, CacheError> {
        let result = self
            .command(&["GET".to_string(), key.to_string()])
            .await?;
        decode_value(result)
    }

    async fn set(
        &self,
        key: &str,
        value: &[String],
        ttl: Option<Duration>,
    ) -> Result<(), CacheError> {
        self.command(&set_command(key, value, ttl)?).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.command(&["DEL".to_string(), key.to_string()])
            .await?;
        Ok(())
    }
}

fn set_command(key: &str, value: &[String], ttl: Option<Duration>) -> Result<Vec<String>, CacheError> {
    let encoded =
        serde_json::to_string(value).map_err(|e| CacheError::Serialization(e.to_string()))?;
    let mut args = vec!["SET".to_string(), key.to_string(), encoded];
    if let Some(ttl) = ttl {
        // Redis rejects EX 0.
        args.push("EX".to_string());
        args.push(ttl.as_secs().max(1).to_string());
    }
    Ok(args)
}

fn decode_value(result: Value) -> Result<Option<Vec<String>>, CacheError> {
    match result {
        Value::Null => Ok(None),
        Value::String(text) => serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| CacheError::Serialization(e.to_string())),
        other => serde_json::from_value(other)
            .map(Some)
            .map_err(|e| CacheError::Serialization(e.to_string())),
    }
}
