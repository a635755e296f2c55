//! Environment configuration for the quiz service.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use vocab_core::{ExpanderConfig, MatchThresholds};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },

    #[error("{0} is set but {1} is missing")]
    Incomplete(&'static str, &'static str),
}

/// Upstash Redis REST credentials.
#[derive(Debug, Clone)]
pub struct UpstashConfig {
    pub url: String,
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// API Ninjas key for the thesaurus. Without it no synonyms are fetched.
    pub ninjas_api_key: Option<String>,
    /// Durable cache. Without it only the in-process cache is used.
    pub upstash: Option<UpstashConfig>,
    pub thresholds: MatchThresholds,
    pub expander: ExpanderConfig,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = MatchThresholds::default();
        let thresholds = MatchThresholds {
            accept: parse_or(&lookup, "MATCH_ACCEPT_THRESHOLD", defaults.accept)?,
            synonym: parse_or(&lookup, "MATCH_SYNONYM_THRESHOLD", defaults.synonym)?,
            min_length_ratio: parse_or(&lookup, "MATCH_MIN_LENGTH_RATIO", defaults.min_length_ratio)?,
        };

        let expander_defaults = ExpanderConfig::default();
        let ttl_secs = parse_or(
            &lookup,
            "SYNONYM_CACHE_TTL_SECS",
            expander_defaults.durable_ttl.as_secs(),
        )?;
        let memory_ttl_secs = parse_or(
            &lookup,
            "SYNONYM_MEMORY_TTL_SECS",
            expander_defaults
                .memory_ttl
                .unwrap_or(expander_defaults.durable_ttl)
                .as_secs(),
        )?;
        let expander = ExpanderConfig {
            relevance_threshold: parse_or(
                &lookup,
                "SYNONYM_RELEVANCE_THRESHOLD",
                expander_defaults.relevance_threshold,
            )?,
            max_synonyms: parse_or(&lookup, "SYNONYM_MAX_COUNT", expander_defaults.max_synonyms)?,
            durable_ttl: Duration::from_secs(ttl_secs),
            memory_ttl: Some(Duration::from_secs(memory_ttl_secs)),
            ..expander_defaults
        };

        let upstash = match (
            non_empty(&lookup, "UPSTASH_REDIS_REST_URL"),
            non_empty(&lookup, "UPSTASH_REDIS_REST_TOKEN"),
        ) {
            (Some(url), Some(token)) => Some(UpstashConfig { url, token }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::Incomplete(
                    "UPSTASH_REDIS_REST_URL",
                    "UPSTASH_REDIS_REST_TOKEN",
                ))
            }
            (None, Some(_)) => {
                return Err(ConfigError::Incomplete(
                    "UPSTASH_REDIS_REST_TOKEN",
                    "UPSTASH_REDIS_REST_URL",
                ))
            }
        };

        Ok(Self {
            host: non_empty(&lookup, "HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 3000)?,
            ninjas_api_key: non_empty(&lookup, "NINJAS_API_KEY"),
            upstash,
            thresholds,
            expander,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match non_empty(lookup, name) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
