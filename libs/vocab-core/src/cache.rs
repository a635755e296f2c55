//! Cache layers for expanded answer sets.
//!
//! [`TieredCache`] reads the durable layer first and falls back to the
//! in-process [`MemoryCache`]. Writes go to memory unconditionally and to the
//! durable layer on a best-effort basis. Durable failures only cost a miss.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::error::CacheError;

/// Key-value store of answer sets with optional expiry.
#[async_trait]
pub trait Cache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<String>>, CacheError>;

    async fn set(
        &self,
        key: &str,
        value: &[String],
        ttl: Option<Duration>,
    ) -> Result<(), CacheError>;

    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}

#[derive(Debug, Clone)]
struct Entry {
    value: Vec<String>,
    expires_at: Option<DateTime<Utc>>,
}

impl Entry {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// In-process cache backed by a map.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every entry.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Number of stored entries, expired ones included until they are read.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<String>>, CacheError> {
        let now = Utc::now();
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                None => return Ok(None),
                Some(entry) if !entry.is_expired(now) => return Ok(Some(entry.value.clone())),
                Some(_) => {}
            }
        }

        // Expired: drop it unless another task replaced it in the meantime.
        let mut entries = self.entries.write().await;
        let now = Utc::now();
        if entries.get(key).is_some_and(|entry| entry.is_expired(now)) {
            entries.remove(key);
        }
        Ok(entries.get(key).map(|entry| entry.value.clone()))
    }

    async fn set(
        &self,
        key: &str,
        value: &[String],
        ttl: Option<Duration>,
    ) -> Result<(), CacheError> {
        let expires_at = match ttl {
            Some(ttl) => {
                let ttl = chrono::Duration::from_std(ttl)
                    .map_err(|e| CacheError::Backend(format!("invalid ttl: {}", e)))?;
                Some(Utc::now() + ttl)
            }
            None => None,
        };

        let mut entries = self.entries.write().await;
        // Sweep entries nobody read back after they expired.
        let now = Utc::now();
        entries.retain(|_, entry| !entry.is_expired(now));
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_vec(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

/// Read-through, write-through composition of a durable cache and memory.
pub struct TieredCache {
    durable: Option<Arc<dyn Cache>>,
    memory: MemoryCache,
    durable_ttl: Option<Duration>,
    memory_ttl: Option<Duration>,
}

impl TieredCache {
    /// Memory-only cache.
    pub fn memory_only(memory_ttl: Option<Duration>) -> Self {
        Self {
            durable: None,
            memory: MemoryCache::new(),
            durable_ttl: None,
            memory_ttl,
        }
    }

    /// Memory cache backed by a durable layer.
    pub fn with_durable(
        durable: Arc<dyn Cache>,
        durable_ttl: Duration,
        memory_ttl: Option<Duration>,
    ) -> Self {
        Self {
            durable: Some(durable),
            memory: MemoryCache::new(),
            durable_ttl: Some(durable_ttl),
            memory_ttl,
        }
    }

    pub fn has_durable(&self) -> bool {
        self.durable.is_some()
    }

    /// Look up a key. Never fails; backend errors are logged as misses.
    pub async fn get(&self, key: &str) -> Option<Vec<String>> {
        if let Some(durable) = &self.durable {
            match durable.get(key).await {
                Ok(Some(value)) => {
                    tracing::debug!(key, "durable cache hit");
                    return Some(value);
                }
                Ok(None) => {}
                Err(e) => tracing::warn!(key, error = %e, "durable cache read failed"),
            }
        }

        match self.memory.get(key).await {
            Ok(Some(value)) => {
                tracing::debug!(key, "memory cache hit");
                Some(value)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "memory cache read failed");
                None
            }
        }
    }

    /// Store a value in both layers. Never fails; backend errors are logged.
    pub async fn set(&self, key: &str, value: &[String]) {
        if let Err(e) = self.memory.set(key, value, self.memory_ttl).await {
            tracing::warn!(key, error = %e, "memory cache write failed");
        }

        if let Some(durable) = &self.durable {
            match durable.set(key, value, self.durable_ttl).await {
                Ok(()) => tracing::debug!(key, "saved to durable cache"),
                Err(e) => tracing::warn!(key, error = %e, "durable cache write failed"),
            }
        }
    }

    /// Remove a key from both layers.
    pub async fn delete(&self, key: &str) {
        if let Err(e) = self.memory.delete(key).await {
            tracing::warn!(key, error = %e, "memory cache delete failed");
        }
        if let Some(durable) = &self.durable {
            if let Err(e) = durable.delete(key).await {
                tracing::warn!(key, error = %e, "durable cache delete failed");
            }
        }
    }

    /// Empty the in-process layer. The durable layer expires on its own.
    pub async fn clear_memory(&self) {
        self.memory.clear().await;
    }

    pub fn memory(&self) -> &MemoryCache {
        &self.memory
    }
}
