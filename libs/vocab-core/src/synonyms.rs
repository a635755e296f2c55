//! Synonym expansion of valid quiz answers.
//!
//! For an English source word the expander looks up its synonyms, translates
//! each of them concurrently and keeps the translations that stay close to the
//! canonical translation. The resulting answer set is cached per
//! `(word, source, target)` so a card only pays for the lookups once.

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;

use crate::cache::{Cache, TieredCache};
use crate::matching::similarity;
use crate::provider::{SynonymSource, Translator};
use crate::types::{CacheKey, ExpanderConfig};

/// Builds the set of answers a quiz should accept for one card.
pub struct SynonymExpander {
    synonyms: Arc<dyn SynonymSource>,
    translator: Arc<dyn Translator>,
    cache: TieredCache,
    config: ExpanderConfig,
}

impl SynonymExpander {
    /// Expander with an in-process cache only.
    pub fn new(
        synonyms: Arc<dyn SynonymSource>,
        translator: Arc<dyn Translator>,
        config: ExpanderConfig,
    ) -> Self {
        let cache = TieredCache::memory_only(config.memory_ttl);
        Self {
            synonyms,
            translator,
            cache,
            config,
        }
    }

    /// Expander whose in-process cache is backed by a durable one.
    pub fn with_durable_cache(
        synonyms: Arc<dyn SynonymSource>,
        translator: Arc<dyn Translator>,
        durable: Arc<dyn Cache>,
        config: ExpanderConfig,
    ) -> Self {
        let cache = TieredCache::with_durable(durable, config.durable_ttl, config.memory_ttl);
        Self {
            synonyms,
            translator,
            cache,
            config,
        }
    }

    pub fn config(&self) -> &ExpanderConfig {
        &self.config
    }

    pub fn cache(&self) -> &TieredCache {
        &self.cache
    }

    /// Every translation a learner may type for `source_word`.
    ///
    /// The lowercased, trimmed `original_translation` always comes first.
    /// Provider and cache failures only shrink the set; this never fails.
    pub async fn get_all_valid_translations(
        &self,
        source_word: &str,
        original_translation: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Vec<String> {
        let key = CacheKey::new(source_word, source_lang, target_lang).to_string();

        if let Some(cached) = self.cache.get(&key).await {
            return cached;
        }

        let original = original_translation.trim().to_lowercase();
        let mut answers = AnswerSet::new();
        answers.insert(&original);

        if source_lang == self.config.expansion_lang {
            self.expand(source_word, &original, source_lang, target_lang, &mut answers)
                .await;
        } else {
            tracing::debug!(source_word, source_lang, "skipping synonym expansion");
        }

        let result = answers.into_vec();
        tracing::debug!(source_word, count = result.len(), "valid translations computed");

        self.cache.set(&key, &result).await;
        result
    }

    /// Drop every entry of the in-process cache.
    pub async fn clear_cache(&self) {
        self.cache.clear_memory().await;
    }

    /// Forget the cached answer set of one word in both layers.
    pub async fn invalidate(&self, source_word: &str, source_lang: &str, target_lang: &str) {
        let key = CacheKey::new(source_word, source_lang, target_lang).to_string();
        self.cache.delete(&key).await;
    }

    async fn expand(
        &self,
        source_word: &str,
        original: &str,
        source_lang: &str,
        target_lang: &str,
        answers: &mut AnswerSet,
    ) {
        let candidates = self.candidate_synonyms(source_word).await;
        if candidates.is_empty() {
            tracing::debug!(source_word, "no synonyms found");
            return;
        }

        let translated = join_all(candidates.iter().map(|synonym| async move {
            match self
                .translator
                .translate(synonym, source_lang, target_lang)
                .await
            {
                Ok(translation) => Some((synonym, translation.trim().to_lowercase())),
                Err(e) => {
                    tracing::debug!(synonym = %synonym, error = %e, "synonym translation failed");
                    None
                }
            }
        }))
        .await;

        for (synonym, translation) in translated.into_iter().flatten() {
            if is_relevant(&translation, original, self.config.relevance_threshold) {
                tracing::trace!(synonym = %synonym, translation = %translation, "synonym kept");
                answers.insert(&translation);
            } else {
                tracing::trace!(synonym = %synonym, translation = %translation, "synonym too different, skipped");
            }
        }
    }

    /// Synonyms worth translating: distinct, not the word itself, capped.
    async fn candidate_synonyms(&self, source_word: &str) -> Vec<String> {
        let fetched = match self.synonyms.fetch_synonyms(source_word).await {
            Ok(fetched) => fetched,
            Err(e) => {
                tracing::warn!(source_word, error = %e, "synonym lookup failed");
                return vec![];
            }
        };

        let source = source_word.trim().to_lowercase();
        let mut seen = HashSet::new();
        fetched
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .filter(|s| {
                let lower = s.to_lowercase();
                lower != source && seen.insert(lower)
            })
            .take(self.config.max_synonyms)
            .collect()
    }
}

/// A synonym's translation is kept when it stays close to the canonical one.
fn is_relevant(translation: &str, original: &str, threshold: f64) -> bool {
    if translation.is_empty() {
        return false;
    }
    if similarity(translation, original) >= threshold {
        return true;
    }
    // An empty canonical translation is a substring of everything; treat it as
    // matching nothing so a blank card does not accept every synonym.
    !original.is_empty() && (translation.contains(original) || original.contains(translation))
}

/// Insertion-ordered set, unique on the lowercased trimmed form.
struct AnswerSet {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl AnswerSet {
    fn new() -> Self {
        Self {
            seen: HashSet::new(),
            items: Vec::new(),
        }
    }

    fn insert(&mut self, answer: &str) {
        let answer = answer.trim().to_lowercase();
        if self.seen.insert(answer.clone()) {
            self.items.push(answer);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.items
    }
}
