//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wiring the router to in-process stub providers
//! - Stub translator and thesaurus that count their calls
//!
//! No network access is needed; the HTTP provider clients are replaced by stubs.

pub mod fixtures;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use vocab_core::{
    ExpanderConfig, MatchThresholds, ProviderError, SynonymExpander, SynonymSource, Translator,
};

use vocab_quiz_backend::{router, AppState};

/// Translator answering from a fixed dictionary. Unknown text fails.
pub struct StubTranslator {
    dictionary: HashMap<String, String>,
    calls: AtomicUsize,
}

impl StubTranslator {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            dictionary: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for StubTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_lang: &str,
        _target_lang: &str,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.dictionary
            .get(text)
            .cloned()
            .ok_or_else(|| ProviderError::NoTranslation(text.to_string()))
    }
}

/// Thesaurus returning the same list for every word.
pub struct StubThesaurus {
    synonyms: Vec<String>,
    calls: AtomicUsize,
}

impl StubThesaurus {
    pub fn new(synonyms: &[&str]) -> Self {
        Self {
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SynonymSource for StubThesaurus {
    async fn fetch_synonyms(&self, _word: &str) -> Result<Vec<String>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.synonyms.clone())
    }
}

/// Test context holding the router and handles on its stub providers.
pub struct TestContext {
    pub translator: Arc<StubTranslator>,
    pub thesaurus: Arc<StubThesaurus>,
    app: Router,
}

impl TestContext {
    /// Context with the fixture dictionary and thesaurus.
    pub fn new() -> Self {
        Self::with_providers(
            StubTranslator::new(fixtures::DICTIONARY),
            StubThesaurus::new(fixtures::HAPPY_SYNONYMS),
        )
    }

    pub fn with_providers(translator: StubTranslator, thesaurus: StubThesaurus) -> Self {
        let translator = Arc::new(translator);
        let thesaurus = Arc::new(thesaurus);

        let expander = SynonymExpander::new(
            thesaurus.clone(),
            translator.clone(),
            ExpanderConfig::default(),
        );
        let state = AppState {
            expander: Arc::new(expander),
            translator: translator.clone(),
            thresholds: MatchThresholds::default(),
        };

        Self {
            translator,
            thesaurus,
            app: router(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}
