pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::{MatchThresholds, NoSynonyms, SynonymExpander, SynonymSource, Translator};

use crate::config::Config;
use crate::services::thesaurus::NinjasThesaurus;
use crate::services::translate::HttpTranslator;
use crate::services::upstash::UpstashCache;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub expander: Arc<SynonymExpander>,
    pub translator: Arc<dyn Translator>,
    pub thresholds: MatchThresholds,
}

impl AppState {
    /// Wire the HTTP providers and caches described by `config`.
    pub fn from_config(config: &Config) -> Self {
        let client = reqwest::Client::new();
        let translator: Arc<dyn Translator> = Arc::new(HttpTranslator::new(client.clone()));

        let synonyms: Arc<dyn SynonymSource> = match &config.ninjas_api_key {
            Some(key) => Arc::new(NinjasThesaurus::new(client.clone(), key.clone())),
            None => {
                tracing::warn!("NINJAS_API_KEY not set, synonym expansion disabled");
                Arc::new(NoSynonyms)
            }
        };

        let expander = match &config.upstash {
            Some(upstash) => {
                tracing::info!("Using Upstash Redis as durable synonym cache");
                SynonymExpander::with_durable_cache(
                    synonyms,
                    translator.clone(),
                    Arc::new(UpstashCache::new(client, upstash)),
                    config.expander.clone(),
                )
            }
            None => {
                tracing::info!("No durable cache configured, using in-memory cache only");
                SynonymExpander::new(synonyms, translator.clone(), config.expander.clone())
            }
        };

        Self {
            expander: Arc::new(expander),
            translator,
            thresholds: config.thresholds,
        }
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Word routes
        .route("/api/words/parse", post(routes::words::parse))
        .route("/api/words/examples", get(routes::words::examples))
        // Answer routes
        .route("/api/answers/validate", post(routes::answers::validate))
        // Translation routes
        .route("/api/translations", post(routes::translations::translate))
        .route("/api/translations/valid", post(routes::translations::valid))
        .route("/api/translations/bulk", post(routes::translations::bulk))
        .route(
            "/api/translations/cache",
            delete(routes::translations::clear_cache),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let state = AppState::from_config(&config);

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
