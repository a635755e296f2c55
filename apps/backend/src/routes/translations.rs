//! Translation endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::translate::translate_bulk;
use crate::AppState;
use vocab_core::Translator;

/// Upper bound on words per bulk request.
const MAX_BULK_WORDS: usize = 200;

/// POST /api/translations/valid
pub async fn valid(
    State(state): State<AppState>,
    Json(payload): Json<ValidTranslationsRequest>,
) -> Result<Json<ValidTranslationsResponse>> {
    if payload.source_word.trim().is_empty() {
        return Err(ApiError::BadRequest("source_word must not be empty".to_string()));
    }

    let valid_translations = state
        .expander
        .get_all_valid_translations(
            &payload.source_word,
            &payload.translation,
            &payload.source_lang,
            &payload.target_lang,
        )
        .await;

    Ok(Json(ValidTranslationsResponse { valid_translations }))
}

/// POST /api/translations
pub async fn translate(
    State(state): State<AppState>,
    Json(payload): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>> {
    let text = payload.text.trim();
    if text.is_empty() {
        return Err(ApiError::BadRequest("text must not be empty".to_string()));
    }

    let translation = state
        .translator
        .translate(text, &payload.source_lang, &payload.target_lang)
        .await?;

    Ok(Json(TranslateResponse { translation }))
}

/// POST /api/translations/bulk
pub async fn bulk(
    State(state): State<AppState>,
    Json(payload): Json<BulkTranslateRequest>,
) -> Result<Json<BulkTranslateResponse>> {
    if payload.words.len() > MAX_BULK_WORDS {
        return Err(ApiError::BadRequest(format!(
            "at most {} words per request",
            MAX_BULK_WORDS
        )));
    }

    let translations = translate_bulk(
        state.translator.as_ref(),
        &payload.words,
        &payload.source_lang,
        &payload.target_lang,
    )
    .await;

    Ok(Json(BulkTranslateResponse { translations }))
}

/// DELETE /api/translations/cache
pub async fn clear_cache(State(state): State<AppState>) -> StatusCode {
    state.expander.clear_cache().await;
    tracing::info!("synonym cache cleared");
    StatusCode::NO_CONTENT
}
