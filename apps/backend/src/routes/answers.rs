//! Answer validation endpoints

use axum::{extract::State, Json};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;
use vocab_core::validate_answer_with;

/// Upper bound on characters in the typed answer and in each valid answer.
const MAX_ANSWER_CHARS: usize = 500;
/// Upper bound on valid answers compared against.
const MAX_VALID_ANSWERS: usize = 50;

/// POST /api/answers/validate
pub async fn validate(
    State(state): State<AppState>,
    Json(payload): Json<ValidateAnswerRequest>,
) -> Result<Json<ValidateAnswerResponse>> {
    if payload.valid_answers.is_empty() {
        return Err(ApiError::BadRequest(
            "valid_answers must contain at least one answer".to_string(),
        ));
    }

    if payload.valid_answers.len() > MAX_VALID_ANSWERS {
        return Err(ApiError::BadRequest(format!(
            "at most {} valid answers per request",
            MAX_VALID_ANSWERS
        )));
    }
    let too_long = |s: &String| s.chars().count() > MAX_ANSWER_CHARS;
    if too_long(&payload.answer) || payload.valid_answers.iter().any(too_long) {
        return Err(ApiError::BadRequest(format!(
            "answers are limited to {} characters",
            MAX_ANSWER_CHARS
        )));
    }

    let result = validate_answer_with(
        &payload.answer,
        payload.valid_answers.as_slice(),
        &state.thresholds,
    );
    Ok(Json(result.into()))
}
