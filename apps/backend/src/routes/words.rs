//! Word list endpoints

use axum::Json;

use crate::models::*;
use vocab_core::{parse_words, INPUT_EXAMPLES};

/// POST /api/words/parse
pub async fn parse(Json(payload): Json<ParseWordsRequest>) -> Json<ParseWordsResponse> {
    let words = parse_words(&payload.input);
    tracing::debug!(count = words.len(), "parsed word list");
    Json(ParseWordsResponse { words })
}

/// GET /api/words/examples
pub async fn examples() -> Json<InputExamplesResponse> {
    let examples = INPUT_EXAMPLES
        .iter()
        .map(|(label, input)| InputExample {
            label: label.to_string(),
            input: input.to_string(),
        })
        .collect();
    Json(InputExamplesResponse { examples })
}
