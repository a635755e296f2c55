//! Translation API tests.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::fixtures;
use common::{StubThesaurus, StubTranslator, TestContext};

fn strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

/// Test English words are expanded with relevant synonym translations.
#[tokio::test]
async fn test_valid_translations_expanded() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/translations/valid")
        .json(&fixtures::valid_translations_request("happy", "Feliz", "en", "es"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    // "contento" is too far from "feliz"; "joyous" has no translation.
    assert_eq!(
        strings(&body["valid_translations"]),
        vec!["feliz", "felices", "muy feliz"]
    );
    assert_eq!(ctx.thesaurus.calls(), 1);
    assert_eq!(ctx.translator.calls(), 5);
}

/// Test a repeated request is served from cache.
#[tokio::test]
async fn test_valid_translations_cached() {
    let ctx = TestContext::new();
    let server = ctx.server();
    let request = fixtures::valid_translations_request("happy", "feliz", "en", "es");

    let first: Value = server.post("/api/translations/valid").json(&request).await.json();
    let second: Value = server.post("/api/translations/valid").json(&request).await.json();

    assert_eq!(first, second);
    assert_eq!(ctx.thesaurus.calls(), 1);
    assert_eq!(ctx.translator.calls(), 5);
}

/// Test non-English sources only get the canonical translation.
#[tokio::test]
async fn test_valid_translations_non_english() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/translations/valid")
        .json(&fixtures::valid_translations_request("heureux", "Feliz ", "fr", "es"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(strings(&body["valid_translations"]), vec!["feliz"]);
    assert_eq!(ctx.thesaurus.calls(), 0);
    assert_eq!(ctx.translator.calls(), 0);
}

/// Test a word without synonyms returns only the canonical translation.
#[tokio::test]
async fn test_valid_translations_no_synonyms() {
    let ctx = TestContext::with_providers(
        StubTranslator::new(fixtures::DICTIONARY),
        StubThesaurus::new(&[]),
    );
    let server = ctx.server();

    let response = server
        .post("/api/translations/valid")
        .json(&fixtures::valid_translations_request("hello", "hola", "en", "es"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(strings(&body["valid_translations"]), vec!["hola"]);
    assert_eq!(ctx.translator.calls(), 0);
}

/// Test language defaults apply when omitted.
#[tokio::test]
async fn test_valid_translations_default_langs() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/translations/valid")
        .json(&json!({ "source_word": "happy", "translation": "счастливый" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(strings(&body["valid_translations"])[0], "счастливый");
    assert_eq!(ctx.thesaurus.calls(), 1);
}

/// Test empty source word is rejected.
#[tokio::test]
async fn test_valid_translations_empty_word() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/translations/valid")
        .json(&fixtures::valid_translations_request("  ", "feliz", "en", "es"))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

/// Test clearing the cache forces a fresh expansion.
#[tokio::test]
async fn test_clear_cache() {
    let ctx = TestContext::new();
    let server = ctx.server();
    let request = fixtures::valid_translations_request("happy", "feliz", "en", "es");

    server.post("/api/translations/valid").json(&request).await.assert_status_ok();

    let response = server.delete("/api/translations/cache").await;
    response.assert_status(StatusCode::NO_CONTENT);

    server.post("/api/translations/valid").json(&request).await.assert_status_ok();
    assert_eq!(ctx.thesaurus.calls(), 2);
}

/// Test single translation.
#[tokio::test]
async fn test_translate() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/translations")
        .json(&json!({ "text": " hello ", "source_lang": "en", "target_lang": "es" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["translation"], "hola");
}

/// Test provider failure maps to bad gateway.
#[tokio::test]
async fn test_translate_provider_error() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/translations")
        .json(&json!({ "text": "xyzzy", "source_lang": "en", "target_lang": "es" }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["error"], "provider_error");
}

/// Test blank text is rejected before reaching the provider.
#[tokio::test]
async fn test_translate_blank() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/translations")
        .json(&json!({ "text": "   " }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(ctx.translator.calls(), 0);
}

/// Test bulk translation keeps untranslatable words.
#[tokio::test]
async fn test_bulk_translate() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/translations/bulk")
        .json(&fixtures::bulk_request(&["hello", "", "xyzzy", "happy"]))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["translations"],
        json!([
            { "word": "hello", "translation": "hola", "translated": true },
            { "word": "xyzzy", "translation": "xyzzy", "translated": false },
            { "word": "happy", "translation": "feliz", "translated": true },
        ])
    );
}

/// Test oversized bulk requests are rejected.
#[tokio::test]
async fn test_bulk_translate_too_many() {
    let ctx = TestContext::new();
    let server = ctx.server();
    let words: Vec<String> = (0..201).map(|i| format!("word{i}")).collect();

    let response = server
        .post("/api/translations/bulk")
        .json(&json!({ "words": words }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(ctx.translator.calls(), 0);
}
