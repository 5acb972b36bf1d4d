//! Integration tests for `POST /api/generate-prompt`.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use common::{body_json, post_json, FakeProvider};
use reelprompt_core::instruction::SYSTEM_INSTRUCTION;
use serde_json::json;

// ---------------------------------------------------------------------------
// Manual mode
// ---------------------------------------------------------------------------

#[tokio::test]
async fn manual_mode_assembles_in_canonical_order() {
    let app = common::build_test_app(FakeProvider::replying_ok());

    let response = post_json(
        app.router,
        "/api/generate-prompt",
        json!({
            "description": "A hero walks.",
            "parameters": { "mood": "Calm", "genre": "Documentary" },
            "mode": "manual"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["prompt"], "A hero walks.. Genre: Documentary. Mood: Calm");
    assert_eq!(app.provider.calls(), 0);
}

#[tokio::test]
async fn manual_mode_with_blank_input_returns_empty_prompt() {
    let app = common::build_test_app(FakeProvider::replying_ok());

    let response = post_json(app.router, "/api/generate-prompt", json!({ "mode": "manual" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["prompt"], "");
}

#[tokio::test]
async fn mode_defaults_to_manual() {
    let app = common::build_test_app(FakeProvider::replying_ok());

    let response = post_json(
        app.router,
        "/api/generate-prompt",
        json!({ "parameters": { "platform": "Runway", "genre": "Cinematic" } }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["prompt"],
        "Genre: Cinematic. Target Platform: Runway"
    );
    assert_eq!(app.provider.calls(), 0);
}

// ---------------------------------------------------------------------------
// AI mode
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ai_mode_returns_completion_text() {
    let app = common::build_test_app(FakeProvider::replying_ok());

    let response = post_json(
        app.router,
        "/api/generate-prompt",
        json!({
            "description": "Sunset over mountains",
            "parameters": { "timeOfDay": "Golden Hour", "landscape": "Mountain" },
            "mode": "ai"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["prompt"],
        "A sweeping aerial shot of snow-capped peaks at golden hour"
    );
    assert_eq!(app.provider.calls(), 1);

    let request = app.provider.last_request().unwrap();
    assert_eq!(request.system, SYSTEM_INSTRUCTION);
    let description = request.user.find("Sunset over mountains").unwrap();
    let setting = request.user.find("- Setting: Mountain").unwrap();
    let time = request.user.find("- Time of Day: Golden Hour").unwrap();
    assert!(description < setting && setting < time);
}

#[tokio::test]
async fn ai_mode_with_blank_input_is_missing_input() {
    let app = common::build_test_app(FakeProvider::replying_ok());

    let response = post_json(
        app.router,
        "/api/generate-prompt",
        json!({ "description": "", "parameters": {}, "mode": "ai" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "MISSING_INPUT");
    assert_eq!(json["error"], "Missing information");
    assert_matches!(json["message"].as_str(), Some(msg) if msg.contains("description"));
    assert_eq!(app.provider.calls(), 0);
}

#[tokio::test]
async fn ai_mode_upstream_failure_returns_502_with_message() {
    let app = common::build_test_app(FakeProvider::failing());

    let response = post_json(
        app.router,
        "/api/generate-prompt",
        json!({ "description": "Harbour at dawn", "mode": "ai" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPSTREAM_FAILURE");
    assert_eq!(json["error"], "Failed to generate prompt");
    assert_eq!(
        json["message"],
        "The server had an error while processing your request"
    );
}

// ---------------------------------------------------------------------------
// Input validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn value_outside_allowed_list_is_rejected() {
    let app = common::build_test_app(FakeProvider::replying_ok());

    let response = post_json(
        app.router,
        "/api/generate-prompt",
        json!({ "parameters": { "weather": "Hail" }, "mode": "ai" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(app.provider.calls(), 0);
}

#[tokio::test]
async fn unknown_category_is_a_client_error() {
    let app = common::build_test_app(FakeProvider::replying_ok());

    let response = post_json(
        app.router,
        "/api/generate-prompt",
        json!({ "parameters": { "colour": "Red" } }),
    )
    .await;

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn empty_parameter_values_are_ignored() {
    let app = common::build_test_app(FakeProvider::replying_ok());

    let response = post_json(
        app.router,
        "/api/generate-prompt",
        json!({ "parameters": { "genre": "", "mood": null, "tone": "Dark" } }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["prompt"], "Tone: Dark");
}
