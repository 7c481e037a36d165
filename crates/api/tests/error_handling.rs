//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use launchpad_ai::GenerationError;
use launchpad_api::error::AppError;
use launchpad_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn upstream(status: u16) -> AppError {
    AppError::generation("blueprint")(GenerationError::Api {
        status,
        body: "upstream said no".to_string(),
    })
}

// ---------------------------------------------------------------------------
// Core errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let (status, json) = error_to_response(CoreError::not_found("Project", 42).into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Project with id 42 not found");
}

#[tokio::test]
async fn validation_error_returns_400_with_message() {
    let err = CoreError::Validation("Missing required fields: description".into());
    let (status, json) = error_to_response(err.into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Missing required fields: description");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let (status, json) = error_to_response(CoreError::Conflict("duplicate".into()).into()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn internal_error_is_sanitized() {
    let (status, json) =
        error_to_response(AppError::InternalError("secret stack trace".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Generation errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rejected_api_key_maps_to_400() {
    for code in [401, 403] {
        let (status, json) = error_to_response(upstream(code)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "GENERATION_AUTH_ERROR");
    }
}

#[tokio::test]
async fn upstream_rate_limit_maps_to_429() {
    let (status, json) = error_to_response(upstream(429)).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["code"], "RATE_LIMITED");
}

#[tokio::test]
async fn other_generation_failures_name_the_artifact() {
    let (status, json) = error_to_response(upstream(502)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "GENERATION_ERROR");
    assert_eq!(json["error"], "Failed to generate blueprint");

    let err = AppError::generation("pitch deck")(GenerationError::EmptyResponse);
    let (_, json) = error_to_response(err).await;
    assert_eq!(json["error"], "Failed to generate pitch deck");
}
