//! Integration tests for the public generation endpoints.
//!
//! These run against the mock generator and never touch the database.

mod common;

use std::io::{Cursor, Read};

use axum::http::StatusCode;
use common::{body_bytes, body_json, build_offline_app, post_json};
use serde_json::json;

fn blueprint_body() -> serde_json::Value {
    json!({
        "projectName": "Task Flow",
        "description": "Kanban for freelancers",
        "targetMarket": "Freelancers",
        "features": ["Boards", "Invoices", "Time tracking", "Reports"]
    })
}

// ---------------------------------------------------------------------------
// Blueprint
// ---------------------------------------------------------------------------

#[tokio::test]
async fn blueprint_returns_generated_document() {
    let response = post_json(build_offline_app(), "/api/v1/generate-blueprint", blueprint_body()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let blueprint = &json["blueprint"];
    assert!(blueprint["concept"].as_str().unwrap().contains("Task Flow"));
    assert_eq!(blueprint["features"].as_array().unwrap().len(), 4);
    assert!(blueprint["marketAnalysis"]["targetAudience"].is_string());
}

#[tokio::test]
async fn blueprint_lists_every_missing_field() {
    let response = post_json(
        build_offline_app(),
        "/api/v1/generate-blueprint",
        json!({"projectName": "Task Flow", "description": "  ", "features": []}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["error"],
        "Missing required fields: description, targetMarket, features"
    );
}

// ---------------------------------------------------------------------------
// Pitch deck and wireframe
// ---------------------------------------------------------------------------

#[tokio::test]
async fn pitch_deck_has_ten_slides() {
    let response = post_json(
        build_offline_app(),
        "/api/v1/generate-pitch-deck",
        json!({"projectName": "Task Flow", "blueprint": {"concept": "Boards for freelancers"}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let slides = json["pitchDeck"].as_array().unwrap();
    assert_eq!(slides.len(), 10);
    assert_eq!(slides[0]["title"], "Problem Statement");
}

#[tokio::test]
async fn pitch_deck_rejects_empty_blueprint() {
    let response = post_json(
        build_offline_app(),
        "/api/v1/generate-pitch-deck",
        json!({"projectName": "Task Flow", "blueprint": {}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Missing required fields: blueprint"
    );
}

#[tokio::test]
async fn wireframe_names_the_project() {
    let response = post_json(
        build_offline_app(),
        "/api/v1/generate-wireframe",
        json!({"projectName": "Task Flow", "blueprint": {"concept": "x"}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["wireframe"]["name"].as_str().unwrap().contains("Task Flow"));
    assert!(json["wireframe"]["url"].as_str().unwrap().starts_with("https://"));
}

#[tokio::test]
async fn wireframe_lists_every_missing_field() {
    let response = post_json(
        build_offline_app(),
        "/api/v1/generate-wireframe",
        json!({"blueprint": null, "projectName": "  "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Missing required fields: blueprint, projectName");
}

// ---------------------------------------------------------------------------
// AI tools
// ---------------------------------------------------------------------------

#[tokio::test]
async fn idea_validator_scores_within_band() {
    let response = post_json(
        build_offline_app(),
        "/api/v1/ai-tools",
        json!({"toolId": "idea-validator", "data": {"idea": "Kanban"}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["results"]["type"], "validation");
    let score = json["results"]["score"].as_u64().unwrap();
    assert!((7..=10).contains(&score));
}

#[tokio::test]
async fn unknown_tool_returns_generic_report() {
    let response = post_json(
        build_offline_app(),
        "/api/v1/ai-tools",
        json!({"toolId": "horoscope"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["results"]["type"], "generic");
}

#[tokio::test]
async fn ai_tools_requires_tool_id() {
    let response = post_json(build_offline_app(), "/api/v1/ai-tools", json!({"data": {}})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Missing required fields: toolId"
    );
}

// ---------------------------------------------------------------------------
// MVP scaffold
// ---------------------------------------------------------------------------

fn mvp_body() -> serde_json::Value {
    json!({
        "mvpConfig": {
            "name": "Task Flow",
            "features": ["Boards", "Team Chat"],
            "techStack": "vue",
            "database": "firebase"
        }
    })
}

#[tokio::test]
async fn mvp_generator_returns_every_section() {
    let response = post_json(build_offline_app(), "/api/v1/mvp-generator", mvp_body()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let code = &json["generatedCode"];
    assert!(!code["components"].as_array().unwrap().is_empty());
    assert!(code["database"]["schema"]
        .as_str()
        .unwrap()
        .contains("CREATE TABLE team_chat ("));

    let package: serde_json::Value =
        serde_json::from_str(code["deployment"]["packageJson"].as_str().unwrap()).unwrap();
    assert_eq!(package["name"], "task-flow");
    assert!(package["dependencies"]["vue"].is_string());
    assert!(code["styles"]["globals.css"].is_string());
}

#[tokio::test]
async fn mvp_generator_requires_a_name() {
    let response = post_json(
        build_offline_app(),
        "/api/v1/mvp-generator",
        json!({"mvpConfig": {"features": ["Boards"]}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Missing required fields: mvpConfig.name"
    );
}

#[tokio::test]
async fn mvp_archive_is_a_zip_under_the_project_slug() {
    let response = post_json(build_offline_app(), "/api/v1/mvp-generator/archive", mvp_body()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/zip");
    assert_eq!(
        response.headers()["content-disposition"],
        "attachment; filename=\"task-flow-mvp.zip\""
    );

    let bytes = body_bytes(response).await;
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert!(archive.len() > 5);
    for index in 0..archive.len() {
        let name = archive.by_index(index).unwrap().name().to_string();
        assert!(name.starts_with("task-flow/"), "unexpected entry {name}");
    }

    let mut dockerfile = String::new();
    archive
        .by_name("task-flow/Dockerfile")
        .unwrap()
        .read_to_string(&mut dockerfile)
        .unwrap();
    assert!(dockerfile.starts_with("FROM node:18-alpine"));
}
