//! Handlers for the artifact generation endpoints.
//!
//! Each endpoint checks that its required fields are present, then hands the
//! request to the configured generator.

use axum::extract::State;
use axum::Json;
use launchpad_core::blueprint::{Blueprint, IdeaBrief};
use launchpad_core::pitch_deck::PitchDeckSlide;
use launchpad_core::validation::RequiredFields;
use launchpad_core::wireframe::Wireframe;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Blueprint
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintRequest {
    pub project_name: Option<String>,
    pub description: Option<String>,
    pub target_market: Option<String>,
    pub features: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct BlueprintResponse {
    pub blueprint: Blueprint,
}

/// POST /api/v1/generate-blueprint
pub async fn generate_blueprint(
    State(state): State<AppState>,
    Json(input): Json<BlueprintRequest>,
) -> AppResult<Json<BlueprintResponse>> {
    RequiredFields::new()
        .text("projectName", input.project_name.as_deref())
        .text("description", input.description.as_deref())
        .text("targetMarket", input.target_market.as_deref())
        .list("features", input.features.as_deref())
        .check()?;

    let idea = IdeaBrief {
        project_name: input.project_name.unwrap_or_default(),
        description: input.description.unwrap_or_default(),
        target_market: input.target_market.unwrap_or_default(),
        features: input.features.unwrap_or_default(),
    };

    tracing::info!(
        project = %idea.project_name,
        features = idea.features.len(),
        mode = state.generator.mode(),
        "Generating blueprint",
    );

    let blueprint = state
        .generator
        .blueprint(&idea)
        .await
        .map_err(AppError::generation("blueprint"))?;

    Ok(Json(BlueprintResponse { blueprint }))
}

// ---------------------------------------------------------------------------
// Pitch deck
// ---------------------------------------------------------------------------

/// Body shared by the pitch-deck and wireframe endpoints. The blueprint is
/// whatever the client holds, so it is read leniently.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintArtifactRequest {
    pub blueprint: Option<serde_json::Value>,
    pub project_name: Option<String>,
}

impl BlueprintArtifactRequest {
    fn check(&self) -> AppResult<()> {
        RequiredFields::new()
            .json("blueprint", self.blueprint.as_ref())
            .text("projectName", self.project_name.as_deref())
            .check()?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchDeckResponse {
    pub pitch_deck: Vec<PitchDeckSlide>,
}

/// POST /api/v1/generate-pitch-deck
pub async fn generate_pitch_deck(
    State(state): State<AppState>,
    Json(input): Json<BlueprintArtifactRequest>,
) -> AppResult<Json<PitchDeckResponse>> {
    input.check()?;

    let blueprint = input
        .blueprint
        .as_ref()
        .map(Blueprint::from_value_lenient)
        .unwrap_or_default();
    let project_name = input.project_name.unwrap_or_default();

    tracing::info!(project = %project_name, mode = state.generator.mode(), "Generating pitch deck");

    let pitch_deck = state
        .generator
        .pitch_deck(&blueprint, &project_name)
        .await
        .map_err(AppError::generation("pitch deck"))?;

    Ok(Json(PitchDeckResponse { pitch_deck }))
}

// ---------------------------------------------------------------------------
// Wireframe
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct WireframeResponse {
    pub wireframe: Wireframe,
}

/// POST /api/v1/generate-wireframe
pub async fn generate_wireframe(
    State(state): State<AppState>,
    Json(input): Json<BlueprintArtifactRequest>,
) -> AppResult<Json<WireframeResponse>> {
    input.check()?;
    let project_name = input.project_name.unwrap_or_default();

    tracing::info!(project = %project_name, "Generating wireframe");

    let wireframe = state
        .generator
        .wireframe(&project_name)
        .await
        .map_err(AppError::generation("wireframe"))?;

    Ok(Json(WireframeResponse { wireframe }))
}
