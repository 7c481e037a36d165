//! Handlers for the MVP code scaffold.

use std::io::{Cursor, Write};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use launchpad_core::scaffold::{kebab_slug, GeneratedCode, MvpConfig};
use launchpad_core::validation::RequiredFields;
use serde::{Deserialize, Serialize};
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

use crate::error::{AppError, AppResult};
use crate::handlers::attachment_headers;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MvpRequest {
    pub mvp_config: Option<MvpConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MvpResponse {
    pub generated_code: GeneratedCode,
}

async fn generate_code(state: &AppState, input: MvpRequest) -> AppResult<GeneratedCode> {
    RequiredFields::new()
        .text(
            "mvpConfig.name",
            input.mvp_config.as_ref().map(|c| c.name.as_str()),
        )
        .check()?;
    let config = input.mvp_config.unwrap_or_default();

    tracing::info!(
        project = %config.name,
        tech_stack = config.tech_stack(),
        database = config.database(),
        features = config.features.len(),
        "Generating MVP scaffold",
    );

    state
        .generator
        .mvp_code(&config)
        .await
        .map_err(AppError::generation("MVP code"))
}

/// POST /api/v1/mvp-generator
pub async fn generate(
    State(state): State<AppState>,
    Json(input): Json<MvpRequest>,
) -> AppResult<Json<MvpResponse>> {
    let generated_code = generate_code(&state, input).await?;
    Ok(Json(MvpResponse { generated_code }))
}

/// POST /api/v1/mvp-generator/archive
///
/// Same scaffold as [`generate`], delivered as a ZIP with every file under a
/// top-level directory named after the project.
pub async fn archive(
    State(state): State<AppState>,
    Json(input): Json<MvpRequest>,
) -> AppResult<impl IntoResponse> {
    let name = input
        .mvp_config
        .as_ref()
        .map(|c| kebab_slug(c.name.trim()))
        .unwrap_or_default();
    let code = generate_code(&state, input).await?;

    let bytes = build_archive(&code, &name)
        .map_err(|e| AppError::InternalError(format!("Failed to build scaffold archive: {e}")))?;

    tracing::debug!(project = %name, size = bytes.len(), "Built scaffold archive");

    Ok((
        StatusCode::OK,
        attachment_headers("application/zip", &format!("{name}-mvp.zip")),
        bytes,
    ))
}

/// Write every generated file into an in-memory ZIP under `root/`.
pub fn build_archive(code: &GeneratedCode, root: &str) -> zip::result::ZipResult<Vec<u8>> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (path, content) in code.files() {
        writer.start_file(format!("{root}/{path}"), options)?;
        writer.write_all(content.as_bytes())?;
    }

    Ok(writer.finish()?.into_inner())
}
