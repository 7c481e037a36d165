//! Handler for the AI tools page.

use axum::extract::State;
use axum::Json;
use launchpad_core::ai_tools::ToolReport;
use launchpad_core::validation::RequiredFields;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiToolRequest {
    pub tool_id: Option<String>,
    /// Free-form tool input; optional.
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct AiToolResponse {
    pub results: ToolReport,
}

/// POST /api/v1/ai-tools
pub async fn run_tool(
    State(state): State<AppState>,
    Json(input): Json<AiToolRequest>,
) -> AppResult<Json<AiToolResponse>> {
    RequiredFields::new()
        .text("toolId", input.tool_id.as_deref())
        .check()?;
    let tool_id = input.tool_id.unwrap_or_default();

    tracing::info!(tool_id = %tool_id, "Running AI tool");

    let results = state
        .generator
        .ai_tool(&tool_id, input.data.as_ref())
        .await
        .map_err(AppError::generation("tool report"))?;

    Ok(Json(AiToolResponse { results }))
}
