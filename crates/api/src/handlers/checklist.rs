//! Handlers for a project's launch checklist.

use axum::extract::{Path, State};
use axum::Json;
use launchpad_core::checklist::{
    completed_count, generate_launch_checklist, set_item_completed, ChecklistItem,
};
use launchpad_core::error::CoreError;
use launchpad_core::types::DbId;
use launchpad_db::models::project::ProjectWithProgress;
use launchpad_db::repositories::ProjectRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::project::find_owned;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ToggleItemRequest {
    pub completed: bool,
}

async fn store(
    state: &AppState,
    id: DbId,
    user: &AuthUser,
    items: &[ChecklistItem],
) -> AppResult<ProjectWithProgress> {
    let value = serde_json::to_value(items)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize checklist: {e}")))?;
    let project = ProjectRepo::set_checklist(&state.pool, id, user.user_id, &value)
        .await?
        .ok_or_else(|| CoreError::not_found("Project", id))?;
    Ok(project.into())
}

/// POST /api/v1/projects/{id}/checklist
///
/// Replace the project's checklist with a fresh one. The project must already
/// have a blueprint.
pub async fn generate(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProjectWithProgress>>> {
    let project = find_owned(&state, id, &user).await?;
    if !project.artifacts().blueprint {
        return Err(AppError::BadRequest(
            "Generate a blueprint before creating a launch checklist".to_string(),
        ));
    }

    let items = generate_launch_checklist();
    let data = store(&state, id, &user, &items).await?;

    tracing::info!(project_id = id, items = items.len(), "Launch checklist generated");
    Ok(Json(DataResponse { data }))
}

/// PUT /api/v1/projects/{id}/checklist/{item_id}
pub async fn toggle_item(
    user: AuthUser,
    State(state): State<AppState>,
    Path((id, item_id)): Path<(DbId, String)>,
    Json(input): Json<ToggleItemRequest>,
) -> AppResult<Json<DataResponse<ProjectWithProgress>>> {
    let project = find_owned(&state, id, &user).await?;

    let items: Vec<ChecklistItem> = match project.checklist {
        Some(value) if !value.is_null() => serde_json::from_value(value).map_err(|e| {
            AppError::InternalError(format!("Stored checklist for project {id} is malformed: {e}"))
        })?,
        _ => return Err(CoreError::not_found("Checklist", id).into()),
    };

    let items = set_item_completed(&items, &item_id, input.completed)?;
    let data = store(&state, id, &user, &items).await?;

    tracing::debug!(
        project_id = id,
        item_id = %item_id,
        completed = input.completed,
        done = completed_count(&items),
        total = items.len(),
        "Checklist item updated",
    );
    Ok(Json(DataResponse { data }))
}
