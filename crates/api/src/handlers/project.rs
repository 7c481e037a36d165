//! Handlers for the `/projects` resource.
//!
//! Every route is scoped to the caller: another user's project is reported
//! as not found.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use launchpad_core::error::CoreError;
use launchpad_core::project::{normalize_features, validate_new_project, ProjectStatus};
use launchpad_core::types::DbId;
use launchpad_core::validation::RequiredFields;
use launchpad_db::models::project::{CreateProject, Project, ProjectWithProgress, UpdateProject};
use launchpad_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Load one of the caller's projects or fail with 404.
pub(crate) async fn find_owned(state: &AppState, id: DbId, user: &AuthUser) -> AppResult<Project> {
    ProjectRepo::find_by_id_for_owner(&state.pool, id, user.user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Project", id).into())
}

/// POST /api/v1/projects
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<ProjectWithProgress>>)> {
    let main_features = validate_new_project(
        &input.name,
        &input.description,
        &input.target_market,
        &input.main_features,
    )?;
    let input = CreateProject {
        name: input.name.trim().to_string(),
        description: input.description.trim().to_string(),
        target_market: input.target_market.trim().to_string(),
        main_features,
        ..input
    };

    let project = ProjectRepo::create(&state.pool, user.user_id, &input).await?;
    tracing::info!(project_id = project.id, user_id = user.user_id, "Project created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: project.into(),
        }),
    ))
}

/// GET /api/v1/projects
pub async fn list(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ProjectWithProgress>>>> {
    let projects = ProjectRepo::list_by_owner(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse {
        data: projects.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProjectWithProgress>>> {
    let project = find_owned(&state, id, &user).await?;
    Ok(Json(DataResponse {
        data: project.into(),
    }))
}

/// PUT /api/v1/projects/{id}
///
/// Partial update. Supplied text fields must not be blank, a supplied status
/// must be a known label and a supplied feature list must still contain at
/// least one feature.
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateProject>,
) -> AppResult<Json<DataResponse<ProjectWithProgress>>> {
    let supplied = [
        ("name", &input.name),
        ("description", &input.description),
        ("target_market", &input.target_market),
    ];
    supplied
        .into_iter()
        .filter(|(_, value)| value.is_some())
        .fold(RequiredFields::new(), |fields, (name, value)| {
            fields.text(name, value.as_deref())
        })
        .check()?;
    for value in [
        &mut input.name,
        &mut input.description,
        &mut input.target_market,
    ] {
        if let Some(text) = value {
            *text = text.trim().to_string();
        }
    }

    if let Some(status) = &input.status {
        status.parse::<ProjectStatus>()?;
    }
    if let Some(features) = &input.main_features {
        let features = normalize_features(features);
        if features.is_empty() {
            return Err(CoreError::Validation(
                "Please add at least one main feature".to_string(),
            )
            .into());
        }
        input.main_features = Some(features);
    }

    let project = ProjectRepo::update(&state.pool, id, user.user_id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Project", id))?;

    tracing::info!(project_id = id, user_id = user.user_id, "Project updated");
    Ok(Json(DataResponse {
        data: project.into(),
    }))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ProjectRepo::delete(&state.pool, id, user.user_id).await? {
        tracing::info!(project_id = id, user_id = user.user_id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("Project", id).into())
    }
}
