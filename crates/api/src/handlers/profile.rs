//! Handlers for the caller's own profile.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use launchpad_core::error::CoreError;
use launchpad_db::models::profile::{CreateProfile, Profile, UpdateProfile};
use launchpad_db::repositories::ProfileRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn validate(input: &impl Validate) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))
}

/// GET /api/v1/profile
pub async fn get(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Profile>>> {
    let profile = ProfileRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Profile", user.user_id))?;
    Ok(Json(DataResponse { data: profile }))
}

/// POST /api/v1/profile
///
/// Create the profile row for the caller. A second call conflicts on the
/// primary key.
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateProfile>,
) -> AppResult<(StatusCode, Json<DataResponse<Profile>>)> {
    validate(&input)?;
    let profile = ProfileRepo::create(&state.pool, user.user_id, &input).await?;
    tracing::info!(user_id = user.user_id, "Profile created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: profile })))
}

/// PUT /api/v1/profile
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<DataResponse<Profile>>> {
    validate(&input)?;
    let profile = ProfileRepo::update_settings(&state.pool, user.user_id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Profile", user.user_id))?;
    Ok(Json(DataResponse { data: profile }))
}
