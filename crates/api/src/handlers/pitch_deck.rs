//! Plain-text export of a stored pitch deck.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use launchpad_core::error::CoreError;
use launchpad_core::pitch_deck::{export_filename, export_text, PitchDeckSlide};
use launchpad_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::handlers::attachment_headers;
use crate::handlers::project::find_owned;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/projects/{id}/pitch-deck/export
pub async fn export(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = find_owned(&state, id, &user).await?;

    let slides: Vec<PitchDeckSlide> = match project.pitch_deck {
        Some(value) if !value.is_null() => serde_json::from_value(value).map_err(|e| {
            AppError::InternalError(format!("Stored pitch deck for project {id} is malformed: {e}"))
        })?,
        _ => Vec::new(),
    };
    if slides.is_empty() {
        return Err(CoreError::not_found("Pitch deck", id).into());
    }

    Ok((
        StatusCode::OK,
        attachment_headers("text/plain; charset=utf-8", &export_filename(&project.name)),
        export_text(&slides),
    ))
}
