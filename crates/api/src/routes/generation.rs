//! Route definitions for the stateless generation endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::{ai_tools, generation, mvp};
use crate::state::AppState;

/// Routes merged at the `/api/v1` root.
///
/// ```text
/// POST   /generate-blueprint        -> generate_blueprint
/// POST   /generate-pitch-deck       -> generate_pitch_deck
/// POST   /generate-wireframe        -> generate_wireframe
/// POST   /ai-tools                  -> run_tool
/// POST   /mvp-generator             -> generate
/// POST   /mvp-generator/archive     -> archive
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate-blueprint", post(generation::generate_blueprint))
        .route("/generate-pitch-deck", post(generation::generate_pitch_deck))
        .route("/generate-wireframe", post(generation::generate_wireframe))
        .route("/ai-tools", post(ai_tools::run_tool))
        .route("/mvp-generator", post(mvp::generate))
        .route("/mvp-generator/archive", post(mvp::archive))
}
