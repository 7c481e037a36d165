//! Route definitions for the `/projects` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{checklist, pitch_deck, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                             -> list
/// POST   /                             -> create
/// GET    /{id}                         -> get_by_id
/// PUT    /{id}                         -> update
/// DELETE /{id}                         -> delete
///
/// POST   /{id}/checklist               -> checklist::generate
/// PUT    /{id}/checklist/{item_id}     -> checklist::toggle_item
/// GET    /{id}/pitch-deck/export       -> pitch_deck::export
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/checklist", post(checklist::generate))
        .route("/{id}/checklist/{item_id}", put(checklist::toggle_item))
        .route("/{id}/pitch-deck/export", get(pitch_deck::export))
}
