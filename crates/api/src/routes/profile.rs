use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/profile`, always acting on the caller's own row.
///
/// ```text
/// GET    /    -> get
/// POST   /    -> create
/// PUT    /    -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(profile::get).post(profile::create).put(profile::update),
    )
}
