use axum::routing::post;
use axum::Router;

use crate::handlers::webhook;
use crate::state::AppState;

/// Routes mounted at `/stripe`. Authenticated by signature, not by token.
///
/// ```text
/// POST   /webhook    -> receive
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/webhook", post(webhook::receive))
}
