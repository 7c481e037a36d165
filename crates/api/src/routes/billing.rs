use axum::routing::get;
use axum::Router;

use crate::handlers::billing;
use crate::state::AppState;

/// Routes mounted at `/billing`.
///
/// ```text
/// GET    /plans    -> plans
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/plans", get(billing::plans))
}
