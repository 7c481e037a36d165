pub mod billing;
pub mod generation;
pub mod health;
pub mod profile;
pub mod project;
pub mod webhook;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /generate-blueprint                        blueprint (POST, public)
/// /generate-pitch-deck                       pitch deck (POST, public)
/// /generate-wireframe                        wireframe (POST, public)
/// /ai-tools                                  run analysis tool (POST, public)
/// /mvp-generator                             scaffold as JSON (POST, public)
/// /mvp-generator/archive                     scaffold as ZIP (POST, public)
///
/// /projects                                  list, create (auth required)
/// /projects/{id}                             get, update, delete
/// /projects/{id}/checklist                   generate (POST)
/// /projects/{id}/checklist/{item_id}         toggle item (PUT)
/// /projects/{id}/pitch-deck/export           plain-text download (GET)
///
/// /profile                                   get, create, update (auth required)
///
/// /billing/plans                             list plans (GET, public)
///
/// /stripe/webhook                            payment events (POST, signed)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(generation::router())
        .nest("/projects", project::router())
        .nest("/profile", profile::router())
        .nest("/billing", billing::router())
        .nest("/stripe", webhook::router())
}
