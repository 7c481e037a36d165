//! Repository for the `projects` table.
//!
//! Every lookup is scoped to the owning user: a row that exists but belongs
//! to someone else is indistinguishable from a missing one.

use launchpad_core::project::ProjectStatus;
use launchpad_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, description, target_market, main_features, \
    blueprint, wireframe_url, pitch_deck, checklist, status, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project for `user_id` with status `draft`, returning the
    /// created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (user_id, name, description, target_market, main_features, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.target_market)
            .bind(&input.main_features)
            .bind(ProjectStatus::Draft.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find one of `user_id`'s projects by ID.
    pub async fn find_by_id_for_owner(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List `user_id`'s projects, most recently created first.
    pub async fn list_by_owner(pool: &PgPool, user_id: DbId) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied and
    /// `updated_at` is always bumped.
    ///
    /// Returns `None` if the row does not exist or belongs to another user.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                target_market = COALESCE($5, target_market),
                main_features = COALESCE($6, main_features),
                blueprint = COALESCE($7, blueprint),
                wireframe_url = COALESCE($8, wireframe_url),
                pitch_deck = COALESCE($9, pitch_deck),
                checklist = COALESCE($10, checklist),
                status = COALESCE($11, status),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.target_market)
            .bind(&input.main_features)
            .bind(&input.blueprint)
            .bind(&input.wireframe_url)
            .bind(&input.pitch_deck)
            .bind(&input.checklist)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the stored checklist.
    pub async fn set_checklist(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        checklist: &serde_json::Value,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET checklist = $3, updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(user_id)
            .bind(checklist)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
