//! Project entity model and DTOs.

use launchpad_core::project::GeneratedArtifacts;
use launchpad_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
///
/// The generated artifacts are stored as opaque JSON and parsed on demand.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub description: String,
    pub target_market: String,
    pub main_features: Vec<String>,
    pub blueprint: Option<serde_json::Value>,
    pub wireframe_url: Option<String>,
    pub pitch_deck: Option<serde_json::Value>,
    pub checklist: Option<serde_json::Value>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// Which generated artifacts this row holds. JSON `null` counts as absent.
    pub fn artifacts(&self) -> GeneratedArtifacts {
        let present = |v: &Option<serde_json::Value>| v.as_ref().is_some_and(|v| !v.is_null());
        GeneratedArtifacts {
            blueprint: present(&self.blueprint),
            wireframe: self.wireframe_url.as_deref().is_some_and(|u| !u.is_empty()),
            pitch_deck: present(&self.pitch_deck),
            checklist: present(&self.checklist),
        }
    }
}

/// Project plus its derived completion percentage, for list and detail
/// responses.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithProgress {
    #[serde(flatten)]
    pub project: Project,
    pub progress: u8,
}

impl From<Project> for ProjectWithProgress {
    fn from(project: Project) -> Self {
        let progress = project.artifacts().progress_percent();
        Self { project, progress }
    }
}

/// DTO for creating a new project. The owner comes from the caller's token
/// and the status always starts as `draft`.
///
/// Missing text fields deserialize as empty so they fail validation with a
/// field list rather than a body-rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub target_market: String,
    #[serde(default)]
    pub main_features: Vec<String>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub target_market: Option<String>,
    pub main_features: Option<Vec<String>>,
    pub blueprint: Option<serde_json::Value>,
    pub wireframe_url: Option<String>,
    pub pitch_deck: Option<serde_json::Value>,
    pub checklist: Option<serde_json::Value>,
    pub status: Option<String>,
}
