use async_trait::async_trait;
use launchpad_core::ai_tools::ToolReport;
use launchpad_core::blueprint::{Blueprint, IdeaBrief};
use launchpad_core::pitch_deck::PitchDeckSlide;
use launchpad_core::scaffold::{GeneratedCode, MvpConfig};
use launchpad_core::wireframe::Wireframe;

use crate::error::GenerationError;

/// Produces the generated artifacts behind the `/generate-*`, `/ai-tools`
/// and `/mvp-generator` endpoints.
///
/// Inputs are already presence-validated by the caller.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn blueprint(&self, idea: &IdeaBrief) -> Result<Blueprint, GenerationError>;

    async fn pitch_deck(
        &self,
        blueprint: &Blueprint,
        project_name: &str,
    ) -> Result<Vec<PitchDeckSlide>, GenerationError>;

    async fn wireframe(&self, project_name: &str) -> Result<Wireframe, GenerationError>;

    /// `data` is the tool's free-form input; no tool reads it yet.
    async fn ai_tool(
        &self,
        tool_id: &str,
        data: Option<&serde_json::Value>,
    ) -> Result<ToolReport, GenerationError>;

    async fn mvp_code(&self, config: &MvpConfig) -> Result<GeneratedCode, GenerationError>;

    /// Short label for logs and the health endpoint.
    fn mode(&self) -> &'static str;
}
