//! Generator backed by a chat-completion API.

use async_trait::async_trait;
use launchpad_core::ai_tools::ToolReport;
use launchpad_core::blueprint::{Blueprint, IdeaBrief};
use launchpad_core::pitch_deck::PitchDeckSlide;
use launchpad_core::scaffold::{GeneratedCode, MvpConfig};
use launchpad_core::wireframe::Wireframe;

use crate::client::ChatClient;
use crate::error::GenerationError;
use crate::generator::Generator;
use crate::mock::MockGenerator;
use crate::prompts;

/// Blueprints and pitch decks come from the model. Wireframes, AI tool
/// reports and code scaffolds have no live backend and are served by the
/// wrapped [`MockGenerator`].
pub struct LiveGenerator {
    client: ChatClient,
    fallback: MockGenerator,
}

impl LiveGenerator {
    pub fn new(client: ChatClient, fallback: MockGenerator) -> Self {
        Self { client, fallback }
    }
}

#[async_trait]
impl Generator for LiveGenerator {
    async fn blueprint(&self, idea: &IdeaBrief) -> Result<Blueprint, GenerationError> {
        tracing::debug!(
            model = self.client.model(),
            project = %idea.project_name,
            "Requesting blueprint completion",
        );
        let reply: serde_json::Value = self
            .client
            .complete_json(&prompts::blueprint_prompt(idea))
            .await?;
        if !reply.is_object() {
            return Err(GenerationError::InvalidResponse(
                "expected a JSON object for the blueprint".to_string(),
            ));
        }
        Ok(Blueprint::from_value_lenient(&reply))
    }

    async fn pitch_deck(
        &self,
        blueprint: &Blueprint,
        project_name: &str,
    ) -> Result<Vec<PitchDeckSlide>, GenerationError> {
        tracing::debug!(
            model = self.client.model(),
            project = %project_name,
            "Requesting pitch deck completion",
        );
        self.client
            .complete_json(&prompts::pitch_deck_prompt(blueprint, project_name))
            .await
    }

    async fn wireframe(&self, project_name: &str) -> Result<Wireframe, GenerationError> {
        self.fallback.wireframe(project_name).await
    }

    async fn ai_tool(
        &self,
        tool_id: &str,
        data: Option<&serde_json::Value>,
    ) -> Result<ToolReport, GenerationError> {
        self.fallback.ai_tool(tool_id, data).await
    }

    async fn mvp_code(&self, config: &MvpConfig) -> Result<GeneratedCode, GenerationError> {
        self.fallback.mvp_code(config).await
    }

    fn mode(&self) -> &'static str {
        "live"
    }
}
