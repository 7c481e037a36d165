//! Canned artifact generation with a simulated processing delay.

use std::time::Duration;

use async_trait::async_trait;
use launchpad_core::ai_tools::{run_tool, ToolReport};
use launchpad_core::blueprint::{mock_blueprint, Blueprint, IdeaBrief};
use launchpad_core::pitch_deck::{mock_pitch_deck, PitchDeckSlide};
use launchpad_core::scaffold::{self, GeneratedCode, MvpConfig};
use launchpad_core::wireframe::{mock_wireframe, Wireframe};

use crate::error::GenerationError;
use crate::generator::Generator;

/// Default simulated processing time.
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(2000);

/// Generator that never leaves the process.
///
/// Every call sleeps for `delay` first so clients see realistic latency.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    delay: Duration,
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_MOCK_DELAY)
    }
}

impl MockGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    async fn simulate_work(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl Generator for MockGenerator {
    async fn blueprint(&self, idea: &IdeaBrief) -> Result<Blueprint, GenerationError> {
        self.simulate_work().await;
        Ok(mock_blueprint(idea, &mut rand::rng()))
    }

    async fn pitch_deck(
        &self,
        blueprint: &Blueprint,
        project_name: &str,
    ) -> Result<Vec<PitchDeckSlide>, GenerationError> {
        self.simulate_work().await;
        Ok(mock_pitch_deck(blueprint, project_name))
    }

    async fn wireframe(&self, project_name: &str) -> Result<Wireframe, GenerationError> {
        self.simulate_work().await;
        Ok(mock_wireframe(project_name))
    }

    async fn ai_tool(
        &self,
        tool_id: &str,
        _data: Option<&serde_json::Value>,
    ) -> Result<ToolReport, GenerationError> {
        self.simulate_work().await;
        Ok(run_tool(tool_id, &mut rand::rng()))
    }

    async fn mvp_code(&self, config: &MvpConfig) -> Result<GeneratedCode, GenerationError> {
        self.simulate_work().await;
        Ok(scaffold::generate(config))
    }

    fn mode(&self) -> &'static str {
        "mock"
    }
}
