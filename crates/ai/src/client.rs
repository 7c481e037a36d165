//! Minimal client for an OpenAI-compatible `/chat/completions` endpoint.
//!
//! One request per call: a single user message, no streaming, no retries.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Sampling temperature for every completion.
pub const TEMPERATURE: f32 = 0.7;

/// Matches a reply wrapped in a Markdown code fence, with or without a
/// language tag.
static CODE_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*```[A-Za-z0-9_-]*\s*\n(.*?)\n?\s*```\s*$").expect("valid regex")
});

/// HTTP client for one chat-completion deployment.
pub struct ChatClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ReplyMessage>,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

impl ChatClient {
    /// * `base_url` - API root without trailing slash, e.g.
    ///   `https://api.openai.com/v1`.
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key, model)
    }

    /// Reuse an existing [`reqwest::Client`] (connection pool, timeouts).
    pub fn with_client(
        client: reqwest::Client,
        base_url: String,
        api_key: String,
        model: String,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `prompt` as the only user message and return the first choice's
    /// content.
    pub async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let parsed: ChatResponse = Self::ensure_success(response).await?.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)
    }

    /// Complete `prompt` and parse the reply as JSON of type `T`.
    pub async fn complete_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
    ) -> Result<T, GenerationError> {
        let content = self.complete(prompt).await?;
        parse_json_reply(&content)
    }

    /// Returns the response unchanged on success, or
    /// [`GenerationError::Api`] carrying the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GenerationError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

/// Remove a surrounding Markdown code fence, if any.
pub fn strip_code_fence(content: &str) -> &str {
    match CODE_FENCE_RE.captures(content).and_then(|c| c.get(1)) {
        Some(inner) => inner.as_str(),
        None => content.trim(),
    }
}

/// Parse model output as JSON, tolerating a surrounding code fence.
pub fn parse_json_reply<T: DeserializeOwned>(content: &str) -> Result<T, GenerationError> {
    serde_json::from_str(strip_code_fence(content))
        .map_err(|e| GenerationError::InvalidResponse(e.to_string()))
}
