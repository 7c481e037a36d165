use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use launchpad_ai::{ChatClient, Generator, LiveGenerator, MockGenerator};
use launchpad_core::webhook_signature::DEFAULT_TOLERANCE_SECS;

use crate::auth::jwt::{JwtConfig, DEFAULT_ACCESS_EXPIRY_MINS};

/// Server configuration loaded from environment variables.
///
/// All fields except the secrets have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `60`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Mock or live artifact generation.
    pub generation: GenerationConfig,
    /// Payment webhook verification.
    pub billing: BillingConfig,
}

/// Which [`Generator`] backs the generation endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    Mock,
    Live,
}

impl FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(GenerationMode::Mock),
            "live" => Ok(GenerationMode::Live),
            other => Err(format!("expected 'mock' or 'live', got '{other}'")),
        }
    }
}

/// Chat-completion endpoint settings, used in live mode only.
#[derive(Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub mode: GenerationMode,
    /// Simulated processing time for mock responses.
    pub mock_delay: Duration,
    /// Present when `mode` is [`GenerationMode::Live`].
    pub openai: Option<OpenAiConfig>,
}

/// Upstream completion calls get nine tenths of the request budget, so a
/// stalled provider surfaces as a generation error before the HTTP layer
/// answers 408.
pub fn upstream_timeout(request_timeout: Duration) -> Duration {
    request_timeout * 9 / 10
}

impl GenerationConfig {
    /// Instantiate the configured generator.
    ///
    /// Fails only if the live HTTP client cannot be built.
    pub fn build_generator(
        &self,
        request_timeout: Duration,
    ) -> Result<Arc<dyn Generator>, reqwest::Error> {
        let mock = MockGenerator::new(self.mock_delay);
        match (&self.mode, &self.openai) {
            (GenerationMode::Live, Some(openai)) => {
                let http = reqwest::Client::builder()
                    .timeout(upstream_timeout(request_timeout))
                    .build()?;
                let client = ChatClient::with_client(
                    http,
                    openai.base_url.clone(),
                    openai.api_key.clone(),
                    openai.model.clone(),
                );
                Ok(Arc::new(LiveGenerator::new(client, mock)))
            }
            _ => Ok(Arc::new(mock)),
        }
    }
}

#[derive(Clone)]
pub struct BillingConfig {
    /// Shared secret for payment webhook signatures.
    pub webhook_secret: String,
    /// Maximum age of a signed webhook timestamp, in seconds.
    pub webhook_tolerance_secs: i64,
}

impl std::fmt::Debug for BillingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BillingConfig")
            .field("webhook_secret", &"<redacted>")
            .field("webhook_tolerance_secs", &self.webhook_tolerance_secs)
            .finish()
    }
}

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4";
const DEFAULT_MOCK_DELAY_MS: u64 = 2000;

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                         | Default                     |
    /// |---------------------------------|-----------------------------|
    /// | `HOST`                          | `0.0.0.0`                   |
    /// | `PORT`                          | `3000`                      |
    /// | `CORS_ORIGINS`                  | `http://localhost:3000`     |
    /// | `REQUEST_TIMEOUT_SECS`          | `60`                        |
    /// | `JWT_SECRET`                    | **required**                |
    /// | `JWT_ACCESS_EXPIRY_MINS`        | `60`                        |
    /// | `GENERATION_MODE`               | `mock`                      |
    /// | `MOCK_DELAY_MS`                 | `2000`                      |
    /// | `OPENAI_API_KEY`                | **required** in live mode   |
    /// | `OPENAI_BASE_URL`               | `https://api.openai.com/v1` |
    /// | `OPENAI_MODEL`                  | `gpt-4`                     |
    /// | `STRIPE_WEBHOOK_SECRET`         | **required**                |
    /// | `STRIPE_WEBHOOK_TOLERANCE_SECS` | `300`                       |
    ///
    /// # Panics
    ///
    /// Panics on a missing required variable or an unparseable value, so
    /// misconfiguration fails at startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let required = |key: &str| {
            let value = lookup(key).unwrap_or_else(|| panic!("{key} must be set in the environment"));
            assert!(!value.trim().is_empty(), "{key} must not be empty");
            value
        };

        let host = var("HOST", "0.0.0.0");

        let port: u16 = var("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS", "60")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig {
            secret: required("JWT_SECRET"),
            access_token_expiry_mins: var(
                "JWT_ACCESS_EXPIRY_MINS",
                &DEFAULT_ACCESS_EXPIRY_MINS.to_string(),
            )
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64"),
        };

        let mode: GenerationMode = var("GENERATION_MODE", "mock")
            .parse()
            .unwrap_or_else(|e| panic!("GENERATION_MODE is invalid: {e}"));

        let mock_delay_ms: u64 = var("MOCK_DELAY_MS", &DEFAULT_MOCK_DELAY_MS.to_string())
            .parse()
            .expect("MOCK_DELAY_MS must be a valid u64");

        let openai = (mode == GenerationMode::Live).then(|| OpenAiConfig {
            api_key: required("OPENAI_API_KEY"),
            base_url: var("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            model: var("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
        });

        let billing = BillingConfig {
            webhook_secret: required("STRIPE_WEBHOOK_SECRET"),
            webhook_tolerance_secs: var(
                "STRIPE_WEBHOOK_TOLERANCE_SECS",
                &DEFAULT_TOLERANCE_SECS.to_string(),
            )
            .parse()
            .expect("STRIPE_WEBHOOK_TOLERANCE_SECS must be a valid i64"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            generation: GenerationConfig {
                mode,
                mock_delay: Duration::from_millis(mock_delay_ms),
                openai,
            },
            billing,
        }
    }
}
