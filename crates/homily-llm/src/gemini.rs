//! Gemini Provider Implementation
//!
//! Provides integration with Google's Gemini `generateContent` API.
//!
//! # Features
//!
//! - Async HTTP communication with the Gemini API
//! - Configurable endpoint, model, temperature and output budget
//! - Retry logic with exponential backoff for transport and 5xx failures
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use homily_llm::{GeminiConfig, GeminiProvider};
//!
//! let provider = GeminiProvider::new("my-api-key", GeminiConfig::default());
//!
//! // Or read the key from GEMINI_API_KEY
//! let provider = GeminiProvider::from_env(GeminiConfig::default()).unwrap();
//! ```

use crate::LlmError;
use homily_domain::traits::LlmProvider as LlmProviderTrait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default Gemini API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default timeout for LLM requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Settings for the Gemini provider
///
/// Deserializable from the `[gemini]` table of the server and CLI config files.
/// The API key is deliberately not part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum output tokens per generation
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Per-request HTTP timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Attempts before giving up on transport or 5xx failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    4000
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

impl GeminiConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!("temperature {} out of range [0.0, 2.0]", self.temperature));
        }
        if self.max_output_tokens == 0 {
            return Err("max_output_tokens must be greater than 0".to_string());
        }
        if self.max_retries == 0 {
            return Err("max_retries must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Gemini API provider
pub struct GeminiProvider {
    api_key: String,
    config: GeminiConfig,
    client: reqwest::Client,
}

/// Request body for the generateContent API
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

/// Response from the generateContent API
///
/// Every level is optional so a truncated envelope surfaces as
/// `InvalidResponse` rather than a deserialization failure.
#[derive(Deserialize, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Error envelope returned on non-2xx responses
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate
    fn into_text(self) -> Result<String, LlmError> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| {
                LlmError::InvalidResponse(
                    "missing candidates[0].content.parts[0].text".to_string(),
                )
            })
    }
}

/// Pull the provider's `error.message` out of an error body, if present
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|e| e.error)
        .and_then(|e| e.message)
        .unwrap_or_else(|| body.trim().to_string())
}

/// HTTP client with the configured timeout.
///
/// Requests also carry the timeout individually, so the plain fallback client
/// still honors it.
fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            warn!("Failed to build HTTP client ({}), using defaults", e);
            reqwest::Client::new()
        })
}

impl GeminiProvider {
    /// Create a new Gemini provider
    ///
    /// # Parameters
    ///
    /// - `api_key`: Gemini API key, sent as `x-goog-api-key`
    /// - `config`: Endpoint, model and generation settings
    pub fn new(api_key: impl Into<String>, config: GeminiConfig) -> Self {
        let client = build_client(Duration::from_secs(config.timeout_secs));

        Self {
            api_key: api_key.into(),
            config,
            client,
        }
    }

    /// Create a provider whose API key comes from `GEMINI_API_KEY`
    ///
    /// # Errors
    ///
    /// Returns `LlmError::MissingApiKey` if the variable is unset or empty.
    pub fn from_env(config: GeminiConfig) -> Result<Self, LlmError> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key, config)),
            _ => Err(LlmError::MissingApiKey(API_KEY_ENV.to_string())),
        }
    }

    /// Timeout applied to each provider request
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_secs)
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.config.max_retries = max_retries;
        self
    }

    /// Provider configuration
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Generate text using the Gemini API
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The API key is empty
    /// - The model is not available (404)
    /// - The caller is rate limited (429)
    /// - Network communication fails after all retries
    /// - The response envelope lacks the generated text
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        if self.api_key.trim().is_empty() {
            return Err(LlmError::MissingApiKey(API_KEY_ENV.to_string()));
        }

        let url = self.url();
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_output_tokens,
            },
        };

        debug!("Calling Gemini model '{}' ({} prompt chars)", self.config.model, prompt.len());

        // Retry logic with exponential backoff
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.config.max_retries {
            match self
                .client
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .timeout(self.request_timeout())
                .json(&request_body)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body = response
                            .json::<GenerateContentResponse>()
                            .await
                            .map_err(|e| {
                                LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
                            })?;
                        return body.into_text();
                    }

                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());

                    if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.config.model.clone()));
                    }
                    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        return Err(LlmError::RateLimitExceeded);
                    }

                    let error = LlmError::Communication(format!(
                        "HTTP {}: {}",
                        status,
                        error_message(&error_text)
                    ));
                    if !status.is_server_error() {
                        return Err(error);
                    }
                    warn!("Gemini returned {}, attempt {}/{}", status, attempts + 1, self.config.max_retries);
                    last_error = Some(error);
                }
                Err(e) => {
                    warn!("Gemini request failed, attempt {}/{}: {}", attempts + 1, self.config.max_retries, e);
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.config.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            LlmError::Communication("Max retries exceeded".to_string())
        }))
    }
}

impl LlmProviderTrait for GeminiProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper; callers run this off the async executor
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?;
        runtime.block_on(async { self.generate(prompt).await })
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
