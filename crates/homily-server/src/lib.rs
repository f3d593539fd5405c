//! Homily Server
//!
//! HTTP edge service for sermon generation. Accepts a sermon request as
//! JSON, asks the configured LLM for the text, and answers with the
//! structured document produced by the extractor.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ServerConfig;
use handlers::{create_router, AppState};
use homily_extractor::{GeneratorError, SermonGenerator};
use homily_llm::{GeminiProvider, LlmError};
use tokio::net::TcpListener;
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// LLM provider could not be set up
    #[error("Provider error: {0}")]
    Provider(#[from] LlmError),

    /// Generator could not be set up
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the HTTP server
///
/// Builds the Gemini provider (API key from `GEMINI_API_KEY`), wraps it in a
/// generator, and serves until the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    config.validate()?;

    info!("Starting Homily server");
    info!("Bind address: {}", config.bind_addr());
    info!("Model: {}", config.gemini.model);
    info!("Generation timeout: {} seconds", config.generator.generation_timeout_secs);

    let provider = GeminiProvider::from_env(config.gemini.clone())?;
    let generator = SermonGenerator::new(provider, config.generator.clone())?;

    let app = create_router(AppState::new(generator), config.max_body_bytes);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
