//! Error types for sermon generation
//!
//! Extraction itself never fails; these cover the steps around it.

use homily_domain::RequestError;
use thiserror::Error;

/// Errors that can occur while generating a sermon
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Request rejected before calling the provider
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] RequestError),

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Generation timeout
    #[error("Generation timed out after {0} seconds")]
    Timeout(u64),

    /// Provider returned no text
    #[error("LLM returned an empty response")]
    EmptyResponse,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
