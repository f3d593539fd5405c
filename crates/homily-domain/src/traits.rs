//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (homily-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate text completion
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Name of the model behind this provider, for logs and metadata
    fn model_name(&self) -> &str {
        "llm"
    }
}
