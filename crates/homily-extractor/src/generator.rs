//! Sermon generation: prompt, provider call, extraction

use crate::assembler::SermonParser;
use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::prompt::PromptBuilder;
use crate::types::SermonDocument;
use homily_domain::traits::LlmProvider;
use homily_domain::SermonRequest;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Couples an LLM provider with the extraction core
pub struct SermonGenerator<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    parser: SermonParser,
    config: GeneratorConfig,
}

impl<L> SermonGenerator<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new generator
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Config` if the configuration is invalid.
    pub fn new(llm_provider: L, config: GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate().map_err(GeneratorError::Config)?;

        Ok(Self {
            llm_provider: Arc::new(llm_provider),
            parser: SermonParser::new().with_citation_policy(config.citation_policy),
            config,
        })
    }

    /// Generator configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Name of the model behind the provider
    pub fn model_name(&self) -> &str {
        self.llm_provider.model_name()
    }

    /// Generate a sermon for `request`.
    ///
    /// The request theme is the fallback title and the passage becomes the
    /// document's bible reference.
    pub async fn generate(&self, request: &SermonRequest) -> Result<SermonDocument, GeneratorError> {
        request.validate()?;

        info!(
            "Generating sermon: theme '{}', passage '{}', style '{}', {} minutes",
            request.theme, request.passage, request.style, request.duration_minutes
        );

        let prompt = PromptBuilder::new(request).build();
        debug!("Prompt length: {} chars", prompt.len());

        let text = timeout(self.config.generation_timeout(), self.call_llm(prompt))
            .await
            .map_err(|_| GeneratorError::Timeout(self.config.generation_timeout_secs))??;

        debug!("LLM response length: {} chars", text.len());

        if text.trim().is_empty() {
            return Err(GeneratorError::EmptyResponse);
        }

        Ok(self.extract(&text, request))
    }

    /// Run the extraction core over already generated text
    pub fn extract(&self, text: &str, request: &SermonRequest) -> SermonDocument {
        let document = self.parser.parse(text, &request.theme, &request.passage);

        if document.is_empty() {
            warn!("No sermon sections recognized in {} chars of generated text", text.len());
        }

        info!(
            "Extraction complete: {} points, {} questions",
            document.points.len(),
            document.application_questions.len()
        );

        document
    }

    /// Call the LLM provider
    async fn call_llm(&self, prompt: String) -> Result<String, GeneratorError> {
        let llm = Arc::clone(&self.llm_provider);

        // LlmProvider is synchronous; keep it off the async executor
        tokio::task::spawn_blocking(move || {
            llm.generate(&prompt)
                .map_err(|e| GeneratorError::Llm(e.to_string()))
        })
        .await
        .map_err(|e| GeneratorError::Llm(format!("Task join error: {}", e)))?
    }
}
