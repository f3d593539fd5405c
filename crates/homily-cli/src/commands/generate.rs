//! Generate command implementation.

use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use homily_domain::{SermonRequest, SermonStyle};
use homily_extractor::SermonGenerator;
use homily_llm::GeminiProvider;
use tracing::info;

/// Execute the generate command.
pub async fn execute_generate(
    args: GenerateArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let api_key = args
        .api_key
        .clone()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| CliError::Config("GEMINI_API_KEY is not set (or pass --api-key)".into()))?;

    let request = build_request(args);
    request
        .validate()
        .map_err(|e| CliError::InvalidInput(e.to_string()))?;

    let provider = GeminiProvider::new(api_key, config.gemini.clone());
    let generator = SermonGenerator::new(provider, config.generator.clone())?;

    info!("Generating sermon on '{}' with {}", request.theme, generator.model_name());
    let document = generator.generate(&request).await?;

    println!("{}", formatter.format_document(&document)?);

    Ok(())
}

/// Turn command-line arguments into a domain request.
fn build_request(args: GenerateArgs) -> SermonRequest {
    let mut request = SermonRequest::new(args.theme, args.passage);

    if let Some(style) = args.style {
        request = request.with_style(SermonStyle::parse(&style));
    }
    if let Some(minutes) = args.duration {
        request = request.with_duration(minutes);
    }
    if let Some(notes) = args.notes {
        request = request.with_notes(notes);
    }

    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use homily_domain::request::DEFAULT_DURATION_MINUTES;

    fn args() -> GenerateArgs {
        GenerateArgs {
            theme: "Esperança".to_string(),
            passage: "Romanos 5:1-5".to_string(),
            style: None,
            duration: None,
            notes: None,
            api_key: None,
        }
    }

    #[test]
    fn test_build_request_defaults() {
        let request = build_request(args());
        assert_eq!(request.theme, "Esperança");
        assert_eq!(request.style, SermonStyle::Expository);
        assert_eq!(request.duration_minutes, DEFAULT_DURATION_MINUTES);
        assert!(request.notes.is_none());
    }

    #[test]
    fn test_build_request_overrides() {
        let mut a = args();
        a.style = Some("Narrativo".to_string());
        a.duration = Some(15);
        a.notes = Some("Culto de jovens".to_string());

        let request = build_request(a);
        assert_eq!(request.style, SermonStyle::Narrative);
        assert_eq!(request.duration_minutes, 15);
        assert_eq!(request.notes.as_deref(), Some("Culto de jovens"));
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        let formatter = Formatter::new(crate::config::OutputFormat::Text, false);
        let result = execute_generate(args(), &Config::default(), &formatter).await;
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[tokio::test]
    async fn test_invalid_request_rejected_before_provider() {
        let mut a = args();
        a.theme = "   ".to_string();
        a.api_key = Some("test-key".to_string());

        let formatter = Formatter::new(crate::config::OutputFormat::Text, false);
        let result = execute_generate(a, &Config::default(), &formatter).await;
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
