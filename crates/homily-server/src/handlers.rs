//! HTTP request handlers for the sermon service.
//!
//! Implements sermon generation, raw-text extraction and health check
//! endpoints using axum.

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use homily_domain::traits::LlmProvider;
use homily_domain::{SermonRequest, SermonStyle};
use homily_extractor::{GeneratorError, SermonDocument, SermonGenerator, SermonParser};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{error, info};

/// Shared application state
pub struct AppState<L: LlmProvider> {
    /// Generator wrapping the LLM provider
    pub generator: Arc<SermonGenerator<L>>,
    /// Parser used by the extraction endpoint
    pub parser: SermonParser,
}

impl<L: LlmProvider> Clone for AppState<L> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
            parser: self.parser,
        }
    }
}

impl<L> AppState<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Build state around a generator; extraction shares its citation policy
    pub fn new(generator: SermonGenerator<L>) -> Self {
        let parser = SermonParser::new().with_citation_policy(generator.config().citation_policy);
        Self {
            generator: Arc::new(generator),
            parser,
        }
    }
}

/// Duration as sent by the form: a number or a numeric string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationField {
    /// `"duration": 30`
    Minutes(u32),
    /// `"duration": "30"`
    Text(String),
}

/// Sermon generation request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSermonBody {
    /// Sermon theme
    pub theme: String,
    /// Main bible passage
    pub bible_passage: String,
    /// Homiletic style
    #[serde(default)]
    pub sermon_type: Option<String>,
    /// Approximate duration in minutes
    #[serde(default)]
    pub duration: Option<DurationField>,
    /// Free-form notes
    #[serde(default)]
    pub additional_notes: Option<String>,
}

impl GenerateSermonBody {
    /// Convert the wire body into a domain request
    pub fn into_request(self) -> Result<SermonRequest, AppError> {
        let mut request = SermonRequest::new(self.theme, self.bible_passage);

        if let Some(style) = self.sermon_type.filter(|s| !s.trim().is_empty()) {
            request = request.with_style(SermonStyle::parse(&style));
        }

        match self.duration {
            Some(DurationField::Minutes(minutes)) => request = request.with_duration(minutes),
            Some(DurationField::Text(text)) if !text.trim().is_empty() => {
                let minutes = text.trim().parse::<u32>().map_err(|_| {
                    AppError::BadRequest(format!("duration must be a number of minutes, got '{}'", text))
                })?;
                request = request.with_duration(minutes);
            }
            _ => {}
        }

        if let Some(notes) = self.additional_notes {
            request = request.with_notes(notes);
        }

        Ok(request)
    }
}

/// Raw-text extraction request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractBody {
    /// Generated text to parse
    pub text: String,
    /// Fallback title
    #[serde(default)]
    pub title: String,
    /// Reference copied into the document
    #[serde(default)]
    pub bible_reference: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Model behind the generator
    pub model: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Request could not be turned into a valid sermon request
    BadRequest(String),
    /// Generation failed
    Generation(GeneratorError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Generation(GeneratorError::InvalidRequest(e)) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::Generation(e) => {
                error!("Sermon generation failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<GeneratorError> for AppError {
    fn from(e: GeneratorError) -> Self {
        AppError::Generation(e)
    }
}

/// POST /generate-sermon - Generate and structure a sermon
async fn generate_sermon<L>(
    State(state): State<AppState<L>>,
    body: Result<Json<GenerateSermonBody>, JsonRejection>,
) -> Result<Json<SermonDocument>, AppError>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    let Json(body) = body?;
    let request = body.into_request()?;
    let document = state.generator.generate(&request).await?;
    Ok(Json(document))
}

/// POST /extract - Structure already generated text
async fn extract<L>(
    State(state): State<AppState<L>>,
    body: Result<Json<ExtractBody>, JsonRejection>,
) -> Result<Json<SermonDocument>, AppError>
where
    L: LlmProvider + Send + Sync + 'static,
{
    let Json(body) = body?;
    let document = state.parser.parse(&body.text, &body.title, &body.bible_reference);
    info!("Extracted '{}' with {} points", document.title, document.points.len());
    Ok(Json(document))
}

/// GET /health - Liveness check
async fn health_check<L>(State(state): State<AppState<L>>) -> Json<HealthCheckResponse>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    Json(HealthCheckResponse {
        status: "ok".to_string(),
        model: state.generator.model_name().to_string(),
    })
}

/// Permissive CORS so browser clients on any origin can call the API
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ])
}

/// Create the axum router with all routes
pub fn create_router<L>(state: AppState<L>, max_body_bytes: usize) -> AxumRouter
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    AxumRouter::new()
        .route("/generate-sermon", post(generate_sermon::<L>))
        .route("/extract", post(extract::<L>))
        .route("/health", get(health_check::<L>))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(cors_layer())
        .with_state(state)
}
