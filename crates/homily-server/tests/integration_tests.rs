//! Integration tests for the HTTP service

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use homily_extractor::{GeneratorConfig, SermonDocument, SermonGenerator};
use homily_llm::MockProvider;
use homily_server::handlers::{create_router, AppState, ErrorResponse, HealthCheckResponse};
use tower::ServiceExt; // for oneshot

const GENERATED: &str = "\
# Título: Fé Inabalável
Introdução
Vivemos dias de incerteza.
1. A Natureza da Fé
A fé é a certeza das coisas que se esperam.
Referências: Hebreus 11:1-3, Romanos 10:17
Conclusão
Permaneça firme.
Perguntas
1. Onde sua fé tem sido provada?
";

/// Helper to create a router around a mock provider
fn create_test_app(provider: MockProvider) -> axum::Router {
    let generator = SermonGenerator::new(provider, GeneratorConfig::default()).unwrap();
    create_router(AppState::new(generator), 64 * 1024)
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = create_test_app(MockProvider::default());

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health: HealthCheckResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.model, "mock");
}

#[tokio::test]
async fn test_generate_sermon_returns_document() {
    let app = create_test_app(MockProvider::new(GENERATED));

    let request = Request::builder()
        .method("POST")
        .uri("/generate-sermon")
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"theme": "Fé", "biblePassage": "Hebreus 11:1-6", "sermonType": "expositivo", "duration": 30}"#,
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_bytes(response).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["title"], "Fé Inabalável");
    assert_eq!(json["bibleReference"], "Hebreus 11:1-6");
    assert_eq!(json["points"][0]["bibleReferences"][1], "Romanos 10:17");
    assert_eq!(json["applicationQuestions"][0], "Onde sua fé tem sido provada?");
}

#[tokio::test]
async fn test_generate_sermon_provider_failure() {
    let app = create_test_app(MockProvider::failing());

    let request = Request::builder()
        .method("POST")
        .uri("/generate-sermon")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"theme": "Fé", "biblePassage": "Hebreus 11"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let error: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(error.error.contains("LLM error"));
}

#[tokio::test]
async fn test_generate_sermon_invalid_request() {
    let provider = MockProvider::new(GENERATED);
    let app = create_test_app(provider.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/generate-sermon")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"theme": "  ", "biblePassage": "Hebreus 11"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_generate_sermon_missing_field() {
    let provider = MockProvider::new(GENERATED);
    let app = create_test_app(provider.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/generate-sermon")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"theme":"Fé"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(error.error.contains("biblePassage"));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_malformed_json_gets_error_envelope() {
    let app = create_test_app(MockProvider::default());

    let request = Request::builder()
        .method("POST")
        .uri("/extract")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"text": "#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(!error.error.is_empty());
}

#[tokio::test]
async fn test_extract_endpoint() {
    let app = create_test_app(MockProvider::default());

    let body = serde_json::json!({
        "text": "Introdução\nTexto A.\nTexto B.",
        "title": "Tema",
        "bibleReference": "Salmos 23"
    });

    let request = Request::builder()
        .method("POST")
        .uri("/extract")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let doc: SermonDocument = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(doc.title, "Tema");
    assert_eq!(doc.bible_reference, "Salmos 23");
    assert_eq!(doc.introduction, "Texto A. Texto B.");
    assert!(doc.points.is_empty());
}

#[tokio::test]
async fn test_extract_rejects_oversized_body() {
    let app = create_test_app(MockProvider::default());

    let body = serde_json::json!({ "text": "a".repeat(128 * 1024) }).to_string();
    let request = Request::builder()
        .method("POST")
        .uri("/extract")
        .header("content-type", "application/json")
        .header("content-length", body.len())
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = create_test_app(MockProvider::default());

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/generate-sermon")
        .header("origin", "https://example.com")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type,apikey")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
