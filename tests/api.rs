use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::{Json, Router, http::StatusCode, routing::{get, post}};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use text_summarizer::api::models::SummaryRequest;
use text_summarizer::api::routes::{create_router, with_middleware};
use text_summarizer::config::ClientConfig;
use text_summarizer::error::ErrorBody;
use text_summarizer::summarizer::MAX_TEXT_CHARS;
use text_summarizer::{AppError, LengthTier, SummaryClient};

async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> SummaryClient {
    SummaryClient::new(ClientConfig {
        retry_base_delay: Duration::from_millis(5),
        ..ClientConfig::with_base_url(format!("http://{}", addr))
    })
}

async fn post_raw(addr: SocketAddr, body: &str) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("http://{}/api/summarize", addr))
        .header("content-type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn summarizes_over_http() {
    let addr = serve(create_router()).await;

    let (status, body) = post_raw(
        addr,
        r#"{"text": "A. B. C. D. E.", "options": {"length": "medium"}}"#,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["summary"], "A. E.");
    assert_eq!(body["wordCount"], 2);
    assert!(body["processingTime"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn typed_client_round_trip() {
    let addr = serve(create_router()).await;
    let client = client_for(addr);
    assert!(!client.is_mock());

    let result = client
        .generate_summary(&SummaryRequest::new("One. Two. Three. Four. Five", LengthTier::Medium))
        .await
        .unwrap();
    assert_eq!(result.summary, "One. Five.");

    let health = client.check_health().await.unwrap();
    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn maps_errors_to_status_codes() {
    let addr = serve(create_router()).await;

    let cases = [
        (r#"{"text": ""}"#, 400),
        (r#"{}"#, 400),
        (r#"{"text": 12}"#, 400),
        (r#"{"text": "  ...  "}"#, 400),
        ("not json", 400),
        (r#"{"text": "Hi.", "options": {"length": "extreme"}}"#, 422),
        (r#"{"text": "Hi.", "options": {"length": 1}}"#, 422),
    ];

    for (body, expected) in cases {
        let (status, json) = post_raw(addr, body).await;
        assert_eq!(status, expected, "{}", body);
        assert_eq!(json["code"], expected, "{}", body);
        assert!(json["message"].is_string());
    }
}

#[tokio::test]
async fn enforces_length_cap_in_characters() {
    let addr = serve(create_router()).await;

    let exact = json!({ "text": "a".repeat(MAX_TEXT_CHARS) }).to_string();
    assert_eq!(post_raw(addr, &exact).await.0, 200);

    let over = json!({ "text": "a".repeat(MAX_TEXT_CHARS + 1) }).to_string();
    let (status, body) = post_raw(addr, &over).await;
    assert_eq!(status, 422);
    assert_eq!(body["message"], "Text too long - maximum 10,000 characters");
}

#[tokio::test]
async fn oversized_body_is_too_long_not_missing() {
    let addr = serve(create_router()).await;

    let huge = json!({ "text": "a".repeat(3_000_000) }).to_string();
    let (status, body) = post_raw(addr, &huge).await;
    assert_eq!(status, 422);
    assert_eq!(body["code"], 422);
    assert_eq!(body["message"], "Text too long - maximum 10,000 characters");
}

#[tokio::test]
async fn malformed_options_are_not_reported_as_missing_text() {
    let addr = serve(create_router()).await;

    let (status, body) = post_raw(addr, r#"{"text": "Hi.", "options": "long"}"#).await;
    assert_eq!(status, 400);
    assert_ne!(body["message"], "Invalid input - text is required");
}

#[tokio::test]
async fn handler_panic_becomes_json_500() {
    async fn explode() -> &'static str {
        panic!("boom")
    }
    let addr = serve(with_middleware(Router::new().route("/explode", get(explode)))).await;

    let response = reqwest::get(format!("http://{}/explode", addr)).await.unwrap();
    assert_eq!(response.status().as_u16(), 500);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(
        body,
        ErrorBody {
            code: 500,
            message: "Internal server error".to_string(),
        }
    );
}

#[tokio::test]
async fn client_surfaces_server_rejections() {
    let addr = serve(create_router()).await;
    let client = client_for(addr);

    let err = client
        .generate_summary(&SummaryRequest::new("a".repeat(MAX_TEXT_CHARS + 1), LengthTier::Short))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::UnprocessableInput(_)));

    let err = client
        .generate_summary(&SummaryRequest::new("?!", LengthTier::Short))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(ref m) if m.contains("no meaningful content")));
}

fn failing_router(status: StatusCode, hits: Arc<AtomicUsize>) -> Router {
    Router::new().route(
        "/api/summarize",
        post(move || {
            let hits = hits.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                (
                    status,
                    Json(ErrorBody {
                        code: status.as_u16(),
                        message: "nope".to_string(),
                    }),
                )
            }
        }),
    )
}

#[tokio::test]
async fn retries_server_errors_until_exhausted() {
    let hits = Arc::new(AtomicUsize::new(0));
    let addr = serve(failing_router(StatusCode::SERVICE_UNAVAILABLE, hits.clone())).await;
    let client = client_for(addr);

    let err = client
        .generate_summary_with_retry(&SummaryRequest::new("Hi.", LengthTier::Medium))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Upstream(_)));
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn many_retries_do_not_overflow_backoff() {
    let hits = Arc::new(AtomicUsize::new(0));
    let addr = serve(failing_router(StatusCode::SERVICE_UNAVAILABLE, hits.clone())).await;
    let client = SummaryClient::new(ClientConfig {
        max_retries: 40,
        retry_base_delay: Duration::ZERO,
        ..ClientConfig::with_base_url(format!("http://{}", addr))
    });

    let err = client
        .generate_summary_with_retry(&SummaryRequest::new("Hi.", LengthTier::Medium))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Upstream(_)));
    assert_eq!(hits.load(Ordering::SeqCst), 40);
}

#[tokio::test]
async fn does_not_retry_rejected_input() {
    let hits = Arc::new(AtomicUsize::new(0));
    let addr = serve(failing_router(StatusCode::UNPROCESSABLE_ENTITY, hits.clone())).await;
    let client = client_for(addr);

    let err = client
        .generate_summary_with_retry(&SummaryRequest::new("Hi.", LengthTier::Medium))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::UnprocessableInput(ref m) if m == "nope"));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn retry_recovers_once_backend_answers() {
    let addr = serve(create_router()).await;
    let client = client_for(addr);

    let result = client
        .generate_summary_with_retry(&SummaryRequest::new("Only one sentence", LengthTier::Long))
        .await
        .unwrap();
    assert_eq!(result.summary, "Only one sentence.");
    assert_eq!(result.word_count, 3);
}

#[tokio::test]
async fn mock_client_needs_no_backend() {
    let client = SummaryClient::new(ClientConfig::default());
    let result = client
        .generate_summary_with_retry(&SummaryRequest::new("ignored", LengthTier::Short))
        .await
        .unwrap();
    assert_eq!(result.word_count, 28);
    assert_eq!(result.processing_time, 1.2);
}
