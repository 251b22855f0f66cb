// Integration tests for LeadScout Core

use actix_web::{test, web, App};
use leadscout_core::core::{FixedJitter, Scorer};
use leadscout_core::models::{ProfileRecord, RelayRequest, ScoringWeights};
use leadscout_core::routes::{configure_routes, leads::AppState};
use leadscout_core::services::{RelayClient, RelayError};
use std::collections::HashMap;
use std::sync::Arc;

fn create_test_profile(name: &str, title: &str, skills: &[&str], confidence: f64) -> ProfileRecord {
    ProfileRecord {
        name: Some(name.to_string()),
        title: Some(title.to_string()),
        company: None,
        url: None,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        confidence: Some(confidence),
    }
}

fn create_test_state() -> AppState {
    AppState {
        scorer: Scorer::new(ScoringWeights::default(), Arc::new(FixedJitter(0.0))),
        relay: Arc::new(RelayClient::new(5)),
    }
}

fn relay_request(url: &str) -> RelayRequest {
    RelayRequest {
        url: url.to_string(),
        method: "GET".to_string(),
        headers: HashMap::new(),
        body: None,
    }
}

// --- Scorer pipeline ---

#[::core::prelude::v1::test]
fn test_end_to_end_scoring_pipeline() {
    let scorer = Scorer::new(ScoringWeights::default(), Arc::new(FixedJitter(0.0)));

    let candidates = vec![
        create_test_profile("Grace", "Compiler Engineer", &["COBOL"], 0.9),
        create_test_profile("Ada", "Rust Engineer", &["Rust", "Python"], 0.7),
        create_test_profile("Bob", "Accountant", &[], 0.2),
        create_test_profile("Eve", "Security Analyst", &["Rust"], 0.4),
    ];

    let result = scorer.score_and_rank("Rust, Python", candidates, 10);

    assert_eq!(result.total_candidates, 4);
    assert_eq!(result.results.len(), 4);

    // Ada hits title + two skills; Eve hits one skill; Bob hits nothing
    assert_eq!(result.results[0].name.as_deref(), Some("Ada"));
    assert!(result.results.iter().all(|p| (0.0..=1.0).contains(&p.score)));

    // Results sorted by score descending
    for pair in result.results.windows(2) {
        assert!(pair[0].score >= pair[1].score, "Results not sorted by score");
    }
}

#[::core::prelude::v1::test]
fn test_scoring_pipeline_respects_limit() {
    let scorer = Scorer::new(ScoringWeights::default(), Arc::new(FixedJitter(0.0)));

    let candidates: Vec<ProfileRecord> = (0..50)
        .map(|i| create_test_profile(&format!("User {}", i), "Rust Engineer", &[], 0.5))
        .collect();

    let result = scorer.score_and_rank("rust", candidates, 10);

    assert_eq!(result.results.len(), 10);
    assert_eq!(result.total_candidates, 50);
}

// --- Relay client against a stub upstream ---

#[tokio::test]
async fn test_relay_decodes_json_regardless_of_content_type() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/data")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(r#"{"a":1}"#)
        .create_async()
        .await;

    let client = RelayClient::new(5);
    let response = client
        .forward(&relay_request(&format!("{}/data", server.url())))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body, serde_json::json!({ "a": 1 }));
}

#[tokio::test]
async fn test_relay_wraps_plain_text_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/text")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("not json")
        .create_async()
        .await;

    let client = RelayClient::new(5);
    let response = client
        .forward(&relay_request(&format!("{}/text", server.url())))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.body, serde_json::json!({ "text": "not json" }));
}

#[tokio::test]
async fn test_relay_preserves_upstream_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/missing")
        .with_status(404)
        .with_body(r#"{"detail":"gone"}"#)
        .create_async()
        .await;

    let client = RelayClient::new(5);
    let response = client
        .forward(&relay_request(&format!("{}/missing", server.url())))
        .await
        .unwrap();

    assert_eq!(response.status, 404);
    assert_eq!(response.body, serde_json::json!({ "detail": "gone" }));
}

#[tokio::test]
async fn test_relay_strips_cors_headers_and_forwards_the_rest() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/auth")
        .match_header("authorization", "Bearer token")
        .match_header("Access-Control-Allow-Origin", mockito::Matcher::Missing)
        .match_header("Access-Control-Max-Age", mockito::Matcher::Missing)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let mut spec = relay_request(&format!("{}/auth", server.url()));
    spec.headers.insert("Authorization".to_string(), "Bearer token".to_string());
    spec.headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());
    spec.headers.insert("Access-Control-Max-Age".to_string(), "86400".to_string());

    let client = RelayClient::new(5);
    let response = client.forward(&spec).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_relay_forwards_json_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/submit")
        .match_body(mockito::Matcher::Json(serde_json::json!({ "q": "rust" })))
        .with_status(201)
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;

    let spec = RelayRequest {
        url: format!("{}/submit", server.url()),
        method: "POST".to_string(),
        headers: HashMap::new(),
        body: Some(serde_json::json!({ "q": "rust" })),
    };

    let client = RelayClient::new(5);
    let response = client.forward(&spec).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, 201);
}

#[tokio::test]
async fn test_relay_unreachable_upstream() {
    // Nothing listens on the discard port
    let client = RelayClient::new(2);
    let err = client
        .forward(&relay_request("http://127.0.0.1:9/unreachable"))
        .await
        .unwrap_err();

    assert!(matches!(err, RelayError::Unreachable(_) | RelayError::Timeout(_)));
}

#[tokio::test]
async fn test_relay_rejects_invalid_method() {
    let client = RelayClient::new(2);
    let mut spec = relay_request("http://127.0.0.1:9/");
    spec.method = "NOT A METHOD".to_string();

    let err = client.forward(&spec).await.unwrap_err();
    assert!(matches!(err, RelayError::InvalidRequest(_)));
}

// --- HTTP surface ---

#[actix_web::test]
async fn test_options_preflight_short_circuits() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_test_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::with_uri("/relay")
        .method(actix_web::http::Method::OPTIONS)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);

    let headers = resp.headers();
    assert_eq!(headers.get("Access-Control-Allow-Origin").unwrap(), "*");
    assert_eq!(headers.get("Access-Control-Max-Age").unwrap(), "86400");
    assert_eq!(
        headers.get("Access-Control-Allow-Methods").unwrap(),
        "GET, POST, PUT, DELETE, OPTIONS"
    );
}

#[actix_web::test]
async fn test_options_preflight_succeeds_on_any_path() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_test_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::with_uri("/some/unregistered/path")
        .method(actix_web::http::Method::OPTIONS)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("Access-Control-Allow-Origin").unwrap(), "*");
}

#[actix_web::test]
async fn test_relay_failure_returns_structured_envelope() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_test_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/relay")
        .set_json(serde_json::json!({
            "url": "http://127.0.0.1:9/unreachable",
            "method": "GET"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);
    assert_eq!(resp.headers().get("Access-Control-Allow-Origin").unwrap(), "*");

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body.get("error").is_some());
    assert!(body.get("message").is_some());
}

#[actix_web::test]
async fn test_score_endpoint_ranks_profiles() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_test_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/score")
        .set_json(serde_json::json!({
            "criteria": "rust",
            "profiles": [
                { "name": "Bob", "title": "Accountant", "confidence": 0.9 },
                { "name": "Ada", "title": "Rust Engineer", "confidence": 0.5 }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["totalCandidates"], 2);
    assert_eq!(body["results"][0]["name"], "Ada");
    assert!(body["results"][0]["score"].as_f64().unwrap() > 0.0);
}

#[actix_web::test]
async fn test_score_endpoint_rejects_empty_criteria() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_test_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/score")
        .set_json(serde_json::json!({ "criteria": "", "profiles": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_test_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}
