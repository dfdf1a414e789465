//! Predict call tests against a mocked model service.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use boxview_client::{PredictClient, PredictConfig, PredictError};

fn client_for(server: &MockServer) -> PredictClient {
    PredictClient::new(PredictConfig {
        base_url: server.uri(),
        model_id: "mdl-test".to_string(),
        api_token: None,
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[tokio::test]
async fn predict_returns_annotated_image() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict/mdl-test"))
        .and(body_json(json!({ "input_data": "aW5wdXQ=" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "image": "YW5ub3RhdGVk" })))
        .expect(1)
        .mount(&server)
        .await;

    let annotated = client_for(&server).predict("aW5wdXQ=".to_string()).await.unwrap();
    assert_eq!(annotated, "YW5ub3RhdGVk");
}

#[tokio::test]
async fn predict_sends_bearer_token_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict/mdl-test"))
        .and(header("authorization", "Bearer sekrit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "image": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PredictClient::new(PredictConfig {
        base_url: server.uri(),
        model_id: "mdl-test".to_string(),
        api_token: Some("sekrit".to_string()),
        timeout: Duration::from_secs(5),
    })
    .unwrap();

    client.predict("x".to_string()).await.unwrap();
}

#[tokio::test]
async fn predict_maps_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server).predict("x".to_string()).await.unwrap_err();
    assert!(matches!(err, PredictError::Unauthorized));
}

#[tokio::test]
async fn predict_maps_not_found_with_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_string("model mdl-test not deployed"))
        .mount(&server)
        .await;

    let err = client_for(&server).predict("x".to_string()).await.unwrap_err();
    match err {
        PredictError::NotFound(detail) => assert!(detail.contains("not deployed")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn predict_maps_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = client_for(&server).predict("x".to_string()).await.unwrap_err();
    assert!(matches!(err, PredictError::RateLimited));
}

#[tokio::test]
async fn predict_maps_other_failures_to_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("worker crashed"))
        .mount(&server)
        .await;

    let err = client_for(&server).predict("x".to_string()).await.unwrap_err();
    match err {
        PredictError::Service(detail) => {
            assert!(detail.contains("500"));
            assert!(detail.contains("worker crashed"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn predict_rejects_response_without_image_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "boxes": [] })))
        .mount(&server)
        .await;

    let err = client_for(&server).predict("x".to_string()).await.unwrap_err();
    assert!(matches!(err, PredictError::InvalidResponse(_)));
}

#[tokio::test]
async fn health_check_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "healthy" })))
        .mount(&server)
        .await;

    assert!(client_for(&server).health_check().await.unwrap());
}
