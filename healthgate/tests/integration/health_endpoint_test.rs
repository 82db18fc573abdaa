//! Integration Test: GET /health 統合テスト
//!
//! 実ポートにバインドしたサーバーに対してHTTP経由でヘルスチェックを行い、
//! ステータスコードとJSONボディの形を検証する。

use std::sync::Arc;

use reqwest::Client;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use healthgate::health::{DatabaseProbe, ProbeSet, StreamingProbe};

use crate::support::gate::{create_test_db_pool, spawn_gate};

/// ストリーミングマネージャー互換のモックを起動する
async fn spawn_streaming_mock(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_health_returns_200_with_database_only() {
    let pool = create_test_db_pool().await;
    let mut probes = ProbeSet::new();
    probes.register(Arc::new(DatabaseProbe::new(pool)));

    let gate = spawn_gate(probes).await;
    let client = Client::new();

    let response = client
        .get(format!("http://{}/health", gate.addr()))
        .send()
        .await
        .expect("health request failed");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "OK" }));

    gate.stop().await;
}

#[tokio::test]
async fn test_health_returns_200_with_streaming_up() {
    let pool = create_test_db_pool().await;
    let streaming = spawn_streaming_mock(200).await;

    let mut probes = ProbeSet::new();
    probes.register(Arc::new(DatabaseProbe::new(pool)));
    probes.register(Arc::new(StreamingProbe::new(streaming.uri())));

    let gate = spawn_gate(probes).await;
    let client = Client::new();

    let response = client
        .get(format!("http://{}/health", gate.addr()))
        .send()
        .await
        .expect("health request failed");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "OK" }));

    gate.stop().await;
}

#[tokio::test]
async fn test_health_returns_200_when_streaming_is_down() {
    let pool = create_test_db_pool().await;
    let streaming = spawn_streaming_mock(503).await;

    let mut probes = ProbeSet::new();
    probes.register(Arc::new(DatabaseProbe::new(pool)));
    probes.register(Arc::new(StreamingProbe::new(streaming.uri())));

    let gate = spawn_gate(probes).await;
    let client = Client::new();

    let response = client
        .get(format!("http://{}/health", gate.addr()))
        .send()
        .await
        .expect("health request failed");

    // 任意依存の障害はステータスコードにもボディにも現れない
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "OK" }));
    assert!(body.get("errors").is_none());

    gate.stop().await;
}

#[tokio::test]
async fn test_health_returns_503_when_database_is_down() {
    let pool = create_test_db_pool().await;
    pool.close().await;

    let mut probes = ProbeSet::new();
    probes.register(Arc::new(DatabaseProbe::new(pool)));

    let gate = spawn_gate(probes).await;
    let client = Client::new();

    let response = client
        .get(format!("http://{}/health", gate.addr()))
        .send()
        .await
        .expect("health request failed");

    assert_eq!(response.status().as_u16(), 503);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "DOWN");
    let message = body["errors"]["database"]
        .as_str()
        .expect("errors.database should be a string");
    assert!(!message.is_empty());

    gate.stop().await;
}

#[tokio::test]
async fn test_health_returns_503_with_database_down_and_streaming_up() {
    let pool = create_test_db_pool().await;
    pool.close().await;
    let streaming = spawn_streaming_mock(200).await;

    let mut probes = ProbeSet::new();
    probes.register(Arc::new(DatabaseProbe::new(pool)));
    probes.register(Arc::new(StreamingProbe::new(streaming.uri())));

    let gate = spawn_gate(probes).await;
    let client = Client::new();

    let response = client
        .get(format!("http://{}/health", gate.addr()))
        .send()
        .await
        .expect("health request failed");

    assert_eq!(response.status().as_u16(), 503);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "DOWN");
    assert!(body["errors"]["database"].is_string());
    assert!(body["errors"].get("streaming").is_none());

    gate.stop().await;
}

#[tokio::test]
async fn test_health_is_idempotent_across_requests() {
    let pool = create_test_db_pool().await;
    let mut probes = ProbeSet::new();
    probes.register(Arc::new(DatabaseProbe::new(pool)));

    let gate = spawn_gate(probes).await;
    let client = Client::new();
    let url = format!("http://{}/health", gate.addr());

    let first = client.get(&url).send().await.expect("first request failed");
    let first_status = first.status().as_u16();
    let first_body: Value = first.json().await.unwrap();

    let second = client
        .get(&url)
        .send()
        .await
        .expect("second request failed");
    let second_status = second.status().as_u16();
    let second_body: Value = second.json().await.unwrap();

    assert_eq!(first_status, second_status);
    assert_eq!(first_body, second_body);

    gate.stop().await;
}
