//! End-to-end test over a real socket with a scripted provider.

use reqwest::Client;
use secrecy::SecretString;
use serde_json::json;
use service_core::config::Config;
use std::sync::Arc;
use std::time::Duration;
use triage_service::config::{MapsConfig, TriageConfig};
use triage_service::services::providers::{GatewayConfig, MockChatProvider};
use triage_service::startup::Application;

/// Spawn the application on a random port and return the port number.
async fn spawn_app(reply: &str) -> u16 {
    let config = TriageConfig {
        common: Config {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        gateway: GatewayConfig {
            base_url: "http://unused.invalid/v1".to_string(),
            api_key: SecretString::new("test-api-key".to_string()),
            model: "mock".to_string(),
            timeout: Duration::from_secs(5),
        },
        maps: MapsConfig {
            base_url: "https://maps.example".to_string(),
        },
        max_body_bytes: 10 * 1024 * 1024,
    };

    let app = Application::build_with_provider(config, Arc::new(MockChatProvider::replying(reply)))
        .await
        .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    port
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app("unused").await;

    let response = Client::new()
        .get(format!("http://127.0.0.1:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn large_image_payload_is_accepted_and_uses_configured_maps_host() {
    let port = spawn_app("Moderate contact dermatitis.").await;

    // Larger than axum's 2 MiB default body limit.
    let image = format!("data:image/jpeg;base64,{}", "A".repeat(3 * 1024 * 1024));

    let response = Client::new()
        .post(format!("http://127.0.0.1:{}/analyze-skin", port))
        .json(&json!({ "image": image, "address": "Main St" }))
        .timeout(Duration::from_secs(10))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["severity"], "moderate");
    assert_eq!(
        body["mapUrl"],
        "https://maps.example/search/Dermatologist+near+Main%20St"
    );
}
