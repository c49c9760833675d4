//! Common test utilities for search-service integration tests.
#![allow(dead_code)]

use search_service::config::SearchConfig;
use search_service::services::SearchProvider;
use search_service::startup::Application;
use service_core::config::Config as CommonConfig;
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_ENGINE_ID: &str = "test-engine-id";

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,search_service=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Configuration with test credentials, bound to a random local port.
pub fn test_config(base_url: &str) -> SearchConfig {
    let common = CommonConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    let base_url = base_url.to_string();

    SearchConfig::from_lookup(common, move |key: &str| match key {
        "GOOGLE_API_KEY" => Some(TEST_API_KEY.to_string()),
        "SEARCH_ENGINE_ID" => Some(TEST_ENGINE_ID.to_string()),
        "GOOGLE_SEARCH_BASE_URL" => Some(base_url.clone()),
        _ => None,
    })
    .expect("Failed to build test config")
}

/// Spawn the application with the given provider and return its base address.
pub async fn spawn_app(provider: Arc<dyn SearchProvider>) -> String {
    spawn_app_with_config(test_config("http://127.0.0.1:9/unused"), provider).await
}

pub async fn spawn_app_with_config(config: SearchConfig, provider: Arc<dyn SearchProvider>) -> String {
    init_tracing();

    let app = Application::build_with_provider(config, provider)
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    format!("http://127.0.0.1:{}", port)
}
