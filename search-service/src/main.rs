use dotenvy::dotenv;
use search_service::config::SearchConfig;
use search_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    init_tracing("search-service", "info", otlp_endpoint.as_deref());

    // Missing credentials stop the process here, before any listener is bound.
    let config = SearchConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    Ok(())
}
