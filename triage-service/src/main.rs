use service_core::observability::init_tracing;
use triage_service::config::TriageConfig;
use triage_service::startup::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Tracing first so configuration failures are logged.
    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    init_tracing("triage-service", "info", otlp_endpoint.as_deref());

    let config = TriageConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start triage service: {}", e);
        anyhow::anyhow!("Startup error: {}", e)
    })?;

    app.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
