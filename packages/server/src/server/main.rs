// Main entry point for the PDF tutor server

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use gemini_client::GeminiClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tutor_core::{
    domains::session::SessionStore,
    kernel::{scheduled_tasks::start_scheduler, GeminiChatModel, ServerDeps},
    server::build_app,
    Config,
};

fn mask_key(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    format!("{}…", visible)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tutor_core=debug,gemini_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PDF tutor");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        model = %config.gemini_model,
        api_key = %mask_key(&config.gemini_api_key),
        max_upload_bytes = config.max_upload_bytes,
        "Configuration loaded"
    );

    // Model client
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;
    let mut client = GeminiClient::new(&config.gemini_api_key).with_http_client(http_client);
    if let Some(base_url) = &config.gemini_base_url {
        client = client.with_base_url(base_url);
    }
    let chat_model = GeminiChatModel::new(client, &config.gemini_model);
    let deps = ServerDeps::new(Arc::new(chat_model));

    // Sessions and idle sweep
    let sessions = SessionStore::new();
    let _scheduler = start_scheduler(sessions.clone(), config.session_idle)
        .await
        .context("Failed to start scheduled tasks")?;

    // Build application
    let app = build_app(deps, sessions, config.max_upload_bytes);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("UI: http://localhost:{}/", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
