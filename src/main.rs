//! Pinnacle Assessment server entry point.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pinnacle_assessment::adapters::ai::{GeminiConfig, GeminiProvider};
use pinnacle_assessment::adapters::document::TemplateReportRenderer;
use pinnacle_assessment::adapters::http::{app_router, AssessmentHandlers};
use pinnacle_assessment::application::handlers::assessment::{
    ActionPlanGenerator, AssessmentWorkflow,
};
use pinnacle_assessment::config::{AppConfig, LogFormat};
use pinnacle_assessment::domain::assessment::StatementCatalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config);
    config.validate().context("Invalid configuration")?;

    let generator = match GeminiConfig::from_settings(&config.ai) {
        Some(gemini) => {
            tracing::info!(model = %gemini.model, "Using Gemini for action plan generation");
            ActionPlanGenerator::with_provider(Arc::new(GeminiProvider::new(gemini)?))
        }
        None => {
            tracing::warn!("No API key configured; every report will be the fallback plan");
            ActionPlanGenerator::offline()
        }
    };

    let workflow = AssessmentWorkflow::new(StatementCatalog::reference(), Arc::new(generator));
    let handlers = AssessmentHandlers::new(workflow, Arc::new(TemplateReportRenderer::new()));
    let app = app_router(handlers, &config.server.cors_origins_list());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, "Pinnacle assessment listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    match config.server.log_format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
