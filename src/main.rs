use std::sync::Arc;

use anyhow::{Context, anyhow};
use tokio::net::TcpListener;

use job_scout::application::ports::CatalogSource;
use job_scout::application::services::MatchService;
use job_scout::infrastructure::catalog::{EmbeddedCatalogSource, FileCatalogSource, load_catalog};
use job_scout::infrastructure::observability::{TracingConfig, init_tracing};
use job_scout::presentation::{AppState, Environment, SearchConfig, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(|e| anyhow!(e))?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        &TracingConfig::from_settings(environment, &settings.logging),
        settings.server.port,
    );

    let source: Box<dyn CatalogSource> = match &settings.search.catalog_path {
        Some(path) => Box::new(FileCatalogSource::new(path)),
        None => Box::new(EmbeddedCatalogSource),
    };
    let catalog = load_catalog(source.as_ref())
        .await
        .context("Failed to load job catalog")?;

    let state = AppState {
        match_service: Arc::new(MatchService::new(Arc::new(catalog))),
        search_config: SearchConfig::from(&settings.search),
    };

    let router = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(
        "Listening on {}, response delay {}ms",
        addr,
        settings.search.response_delay_ms
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
