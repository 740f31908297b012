use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use medicare_core::config::{catalog_file_from_env_value, suggestion_limit_from_env_value};
use medicare_core::{CoreConfig, DiagnosisService, InMemoryCatalog};

/// Main entry point for the MediCare application
///
/// Loads the disease catalog once, then serves the REST API until interrupted.
///
/// # Environment Variables
/// - `MEDICARE_REST_ADDR`: REST server address (default: "0.0.0.0:8000")
/// - `MEDICARE_CATALOG_FILE`: YAML disease catalog (default: the built-in seed catalog)
/// - `MEDICARE_SUGGESTION_LIMIT`: maximum symptom suggestions per query (default: 10)
///
/// # Returns
/// * `Ok(())` - If the server starts and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration, catalog loading or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medicare=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("MEDICARE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());

    let cfg = CoreConfig::new(
        catalog_file_from_env_value(std::env::var("MEDICARE_CATALOG_FILE").ok()),
        suggestion_limit_from_env_value(std::env::var("MEDICARE_SUGGESTION_LIMIT").ok())?,
    )?;

    let catalog = cfg.load_catalog()?;
    tracing::info!(
        diseases = catalog.diseases().len(),
        symptoms = catalog.vocabulary().len(),
        "++ Disease catalog loaded"
    );

    let diagnosis_service =
        DiagnosisService::new(Arc::new(cfg), Arc::new(InMemoryCatalog::new(catalog)));
    let app = api_rest::router(AppState { diagnosis_service });

    tracing::info!("++ Starting MediCare REST on {}", rest_addr);
    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- MediCare REST stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}
