use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notebook_core::{
    config::{rest_addr_from_env_values, store_location_from_env_value},
    open_store, ContentService, CoreConfig,
};

/// Main entry point for the notebook server.
///
/// Resolves configuration once, opens the record store and serves the REST
/// API (with OpenAPI/Swagger UI) until the process is stopped.
///
/// # Environment Variables
/// - `NOTEBOOK_REST_ADDR`: Server address (default: "0.0.0.0:5000")
/// - `PORT`: Port to bind on all interfaces when `NOTEBOOK_REST_ADDR` is unset
/// - `NOTEBOOK_STORE_URL`: `memory://`, `file://<dir>` or a directory path
///   (default: "file://notebook_data")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - a configuration value is invalid,
/// - the record store cannot be opened, or
/// - the HTTP server fails to bind or while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("notebook=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = rest_addr_from_env_values(
        std::env::var("NOTEBOOK_REST_ADDR").ok(),
        std::env::var("PORT").ok(),
    )?;
    let store_location = store_location_from_env_value(std::env::var("NOTEBOOK_STORE_URL").ok())?;
    let cfg = CoreConfig::new(rest_addr, store_location)?;

    tracing::info!("-- Opening record store at {}", cfg.store());
    let store = open_store(cfg.store())?;
    tracing::info!("-- {} content records available", store.count()?);

    let content_service = ContentService::new(Arc::clone(&store));
    api_rest::serve(cfg.rest_addr(), content_service).await
}
