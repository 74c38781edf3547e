//! Productos API - REST server

use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use productos_api::{build_app, build_state, config::Config};
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Loading product seed from {}", config.seed_path.display());
    let state = build_state(config).await?;
    info!(
        "Catalog ready with {} products",
        state.products.count_products().await?
    );

    let app = build_app(&state)?;

    info!("Starting Productos API on port {}", state.config.server.port);

    let products = state.products.clone();
    create_production_app(
        app,
        &state.config.server,
        state.config.shutdown_timeout,
        async move {
            // Catalog is memory-only; nothing is flushed.
            match products.count_products().await {
                Ok(count) => info!("Shutting down: discarding {} in-memory products", count),
                Err(e) => tracing::warn!("Shutting down: catalog unavailable: {}", e),
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Productos API shutdown complete");
    Ok(())
}
