//! Productos API - REST server over the in-memory product catalog

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::server::{create_router, health_router};
use domain_products::{load_seed, InMemoryProductRepository, ProductService, SystemClock};
use std::sync::Arc;

use config::Config;
use state::AppState;

/// Seed the catalog described by `config` and wrap it in the shared state.
pub async fn build_state(config: Config) -> eyre::Result<AppState> {
    let clock = SystemClock::new(config.timestamp_format.clone())?;
    let seed = load_seed(&config.seed_path).await?;
    let repository = InMemoryProductRepository::with_seed(seed, Arc::new(clock))?;

    Ok(AppState {
        config,
        products: ProductService::new(repository),
    })
}

/// Full HTTP application: API routes, docs, middleware and `/health`.
pub fn build_app(state: &AppState) -> eyre::Result<Router> {
    let api_routes = api::routes(state);
    let router = create_router::<openapi::ApiDoc>(api_routes, &state.config.environment)?;
    Ok(router.merge(health_router(state.config.app)))
}
