//! Readiness endpoint

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use axum_helpers::{run_health_checks, HealthCheckFuture};
use serde_json::{json, Value};

use crate::state::AppState;

/// Reports `ready` while the catalog answers, with its current size.
async fn ready(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let count = state.products.count_products().await.map_err(|e| e.to_string());

    let catalog: HealthCheckFuture = Box::pin({
        let count = count.clone();
        async move { count.map(|_| json!("ok")) }
    });
    let products: HealthCheckFuture = Box::pin(async move { count.map(|n| json!(n)) });

    run_health_checks(vec![("catalog", catalog), ("products", products)]).await
}

/// `/health` is served by `axum_helpers::health_router`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
}
