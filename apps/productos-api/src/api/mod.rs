//! API routes module

pub mod health;
pub mod productos;

use axum::{response::Html, routing::get, Router};

use crate::state::AppState;

const GREETING: &str = "<h1>Hola mundo desde Productos API!!</h1>";

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .nest("/productos", productos::router(state))
        .merge(health::router(state.clone()))
}

async fn index() -> Html<&'static str> {
    Html(GREETING)
}
