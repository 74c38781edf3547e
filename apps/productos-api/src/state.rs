//! Application state management

use domain_products::{InMemoryProductRepository, ProductService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub products: ProductService<InMemoryProductRepository>,
}
