//! Products Domain
//!
//! In-memory product catalog with its HTTP surface.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Field rules, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use domain_products::{
//!     handlers, load_seed, InMemoryProductRepository, ProductService, SystemClock,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let seed = load_seed("data/productos.json").await?;
//! let repository = InMemoryProductRepository::with_seed(seed, Arc::new(SystemClock::default()))?;
//! let service = ProductService::new(repository);
//!
//! let router = axum::Router::new().nest("/productos", handlers::router(service));
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod seed;
pub mod service;

// Re-export commonly used types
pub use clock::{FixedClock, IngestionClock, SystemClock, DEFAULT_TIMESTAMP_FORMAT};
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateProduct, Product, ProductDeleted, ProductFields, ProductUpdated, UpdateProduct,
};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use seed::{load_seed, parse_seed};
pub use service::ProductService;
