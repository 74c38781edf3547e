//! Loading the startup catalog from a JSON file.

use std::path::Path;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;

/// Parse a JSON array of products.
///
/// English and legacy Spanish keys are both accepted.
pub fn parse_seed(raw: &str) -> ProductResult<Vec<Product>> {
    serde_json::from_str(raw).map_err(|e| ProductError::InvalidSeed(e.to_string()))
}

/// Read and parse the seed file at `path`.
pub async fn load_seed(path: impl AsRef<Path>) -> ProductResult<Vec<Product>> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ProductError::InvalidSeed(format!("{}: {}", path.display(), e)))?;

    let products = parse_seed(&raw)?;
    tracing::info!(path = %path.display(), products = products.len(), "Loaded product seed");
    Ok(products)
}
