//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service layer applies the field rules and orchestrates repository
/// operations. Each rule failure becomes [`ProductError::InvalidInput`].
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every product in catalog order
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// List products that are currently available
    #[instrument(skip(self))]
    pub async fn list_available_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list_available().await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: u64) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let fields = input.into_fields()?;
        self.repository.create(fields).await
    }

    /// Replace an existing product
    ///
    /// A missing product is reported before any field rule runs.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: u64, input: UpdateProduct) -> ProductResult<Product> {
        if self.repository.get_by_id(id).await?.is_none() {
            return Err(ProductError::NotFound(id));
        }

        let fields = input.into_fields()?;
        self.repository.update(id, fields).await
    }

    /// Delete a product, returning the removed id
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: u64) -> ProductResult<u64> {
        if self.repository.delete(id).await? {
            Ok(id)
        } else {
            Err(ProductError::NotFound(id))
        }
    }

    /// Number of products in the catalog
    #[instrument(skip(self))]
    pub async fn count_products(&self) -> ProductResult<u64> {
        self.repository.count().await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
