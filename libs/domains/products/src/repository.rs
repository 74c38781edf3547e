use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::clock::{IngestionClock, SystemClock};
use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductFields};

/// Repository trait for Product persistence
///
/// Listing order is catalog order: seed order first, then creation order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List every product
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// List products with `available == true`
    async fn list_available(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: u64) -> ProductResult<Option<Product>>;

    /// Assign the next id, stamp the ingestion time and insert
    async fn create(&self, fields: ProductFields) -> ProductResult<Product>;

    /// Replace every mutable field of an existing product
    async fn update(&self, id: u64, fields: ProductFields) -> ProductResult<Product>;

    /// Remove a product; `false` when it did not exist
    async fn delete(&self, id: u64) -> ProductResult<bool>;

    /// Number of products in the catalog
    async fn count(&self) -> ProductResult<u64>;
}

#[derive(Debug)]
struct Catalog {
    products: Vec<Product>,
    next_id: u64,
}

impl Catalog {
    fn position(&self, id: u64) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }
}

/// In-memory implementation of ProductRepository
///
/// All state lives behind one lock, so id assignment and insertion happen
/// as a single step and concurrent creates never share an id.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    catalog: Arc<RwLock<Catalog>>,
    clock: Arc<dyn IngestionClock>,
}

impl InMemoryProductRepository {
    /// Empty catalog stamped with the local wall clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock::default()))
    }

    pub fn with_clock(clock: Arc<dyn IngestionClock>) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(Catalog {
                products: Vec::new(),
                next_id: 1,
            })),
            clock,
        }
    }

    /// Catalog preloaded with `products`, kept in the given order.
    ///
    /// Ids must be unique and non-zero. Seed entries without a timestamp are
    /// stamped with `clock`. The id counter starts after the largest seed id.
    pub fn with_seed(
        mut products: Vec<Product>,
        clock: Arc<dyn IngestionClock>,
    ) -> ProductResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in products.iter_mut() {
            if product.id == 0 {
                return Err(ProductError::InvalidSeed(
                    "product id must be greater than zero".to_string(),
                ));
            }
            if !seen.insert(product.id) {
                return Err(ProductError::InvalidSeed(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            if product.ingestion_timestamp.is_empty() {
                product.ingestion_timestamp = clock.timestamp();
            }
        }

        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        tracing::debug!(products = products.len(), next_id, "Seeded product catalog");

        Ok(Self {
            catalog: Arc::new(RwLock::new(Catalog { products, next_id })),
            clock,
        })
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let catalog = self.catalog.read().await;
        Ok(catalog.products.clone())
    }

    async fn list_available(&self) -> ProductResult<Vec<Product>> {
        let catalog = self.catalog.read().await;
        Ok(catalog
            .products
            .iter()
            .filter(|p| p.available)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: u64) -> ProductResult<Option<Product>> {
        let catalog = self.catalog.read().await;
        Ok(catalog.products.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, fields: ProductFields) -> ProductResult<Product> {
        let mut catalog = self.catalog.write().await;

        let id = catalog.next_id;
        catalog.next_id = id
            .checked_add(1)
            .ok_or_else(|| ProductError::Internal("product id space exhausted".to_string()))?;

        let product = Product::new(id, fields, self.clock.timestamp());
        catalog.products.push(product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn update(&self, id: u64, fields: ProductFields) -> ProductResult<Product> {
        let mut catalog = self.catalog.write().await;
        let index = catalog.position(id).ok_or(ProductError::NotFound(id))?;

        let product = &mut catalog.products[index];
        product.apply_update(fields);

        tracing::info!(product_id = id, "Updated product");
        Ok(product.clone())
    }

    async fn delete(&self, id: u64) -> ProductResult<bool> {
        let mut catalog = self.catalog.write().await;

        match catalog.position(id) {
            Some(index) => {
                catalog.products.remove(index);
                tracing::info!(product_id = id, "Deleted product");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> ProductResult<u64> {
        let catalog = self.catalog.read().await;
        Ok(catalog.products.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    const STAMP: &str = "2/1/2025, 09:30:00";

    fn fields(name: &str, available: bool) -> ProductFields {
        ProductFields {
            name: name.to_string(),
            price: 10.0,
            description: "A perfectly fine description".to_string(),
            available,
        }
    }

    fn seeded(ids: &[u64]) -> InMemoryProductRepository {
        let products = ids
            .iter()
            .map(|&id| {
                let name = format!("item-{id}");
                Product::new(id, fields(&name, id % 2 == 1), String::new())
            })
            .collect();
        InMemoryProductRepository::with_seed(products, Arc::new(FixedClock::new(STAMP))).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryProductRepository::with_clock(Arc::new(FixedClock::new(STAMP)));

        let product = repo.create(fields("Lamp", true)).await.unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.ingestion_timestamp, STAMP);

        let fetched = repo.get_by_id(product.id).await.unwrap();
        assert_eq!(fetched, Some(product));
    }

    #[tokio::test]
    async fn test_counter_starts_after_largest_seed_id() {
        let repo = seeded(&[2, 9, 4]);

        let product = repo.create(fields("Lamp", true)).await.unwrap();
        assert_eq!(product.id, 10);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = seeded(&[1, 2, 3]);

        assert!(repo.delete(3).await.unwrap());
        let product = repo.create(fields("Lamp", true)).await.unwrap();
        assert_eq!(product.id, 4);
    }

    #[tokio::test]
    async fn test_seed_without_timestamp_is_stamped() {
        let repo = seeded(&[1]);
        let product = repo.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(product.ingestion_timestamp, STAMP);
    }

    #[tokio::test]
    async fn test_seed_rejects_duplicate_ids() {
        let products = vec![
            Product::new(1, fields("a", true), STAMP.to_string()),
            Product::new(1, fields("b", true), STAMP.to_string()),
        ];
        let result =
            InMemoryProductRepository::with_seed(products, Arc::new(FixedClock::new(STAMP)));
        assert!(matches!(result, Err(ProductError::InvalidSeed(_))));
    }

    #[tokio::test]
    async fn test_seed_rejects_zero_id() {
        let products = vec![Product::new(0, fields("a", true), STAMP.to_string())];
        let result =
            InMemoryProductRepository::with_seed(products, Arc::new(FixedClock::new(STAMP)));
        assert!(matches!(result, Err(ProductError::InvalidSeed(_))));
    }

    #[tokio::test]
    async fn test_list_keeps_catalog_order() {
        let repo = seeded(&[3, 1, 2]);
        repo.create(fields("Lamp", true)).await.unwrap();

        let ids: Vec<u64> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2, 4]);
    }

    #[tokio::test]
    async fn test_list_available_filters() {
        let repo = seeded(&[1, 2, 3, 4]);

        let available = repo.list_available().await.unwrap();
        assert!(available.iter().all(|p| p.available));
        assert_eq!(available.len(), 2);
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_timestamp() {
        let repo = seeded(&[5]);

        let updated = repo.update(5, fields("Renamed", false)).await.unwrap();
        assert_eq!(updated.id, 5);
        assert_eq!(updated.ingestion_timestamp, STAMP);
        assert_eq!(updated.name, "Renamed");
        assert!(!updated.available);
        assert_eq!(repo.get_by_id(5).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let repo = seeded(&[1]);
        let result = repo.update(7, fields("Ghost", true)).await;
        assert!(matches!(result, Err(ProductError::NotFound(7))));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = seeded(&[1, 2]);

        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(1).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let repo = seeded(&[1, 2, 3, 4, 5]);

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(fields(&format!("p{i}"), true)).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let product = handle.await.unwrap().unwrap();
            assert!(product.id > 5);
            assert!(ids.insert(product.id));
        }
        assert_eq!(repo.count().await.unwrap(), 25);
    }
}
