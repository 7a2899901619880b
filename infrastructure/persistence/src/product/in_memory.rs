use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use business::domain::errors::RepositoryError;
use business::domain::product::changes::ProductChanges;
use business::domain::product::filters::ProductFilters;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

/// Process-local store with the same observable behavior as the MongoDB
/// adapter. Products are kept in insertion order.
#[derive(Default)]
pub struct ProductRepositoryInMemory {
    products: RwLock<Vec<Product>>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> RepositoryError {
    RepositoryError::database_error("in-memory store lock poisoned")
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let stored = product
            .clone()
            .into_product(ProductId::new(ObjectId::new().to_hex()));

        self.products.write().map_err(poisoned)?.push(stored.clone());

        tracing::debug!(id = %stored.id, "product inserted");
        Ok(stored)
    }

    async fn find_many(&self, filters: &ProductFilters) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.read().map_err(poisoned)?;

        Ok(products
            .iter()
            .filter(|product| filters.matches(product))
            .cloned()
            .collect())
    }

    async fn find_one_and_update(
        &self,
        id: &ProductId,
        changes: &ProductChanges,
    ) -> Result<Product, RepositoryError> {
        ObjectId::parse_str(id.as_str()).map_err(|_| RepositoryError::invalid_identifier())?;

        let mut products = self.products.write().map_err(poisoned)?;
        let product = products
            .iter_mut()
            .find(|product| &product.id == id)
            .ok_or_else(RepositoryError::not_found)?;

        changes.apply_to(product);

        tracing::debug!(%id, "product updated");
        Ok(product.clone())
    }
}
