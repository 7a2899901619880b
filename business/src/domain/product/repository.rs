use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::changes::ProductChanges;
use super::filters::ProductFilters;
use super::model::{NewProduct, Product};
use super::value_objects::ProductId;

/// Store port for products.
///
/// Implementations must apply `find_one_and_update` as a single atomic
/// operation and return the post-update state.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    async fn find_many(&self, filters: &ProductFilters) -> Result<Vec<Product>, RepositoryError>;
    async fn find_one_and_update(
        &self,
        id: &ProductId,
        changes: &ProductChanges,
    ) -> Result<Product, RepositoryError>;
}
