use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// Lists every product that is not soft-deleted.
#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Product>, ProductError>;
}
