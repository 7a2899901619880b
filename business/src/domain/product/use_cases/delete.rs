use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

pub struct DeleteProductParams {
    pub id: ProductId,
}

/// Soft-deletes a product and returns its post-update state.
#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<Product, ProductError>;
}
