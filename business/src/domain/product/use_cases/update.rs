use async_trait::async_trait;

use crate::domain::product::changes::UpdateProduct;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

pub struct UpdateProductParams {
    pub id: ProductId,
    pub changes: UpdateProduct,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
