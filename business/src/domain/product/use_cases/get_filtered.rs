use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::filters::ProductFilters;
use crate::domain::product::model::Product;

pub struct GetFilteredProductsParams {
    pub filters: ProductFilters,
}

#[async_trait]
pub trait GetFilteredProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetFilteredProductsParams,
    ) -> Result<Vec<Product>, ProductError>;
}
