use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_filtered::{
    GetFilteredProductsParams, GetFilteredProductsUseCase,
};

pub struct GetFilteredProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFilteredProductsUseCase for GetFilteredProductsUseCaseImpl {
    async fn execute(
        &self,
        params: GetFilteredProductsParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger
            .info(&format!("Fetching products with filters: {:?}", params.filters));

        params
            .filters
            .validate()
            .inspect_err(|e| self.logger.warn(&format!("Rejected filters: {}", e)))?;

        let products = self.repository.find_many(&params.filters).await?;

        self.logger
            .info(&format!("Found {} matching products", products.len()));
        Ok(products)
    }
}
