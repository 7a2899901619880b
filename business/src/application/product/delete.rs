use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::product::changes::ProductChanges;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        let product = self
            .repository
            .find_one_and_update(&params.id, &ProductChanges::soft_delete(Utc::now()))
            .await
            .map_err(ProductError::from)
            .inspect_err(|e| {
                self.logger
                    .warn(&format!("Failed to delete product {}: {}", params.id, e))
            })?;

        self.logger.info(&format!("Product deleted: {}", product.id));
        Ok(product)
    }
}
