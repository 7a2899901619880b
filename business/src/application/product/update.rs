use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        // Must fail before any write is attempted.
        let changes = params.changes.into_changes(Utc::now())?;

        let product = self
            .repository
            .find_one_and_update(&params.id, &changes)
            .await
            .map_err(ProductError::from)
            .inspect_err(|e| {
                self.logger
                    .warn(&format!("Failed to update product {}: {}", params.id, e))
            })?;

        self.logger
            .info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}
