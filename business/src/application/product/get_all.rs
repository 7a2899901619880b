use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::filters::ProductFilters;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all active products");
        let products = self.repository.find_many(&ProductFilters::active()).await?;
        self.logger
            .info(&format!("Found {} active products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::changes::ProductChanges;
    use crate::domain::product::model::NewProduct;
    use crate::domain::product::value_objects::ProductId;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
            async fn find_many(&self, filters: &ProductFilters) -> Result<Vec<Product>, RepositoryError>;
            async fn find_one_and_update(&self, id: &ProductId, changes: &ProductChanges) -> Result<Product, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_all_active_products_when_requested() {
        let mut mock_repo = MockProductRepo::new();
        let now = Utc::now();
        mock_repo
            .expect_find_many()
            .withf(|filters| *filters == ProductFilters::default())
            .returning(move |_| {
                Ok(vec![Product::from_repository(
                    ProductId::new("65f1c0ffee0000000000abcd"),
                    "Lamp".to_string(),
                    String::new(),
                    12.5,
                    vec!["lighting".to_string()],
                    now,
                    now,
                    false,
                    vec![],
                )])
            });

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        let products = result.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Lamp");
    }

    #[tokio::test]
    async fn should_surface_store_failure_when_listing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_many()
            .returning(|_| Err(RepositoryError::Timeout));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::StoreFailure(RepositoryError::Timeout)
        ));
    }
}
