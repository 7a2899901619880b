use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let new_product = NewProduct::new(NewProductProps {
            name: params.name,
            description: params.description,
            price: params.price,
            categories: params.categories,
            images_url: params.images_url,
        })
        .inspect_err(|e| self.logger.warn(&format!("Rejected product payload: {}", e)))?;

        let product = self.repository.create(&new_product).await?;

        if product.id.is_empty() {
            return Err(ProductError::StoreFailure(RepositoryError::database_error(
                "store returned an empty identifier",
            )));
        }

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::changes::ProductChanges;
    use crate::domain::product::filters::ProductFilters;
    use crate::domain::product::value_objects::ProductId;
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

    fn params(name: &str, price: f64) -> CreateProductParams {
        CreateProductParams {
            name: name.to_string(),
            description: "Solid oak".to_string(),
            price,
            categories: vec!["furniture".to_string()],
            images_url: vec!["https://img/chair.png".to_string()],
        }
    }

    #[tokio::test]
    async fn should_create_product_when_valid() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|new_product| {
                Ok(new_product
                    .clone()
                    .into_product(ProductId::new("65f1c0ffee0000000000abcd")))
            });

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Chair", 20.0)).await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.id.as_str(), "65f1c0ffee0000000000abcd");
        assert_eq!(product.name, "Chair");
        assert_eq!(product.price, 20.0);
        assert!(!product.is_deleted);
        assert!(product.updated_at >= product.created_at);
    }

    #[tokio::test]
    async fn should_set_created_at_before_writing() {
        let before = chrono::Utc::now();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .withf(move |new_product| new_product.created_at >= before)
            .returning(|new_product| Ok(new_product.clone().into_product(ProductId::new("id-1"))));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(use_case.execute(params("Chair", 20.0)).await.is_ok());
    }

    #[tokio::test]
    async fn should_reject_product_when_name_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_create().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("", 20.0)).await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidInput));
    }

    #[tokio::test]
    async fn should_reject_product_when_price_not_positive() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_create().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Chair", 0.0)).await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidInput));
    }

    #[tokio::test]
    async fn should_surface_store_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::database_error("write concern failed")));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Chair", 20.0)).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::StoreFailure(RepositoryError::DatabaseError(_))
        ));
    }

    #[tokio::test]
    async fn should_fail_when_store_returns_empty_identifier() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .returning(|new_product| Ok(new_product.clone().into_product(ProductId::new(""))));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Chair", 20.0)).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::StoreFailure(_)
        ));
    }
}
