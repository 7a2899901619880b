use std::sync::Arc;

use logger::TracingLogger;
use persistence::db::{Database, DatabaseConfig, product_collection};
use persistence::product::repository::ProductRepositoryMongo;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_filtered::GetFilteredProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub fn new(database: &Database, config: &DatabaseConfig) -> Self {
        let repository: Arc<dyn ProductRepository> = Arc::new(ProductRepositoryMongo::new(
            product_collection(database, config),
            config.operation_timeout,
        ));

        Self::with_repository(repository, Arc::new(TracingLogger))
    }

    /// Wires the use cases and routes around any store adapter.
    pub fn with_repository(repository: Arc<dyn ProductRepository>, logger: Arc<dyn Logger>) -> Self {
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_filtered_use_case = Arc::new(GetFilteredProductsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl { repository, logger });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_filtered_use_case,
            update_use_case,
            delete_use_case,
        );

        Self {
            health_api: crate::api::health::routes::Api::new(),
            product_api,
        }
    }
}
