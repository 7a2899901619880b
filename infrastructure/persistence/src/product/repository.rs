use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument, UpdateModifications};

use business::domain::errors::RepositoryError;
use business::domain::product::changes::ProductChanges;
use business::domain::product::filters::ProductFilters;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

use super::entity::ProductDocument;
use super::query::{filter_document, update_pipeline};

pub struct ProductRepositoryMongo {
    collection: Collection<ProductDocument>,
    operation_timeout: Duration,
}

impl ProductRepositoryMongo {
    pub fn new(collection: Collection<ProductDocument>, operation_timeout: Duration) -> Self {
        Self {
            collection,
            operation_timeout,
        }
    }

    /// Runs a driver call under the configured operation timeout.
    async fn bounded<T, F>(&self, operation: F) -> Result<T, RepositoryError>
    where
        F: Future<Output = mongodb::error::Result<T>>,
    {
        tokio::time::timeout(self.operation_timeout, operation)
            .await
            .map_err(|_| RepositoryError::Timeout)?
            .map_err(|e| RepositoryError::database_error(e.to_string()))
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryMongo {
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let document = ProductDocument::from_new(product);

        let result = self
            .bounded(self.collection.insert_one(&document, None))
            .await?;

        let oid = result.inserted_id.as_object_id().ok_or_else(|| {
            RepositoryError::database_error("inserted id is not an ObjectId")
        })?;

        tracing::debug!(id = %oid, "product inserted");
        Ok(product.clone().into_product(ProductId::new(oid.to_hex())))
    }

    async fn find_many(&self, filters: &ProductFilters) -> Result<Vec<Product>, RepositoryError> {
        let filter = filter_document(filters);
        tracing::debug!(%filter, "listing products");

        let options = FindOptions::builder().sort(doc! { "_id": 1 }).build();

        let documents: Vec<ProductDocument> = self
            .bounded(async {
                self.collection
                    .find(filter, options)
                    .await?
                    .try_collect::<Vec<_>>()
                    .await
            })
            .await?;

        documents
            .into_iter()
            .map(ProductDocument::into_domain)
            .collect()
    }

    async fn find_one_and_update(
        &self,
        id: &ProductId,
        changes: &ProductChanges,
    ) -> Result<Product, RepositoryError> {
        let oid = ObjectId::parse_str(id.as_str())
            .map_err(|_| RepositoryError::invalid_identifier())?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let update = UpdateModifications::Pipeline(update_pipeline(changes));

        let document = self
            .bounded(
                self.collection
                    .find_one_and_update(doc! { "_id": oid }, update, options),
            )
            .await?
            .ok_or_else(RepositoryError::not_found)?;

        tracing::debug!(id = %oid, "product updated");
        document.into_domain()
    }
}
