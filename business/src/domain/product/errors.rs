use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.invalid_input")]
    InvalidInput,
    #[error("product.invalid_price_range")]
    InvalidRange,
    #[error("product.invalid_id")]
    InvalidIdentifier,
    #[error("product.not_found")]
    NotFound,
    #[error("product.no_fields_to_update")]
    NoFieldsToUpdate,
    #[error("repository.persistence")]
    StoreFailure(#[source] RepositoryError),
}

impl From<RepositoryError> for ProductError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ProductError::NotFound,
            RepositoryError::InvalidIdentifier => ProductError::InvalidIdentifier,
            other => ProductError::StoreFailure(other),
        }
    }
}
