/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.invalid_identifier")]
    InvalidIdentifier,
    #[error("repository.timeout")]
    Timeout,
    /// Raw failure reported by the underlying store, message kept verbatim.
    #[error("repository.database_error: {0}")]
    DatabaseError(String),
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn invalid_identifier() -> Self {
        RepositoryError::InvalidIdentifier
    }
    pub fn database_error(message: impl Into<String>) -> Self {
        RepositoryError::DatabaseError(message.into())
    }
}
