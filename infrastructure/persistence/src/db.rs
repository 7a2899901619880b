use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use thiserror::Error;

pub use mongodb::Database;

use crate::product::entity::ProductDocument;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error: {0}")]
    ConnectionError(String),
    #[error("database.ping_failed: {0}")]
    PingFailed(String),
}

/// Configuration for the MongoDB connection
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub operation_timeout: Duration,
    pub server_selection_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new configuration with default database, collection and timeouts
    pub fn new(uri: String) -> Self {
        Self {
            uri,
            database: "productsdb".to_string(),
            collection: "products".to_string(),
            operation_timeout: Duration::from_secs(10),
            server_selection_timeout: Duration::from_secs(5),
        }
    }
}

/// Opens a client and checks the deployment answers a ping before returning
/// the configured database.
pub async fn connect(config: &DatabaseConfig) -> Result<Database, DatabaseError> {
    let mut options = ClientOptions::parse(&config.uri)
        .await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;
    options.server_selection_timeout = Some(config.server_selection_timeout);

    let client =
        Client::with_options(options).map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 }, None)
        .await
        .map_err(|e| DatabaseError::PingFailed(e.to_string()))?;

    tracing::info!(database = %config.database, "connected to MongoDB");
    Ok(client.database(&config.database))
}

pub fn product_collection(
    database: &Database,
    config: &DatabaseConfig,
) -> Collection<ProductDocument> {
    database.collection(&config.collection)
}
