use std::env;
use std::time::Duration;

use anyhow::Context;
use persistence::db::{Database, DatabaseConfig, connect};

/// Load MongoDB settings from environment variables
///
/// Environment variables:
/// - MONGO_URI: Connection string (required)
/// - MONGO_DATABASE: Database name (default: "productsdb")
/// - MONGO_COLLECTION: Collection name (default: "products")
/// - MONGO_OPERATION_TIMEOUT_SECS: Per-call timeout (default: 10)
/// - MONGO_SERVER_SELECTION_TIMEOUT_SECS: Server selection timeout (default: 5)
pub fn from_env() -> anyhow::Result<DatabaseConfig> {
    let uri = env::var("MONGO_URI").context("MONGO_URI must be set")?;
    let mut config = DatabaseConfig::new(uri);

    if let Ok(database) = env::var("MONGO_DATABASE") {
        config.database = database;
    }
    if let Ok(collection) = env::var("MONGO_COLLECTION") {
        config.collection = collection;
    }
    if let Some(timeout) = seconds_var("MONGO_OPERATION_TIMEOUT_SECS")? {
        config.operation_timeout = timeout;
    }
    if let Some(timeout) = seconds_var("MONGO_SERVER_SELECTION_TIMEOUT_SECS")? {
        config.server_selection_timeout = timeout;
    }

    Ok(config)
}

fn seconds_var(key: &str) -> anyhow::Result<Option<Duration>> {
    match env::var(key) {
        Ok(raw) => parse_seconds(key, &raw).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_seconds(key: &str, raw: &str) -> anyhow::Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("{key} must be a whole number of seconds, got {raw:?}"))?;
    Ok(Duration::from_secs(secs))
}

/// Connect to MongoDB and verify the deployment answers a ping
///
/// # Errors
/// Returns error if the URI is invalid or the ping fails
pub async fn init_database(config: &DatabaseConfig) -> anyhow::Result<Database> {
    let database = connect(config)
        .await
        .context("failed to connect to MongoDB")?;
    Ok(database)
}
