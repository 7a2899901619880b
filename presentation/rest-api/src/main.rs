use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes tracing, loads configuration, connects to MongoDB, wires the
/// product use cases and starts the HTTP server.
///
/// - config/: Server, CORS and MongoDB settings
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Connect to the store, failing fast when it is unreachable
    let database = database_config::init_database(&config.database).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(&database, &config.database);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
