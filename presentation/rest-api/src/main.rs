use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, data_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API entry point
///
/// - config/: server, CORS, Firebase and data backend settings
/// - setup/: dependency wiring and the HTTP server
/// - api/: route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;
    api::security::init(config.firebase.clone());

    // 4. Connect the data backend
    let gateway = data_config::init_gateway().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(gateway);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
