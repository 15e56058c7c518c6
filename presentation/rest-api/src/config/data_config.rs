use std::env;
use std::sync::Arc;

use anyhow::Context;
use strum_macros::{Display, EnumString};

use business::domain::gateway::DataGateway;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::memory_gateway::MemoryGateway;
use persistence::postgres_gateway::PostgresGateway;
use postgrest::client::PostgrestClient;
use postgrest::gateway::PostgrestGateway;

/// Where the relational collections live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DataBackend {
    Postgres,
    Postgrest,
    Memory,
}

impl DataBackend {
    /// Reads `DATA_BACKEND`, defaulting to `postgres`.
    pub fn from_env() -> anyhow::Result<Self> {
        match env::var("DATA_BACKEND") {
            Ok(value) => value
                .trim()
                .to_lowercase()
                .parse()
                .with_context(|| format!("unknown DATA_BACKEND '{value}'")),
            Err(_) => Ok(DataBackend::Postgres),
        }
    }
}

/// Builds the data gateway selected by the environment
///
/// Environment variables:
/// - DATA_BACKEND: postgres, postgrest or memory (default: postgres)
/// - DATABASE_URL: PostgreSQL connection string (postgres)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - DATABASE_MIGRATIONS_PATH: migrations to run at startup (optional)
/// - POSTGREST_URL, POSTGREST_API_KEY: hosted data API (postgrest)
pub async fn init_gateway() -> anyhow::Result<Arc<dyn DataGateway>> {
    let backend = DataBackend::from_env()?;
    tracing::info!("Using {backend} data backend");

    match backend {
        DataBackend::Postgres => {
            let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
            let mut config = DatabaseConfig::new(db_url);
            if let Ok(max) = env::var("DATABASE_MAX_CONNECTIONS") {
                let max = max
                    .parse()
                    .context("DATABASE_MAX_CONNECTIONS must be a number")?;
                config = config.with_max_connections(max);
            }

            let pool = create_postgres_pool(&config).await?;
            if let Ok(path) = env::var("DATABASE_MIGRATIONS_PATH") {
                run_migrations(&pool, &path).await?;
            }
            Ok(Arc::new(PostgresGateway::new(pool)))
        }
        DataBackend::Postgrest => {
            let url = env::var("POSTGREST_URL").context("POSTGREST_URL must be set")?;
            let api_key = env::var("POSTGREST_API_KEY").context("POSTGREST_API_KEY must be set")?;
            Ok(Arc::new(PostgrestGateway::new(PostgrestClient::new(
                url, api_key,
            ))))
        }
        DataBackend::Memory => Ok(Arc::new(MemoryGateway::new())),
    }
}
