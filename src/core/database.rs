use std::sync::Arc;
use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::core::config::{DatabaseConfig, StorageConfig};
use crate::modules::storage::{InMemoryTriviaStore, PgTriviaStore, TriviaStore};
use crate::shared::constants::DEFAULT_CATEGORIES;

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}

/// Build the configured store. PostgreSQL stores are migrated before use.
pub async fn create_store(config: &StorageConfig) -> anyhow::Result<Arc<dyn TriviaStore>> {
    match config {
        StorageConfig::Postgres(database) => {
            let pool = create_pool(database).await?;
            tracing::info!(
                "Database connection pool created: {}",
                database.redacted_url()
            );

            tracing::info!("Running database migrations...");
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
            tracing::info!("Database migrations completed successfully");

            Ok(Arc::new(PgTriviaStore::new(pool)))
        }
        StorageConfig::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on shutdown");
            Ok(Arc::new(InMemoryTriviaStore::with_categories(
                DEFAULT_CATEGORIES,
            )))
        }
    }
}
