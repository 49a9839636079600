//! CLI command handlers.

pub mod customer;
pub mod init;

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::adapters::cache::{CachedCustomerRepository, SharedCustomerCache};
use crate::adapters::sqlite::{initialize_database, SqliteCustomerStore};
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;

/// Resolve config, applying the `--database` override when given.
pub fn resolve_config(database_override: Option<&str>) -> Result<Config> {
    let mut config = ConfigLoader::load()?;
    if let Some(path) = database_override {
        config.database.path = path.to_string();
    }
    Ok(config)
}

/// Open the database and build a cache-backed repository for one command.
///
/// The shared cache cell lives in the service container of this process;
/// for a CLI invocation that container is the command itself.
pub async fn open_repository(
    config: &Config,
) -> Result<CachedCustomerRepository<SqliteCustomerStore>> {
    let url = format!("sqlite:{}", config.database.path);
    let pool = initialize_database(&url, config.database.max_connections)
        .await
        .context("failed to open database")?;
    let store = Arc::new(SqliteCustomerStore::new(pool));

    let shared = SharedCustomerCache::new();
    let repo = CachedCustomerRepository::load(store, &shared)
        .await
        .context("failed to load customer cache")?;
    Ok(repo)
}
