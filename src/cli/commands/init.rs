//! Database initialization command.

use anyhow::{Context, Result};

use crate::adapters::sqlite::{initialize_database, verify_connection};
use crate::domain::models::Config;

pub async fn execute(config: &Config, json: bool) -> Result<()> {
    let url = format!("sqlite:{}", config.database.path);
    let pool = initialize_database(&url, config.database.max_connections)
        .await
        .context("failed to initialize database")?;
    verify_connection(&pool).await?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "initialized": config.database.path })
        );
    } else {
        println!("Database ready at {}", config.database.path);
    }
    Ok(())
}
