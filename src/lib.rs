//! Clientele - Customer Directory Service
//!
//! A customer directory with a write-through cached repository: reads are
//! served from an in-memory mirror of the customer table, writes go to the
//! durable store first and the cache is synchronized only after the store
//! confirms the write.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Entities, ports, and domain errors
//! - **Adapters Layer** (`adapters`): SQLite store and the in-memory cache
//! - **Infrastructure Layer** (`infrastructure`): Configuration and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use clientele::adapters::cache::{CachedCustomerRepository, SharedCustomerCache};
//! use clientele::adapters::sqlite::{initialize_database, SqliteCustomerStore};
//! use clientele::domain::ports::CustomerRepository;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = initialize_database("sqlite:customers.db", 10).await?;
//!     let store = SqliteCustomerStore::new(pool);
//!     let shared = SharedCustomerCache::new();
//!     let repo = CachedCustomerRepository::load(store, &shared).await?;
//!     let all = repo.retrieve_all(Default::default()).await?;
//!     println!("{} customers", all.len());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use adapters::cache::{CachedCustomerRepository, CustomerCache, SharedCustomerCache};
pub use adapters::sqlite::SqliteCustomerStore;
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{Config, Customer, CustomerFilter};
pub use domain::ports::{CustomerRepository, CustomerStore, UpdateOutcome};
pub use infrastructure::config::{ConfigError, ConfigLoader};
