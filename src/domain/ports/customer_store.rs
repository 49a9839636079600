//! Customer store port: the durable backing database contract.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::Customer;

/// Durable CRUD contract for customers.
///
/// Write operations return the affected-row count; a count of exactly 1 is
/// the only commit confirmation the caching layer trusts. Implementations
/// report a write the store did not accept (such as an insert hitting an
/// existing primary key) as 0 rows, not as an error.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Insert a customer. Returns the affected-row count.
    async fn add(&self, customer: &Customer) -> DomainResult<u64>;

    /// Find a customer by normalized id.
    async fn find(&self, id: &str) -> DomainResult<Option<Customer>>;

    /// Update a customer by its embedded id. Returns the affected-row count.
    async fn update(&self, customer: &Customer) -> DomainResult<u64>;

    /// Delete a customer by normalized id. Returns the affected-row count.
    async fn remove(&self, id: &str) -> DomainResult<u64>;

    /// Fetch every customer. Used only to build the in-memory mirror.
    async fn all(&self) -> DomainResult<Vec<Customer>>;
}
