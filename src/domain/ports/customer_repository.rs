//! Customer repository port: the CRUD contract consumers call.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Customer, CustomerFilter};

/// Outcome of an update whose store write committed.
///
/// The store write is the durability contract; synchronizing the cache is
/// best-effort. When a concurrent writer wins the cache swap the committed
/// value is still returned so callers see what the store holds.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The cache now reflects the committed value.
    Applied(Customer),
    /// The store write committed but the cache kept a concurrent writer's
    /// value; readers may briefly observe the other write.
    CacheStale(Customer),
}

impl UpdateOutcome {
    /// The committed customer, regardless of cache freshness.
    pub fn into_customer(self) -> Customer {
        match self {
            Self::Applied(c) | Self::CacheStale(c) => c,
        }
    }
}

/// Repository interface for customer CRUD with cached reads.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// List customers, optionally filtered. Never touches the store.
    async fn retrieve_all(&self, filter: CustomerFilter) -> DomainResult<Vec<Customer>>;

    /// Look up one customer by id (case-insensitive). A miss is
    /// authoritative: the customer does not exist.
    async fn retrieve(&self, id: &str) -> DomainResult<Option<Customer>>;

    /// Create a customer. The store write must affect exactly one row
    /// before the cache is touched.
    async fn create(&self, customer: Customer) -> DomainResult<Customer>;

    /// Update the customer at `id` with the given record. The path id and
    /// the record's embedded id must normalize to the same value.
    async fn update(&self, id: &str, customer: Customer) -> DomainResult<UpdateOutcome>;

    /// Delete a customer by id.
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
