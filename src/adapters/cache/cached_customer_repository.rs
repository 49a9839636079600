//! Cache-fronted customer repository.
//!
//! Reads are served from the in-memory mirror; writes go to the store
//! first and the cache is updated only after the store reports exactly one
//! affected row. The store is the source of truth throughout: the cache is
//! a derived view and never gets ahead of committed state.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{normalize_id, validate_id, Customer, CustomerFilter};
use crate::domain::ports::{CustomerRepository, CustomerStore, UpdateOutcome};

use super::customer_cache::{CustomerCache, SharedCustomerCache};

/// Customer repository serving reads from a shared in-memory cache.
pub struct CachedCustomerRepository<S: CustomerStore> {
    store: Arc<S>,
    cache: Arc<CustomerCache>,
}

impl<S: CustomerStore> CachedCustomerRepository<S> {
    /// Construct a repository over `store`, populating the shared cache
    /// from the store if this is the first construction in the process.
    ///
    /// Concurrent first constructions perform a single bulk load; every
    /// instance observes the same populated cache. There is no way to hold
    /// a repository whose cache was never populated.
    pub async fn load(store: Arc<S>, shared: &SharedCustomerCache) -> DomainResult<Self> {
        let cache = shared.get_or_load(store.as_ref()).await?;
        Ok(Self { store, cache })
    }

    /// Number of cached customers.
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<S: CustomerStore> CustomerRepository for CachedCustomerRepository<S> {
    async fn retrieve_all(&self, filter: CustomerFilter) -> DomainResult<Vec<Customer>> {
        let mut customers = self.cache.snapshot();
        if !filter.is_empty() {
            customers.retain(|c| filter.matches(c));
        }
        debug!(count = customers.len(), "served customer list from cache");
        Ok(customers)
    }

    async fn retrieve(&self, id: &str) -> DomainResult<Option<Customer>> {
        // A cache miss is authoritative; there is no store fallback.
        Ok(self.cache.get(&normalize_id(id)))
    }

    async fn create(&self, customer: Customer) -> DomainResult<Customer> {
        let customer = customer.normalized();
        customer.validate_id()?;

        let rows = self.store.add(&customer).await?;
        if rows != 1 {
            warn!(id = %customer.id, rows, "store did not accept the insert");
            return Err(DomainError::StoreRejected {
                id: customer.id,
                rows,
            });
        }

        debug!(id = %customer.id, "customer created");
        Ok(self.cache.upsert(customer))
    }

    async fn update(&self, id: &str, customer: Customer) -> DomainResult<UpdateOutcome> {
        let id = normalize_id(id);
        validate_id(&id)?;
        let customer = customer.normalized();
        if customer.id != id {
            return Err(DomainError::ValidationFailed(format!(
                "path id '{id}' does not match customer id '{}'",
                customer.id
            )));
        }

        // Observe the cache before the write; the swap below is
        // conditioned on this exact value.
        let observed = self.cache.get(&id);

        let rows = self.store.update(&customer).await?;
        if rows != 1 {
            return Err(DomainError::CustomerNotFound(id));
        }

        let swapped = match &observed {
            Some(prior) => self
                .cache
                .replace_if_current(&id, prior, customer.clone()),
            None => false,
        };

        if swapped {
            debug!(id = %id, "customer updated");
            Ok(UpdateOutcome::Applied(customer))
        } else {
            // The store write committed; a concurrent writer owns the
            // cache entry now. Staleness is transient, not a failure.
            warn!(id = %id, "cache swap lost to a concurrent writer");
            Ok(UpdateOutcome::CacheStale(customer))
        }
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let id = normalize_id(id);
        validate_id(&id)?;

        // Pre-check against the store, not the cache: distinguishes
        // "already gone" from "store rejected the delete".
        if self.store.find(&id).await?.is_none() {
            return Err(DomainError::CustomerNotFound(id));
        }

        let rows = self.store.remove(&id).await?;
        if rows != 1 {
            warn!(id = %id, rows, "store did not accept the delete");
            return Err(DomainError::StoreRejected { id, rows });
        }

        // Removing a non-member is a no-op.
        self.cache.remove(&id);
        debug!(id = %id, "customer deleted");
        Ok(())
    }
}
