//! Full-mirror concurrent customer cache.
//!
//! A `DashMap` keyed by normalized customer id, holding every customer the
//! store holds. There is no eviction: entries are added on create, replaced
//! on update, removed on delete, and live for the process lifetime.
//! Contention is per key; no operation locks the whole map.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Customer;
use crate::domain::ports::CustomerStore;

/// In-memory mirror of the customer table.
///
/// Every entry corresponds to a row that existed in the store when the
/// entry was written; writers only touch the cache after the store has
/// confirmed their write.
#[derive(Debug, Default)]
pub struct CustomerCache {
    entries: DashMap<String, Customer>,
}

impl CustomerCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Build a cache from a full store scan.
    pub fn from_customers(customers: Vec<Customer>) -> Self {
        let entries = DashMap::with_capacity(customers.len());
        for customer in customers {
            entries.insert(customer.id.clone(), customer);
        }
        Self { entries }
    }

    /// Look up a customer by normalized id.
    pub fn get(&self, id: &str) -> Option<Customer> {
        self.entries.get(id).map(|entry| entry.value().clone())
    }

    /// Clone out every cached customer. Order is not specified.
    pub fn snapshot(&self) -> Vec<Customer> {
        self.entries
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Insert or replace the entry for the customer's id, returning the
    /// value now held by the cache.
    pub fn upsert(&self, customer: Customer) -> Customer {
        self.entries.insert(customer.id.clone(), customer.clone());
        customer
    }

    /// Compare-and-swap: replace the entry for `id` with `new` only if the
    /// current value still equals `expected`.
    ///
    /// Returns false when the key is absent or a concurrent writer got
    /// there first. The comparison and the replacement happen under the
    /// entry lock, so no interleaving can produce a torn value.
    pub fn replace_if_current(&self, id: &str, expected: &Customer, new: Customer) -> bool {
        match self.entries.entry(id.to_string()) {
            Entry::Occupied(mut occupied) if occupied.get() == expected => {
                occupied.insert(new);
                true
            }
            _ => false,
        }
    }

    /// Remove the entry for `id`. Removing a non-member is a no-op.
    pub fn remove(&self, id: &str) -> Option<Customer> {
        self.entries.remove(id).map(|(_, customer)| customer)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Process-wide cache cell with one-time initialization.
///
/// The first repository to call `get_or_load` performs the bulk load from
/// the store; concurrent callers wait on the same initialization and every
/// later caller observes the already-populated cache. One of these lives
/// for the process lifetime and is shared by every repository instance.
#[derive(Debug, Default)]
pub struct SharedCustomerCache {
    cell: OnceCell<Arc<CustomerCache>>,
}

impl SharedCustomerCache {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Return the shared cache, loading it from the store exactly once.
    pub async fn get_or_load<S>(&self, store: &S) -> DomainResult<Arc<CustomerCache>>
    where
        S: CustomerStore + ?Sized,
    {
        let cache = self
            .cell
            .get_or_try_init(|| async {
                let customers = store.all().await?;
                tracing::info!(count = customers.len(), "customer cache loaded from store");
                Ok::<_, DomainError>(Arc::new(CustomerCache::from_customers(customers)))
            })
            .await?;
        Ok(Arc::clone(cache))
    }

    /// Whether the bulk load has completed.
    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, company: &str) -> Customer {
        Customer::new(id, company)
    }

    #[test]
    fn test_upsert_and_get() {
        let cache = CustomerCache::new();
        cache.upsert(sample("ALFKI", "Alfreds Futterkiste"));

        let found = cache.get("ALFKI").unwrap();
        assert_eq!(found.company_name, "Alfreds Futterkiste");
        assert!(cache.get("XXXXX").is_none());
    }

    #[test]
    fn test_upsert_replaces() {
        let cache = CustomerCache::new();
        cache.upsert(sample("ALFKI", "Old Name"));
        cache.upsert(sample("ALFKI", "New Name"));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("ALFKI").unwrap().company_name, "New Name");
    }

    #[test]
    fn test_replace_if_current_succeeds_on_match() {
        let cache = CustomerCache::new();
        let original = cache.upsert(sample("ANATR", "Ana Trujillo"));

        let updated = sample("ANATR", "Ana Trujillo Emparedados");
        assert!(cache.replace_if_current("ANATR", &original, updated.clone()));
        assert_eq!(cache.get("ANATR").unwrap(), updated);
    }

    #[test]
    fn test_replace_if_current_fails_on_stale_expectation() {
        let cache = CustomerCache::new();
        let original = cache.upsert(sample("ANATR", "Ana Trujillo"));

        // A concurrent writer changes the entry after we observed it.
        cache.upsert(sample("ANATR", "Interloper"));

        let attempted = sample("ANATR", "Too Late");
        assert!(!cache.replace_if_current("ANATR", &original, attempted));
        assert_eq!(cache.get("ANATR").unwrap().company_name, "Interloper");
    }

    #[test]
    fn test_replace_if_current_fails_on_missing_key() {
        let cache = CustomerCache::new();
        let expected = sample("GHOST", "Ghost Co");
        assert!(!cache.replace_if_current("GHOST", &expected, sample("GHOST", "Still Ghost")));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let cache = CustomerCache::new();
        assert!(cache.remove("NOONE").is_none());

        cache.upsert(sample("BONAP", "Bon app'"));
        assert!(cache.remove("BONAP").is_some());
        assert!(cache.remove("BONAP").is_none());
    }

    #[test]
    fn test_from_customers() {
        let cache = CustomerCache::from_customers(vec![
            sample("AROUT", "Around the Horn"),
            sample("BERGS", "Berglunds snabbkop"),
        ]);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.snapshot().len(), 2);
    }
}
