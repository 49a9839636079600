//! Mock customer stores for exercising the caching layer.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Mutex;

use clientele::domain::errors::DomainResult;
use clientele::domain::models::Customer;
use clientele::domain::ports::CustomerStore;

/// In-memory store that counts bulk loads and can be told to refuse
/// writes (reporting 0 affected rows, like a store-side rejection).
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<HashMap<String, Customer>>,
    all_calls: AtomicUsize,
    reject_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_customers(customers: Vec<Customer>) -> Self {
        let store = Self::new();
        {
            let mut rows = store.rows.lock().await;
            for customer in customers {
                rows.insert(customer.id.clone(), customer);
            }
        }
        store
    }

    /// Number of times `all()` has been called.
    pub fn all_calls(&self) -> usize {
        self.all_calls.load(Ordering::SeqCst)
    }

    /// Make every subsequent write report 0 affected rows.
    pub fn reject_writes(&self) {
        self.reject_writes.store(true, Ordering::SeqCst);
    }

    fn writes_rejected(&self) -> bool {
        self.reject_writes.load(Ordering::SeqCst)
    }

    /// Direct row lookup, bypassing any cache in front of this store.
    pub async fn row(&self, id: &str) -> Option<Customer> {
        self.rows.lock().await.get(id).cloned()
    }
}

#[async_trait]
impl CustomerStore for MemoryStore {
    async fn add(&self, customer: &Customer) -> DomainResult<u64> {
        if self.writes_rejected() {
            return Ok(0);
        }
        let mut rows = self.rows.lock().await;
        if rows.contains_key(&customer.id) {
            return Ok(0);
        }
        rows.insert(customer.id.clone(), customer.clone());
        Ok(1)
    }

    async fn find(&self, id: &str) -> DomainResult<Option<Customer>> {
        Ok(self.rows.lock().await.get(id).cloned())
    }

    async fn update(&self, customer: &Customer) -> DomainResult<u64> {
        if self.writes_rejected() {
            return Ok(0);
        }
        let mut rows = self.rows.lock().await;
        match rows.get_mut(&customer.id) {
            Some(existing) => {
                *existing = customer.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn remove(&self, id: &str) -> DomainResult<u64> {
        if self.writes_rejected() {
            return Ok(0);
        }
        Ok(u64::from(self.rows.lock().await.remove(id).is_some()))
    }

    async fn all(&self) -> DomainResult<Vec<Customer>> {
        self.all_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.lock().await.values().cloned().collect())
    }
}
