//! In-memory caching layer in front of the customer store.
//!
//! A full-mirror concurrent map with per-key atomic operations, populated
//! once per process and kept synchronized by the write path.

pub mod cached_customer_repository;
pub mod customer_cache;

pub use cached_customer_repository::CachedCustomerRepository;
pub use customer_cache::{CustomerCache, SharedCustomerCache};
