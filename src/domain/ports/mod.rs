//! Ports: trait interfaces between the domain and the adapters.

pub mod customer_repository;
pub mod customer_store;

pub use customer_repository::{CustomerRepository, UpdateOutcome};
pub use customer_store::CustomerStore;
