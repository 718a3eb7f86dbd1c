//! Concrete [`JobStore`](super::JobStore) implementations.

pub mod memory;

pub use memory::InMemoryJobStore;
