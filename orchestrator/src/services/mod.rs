//! Service implementations of the traits in [`crate::traits`]

pub mod memory_store;

pub use memory_store::InMemoryHistoricalStore;
