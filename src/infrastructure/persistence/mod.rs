//! Concrete store implementations.
//!
//! - [`MemoryStore`] - in-process map, used by the binary and in tests

pub mod memory_store;

pub use memory_store::MemoryStore;
