//! Key-value store adapters.
//!
//! - `InMemoryKeyValueStore` - process-local map, with write-failure injection for tests
//! - `FileKeyValueStore` - one file per key under a data directory

mod file_store;
mod in_memory;

pub use file_store::FileKeyValueStore;
pub use in_memory::InMemoryKeyValueStore;
