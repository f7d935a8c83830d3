//! Storage layer: the `InventoryStore` contract and its backends.
//!
//! Two backends ship here: an in-memory store (dev/test) that serializes
//! mutations behind one lock, and an optional Redis store (feature `redis`)
//! that uses WATCH/MULTI transactions. Both close the classic lost-update
//! race on concurrent creation of the same name: the record write and the
//! name-index insert are always one atomic unit.

pub mod inventory;
pub mod memory;
#[cfg(feature = "redis")]
pub mod redis_store;


pub use inventory::InventoryStore;
pub use memory::MemoryInventoryStore;
#[cfg(feature = "redis")]
pub use redis_store::RedisInventoryStore;
