//! Hotel Storage
//!
//! Result cache implementations for the hotel aggregator.

pub mod memory_store;
pub mod traits;

pub use memory_store::MemoryStore;
pub use traits::HotelCache;
