//! Cache traits for pluggable result cache implementations

// Re-export the cache traits from types crate
pub use hotel_types::storage::{HotelCacheTrait as HotelCache, StorageError, StorageResult};
