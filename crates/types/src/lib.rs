//! Hotel Types
//!
//! Shared models and traits for the hotel aggregator: the canonical record,
//! the query filter, the supplier adapter contract and the result cache contract.

pub mod adapters;
pub mod hotels;
pub mod storage;

// Re-export serde_json for convenience
pub use serde_json;

pub use hotels::{Amenities, Hotel, HotelQuery, HotelQueryError, Image, Images, Location};

pub use adapters::{
	AdapterError, AdapterResult, SupplierAdapter, SupplierKind, SupplierRuntimeConfig,
	DEFAULT_SUPPLIER_TIMEOUT_MS,
};

pub use storage::{HotelCacheTrait, StorageError, StorageResult};
