//! Supplier adapter contract, configuration and errors

pub mod config;
pub mod errors;
pub mod traits;

pub use config::{SupplierKind, SupplierRuntimeConfig, DEFAULT_SUPPLIER_TIMEOUT_MS};
pub use errors::AdapterError;
pub use traits::SupplierAdapter;

/// Result type for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;
