//! Hotel Service
//!
//! Supplier fan-out, record cleaning, reconciliation and cache-assisted query
//! resolution.

pub mod cleaner;
pub mod fetcher;
pub mod hotel;
pub mod reconciler;

pub use cleaner::{clean_hotel, clean_hotels};
pub use fetcher::{SupplierBatch, SupplierFetcher};
pub use hotel::{HotelService, HotelServiceError, HotelServiceTrait, DEFAULT_CACHE_TTL};
pub use reconciler::{merge_hotels, reconcile, ReconcileError, ReconcileResult};
