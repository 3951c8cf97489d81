//! Cache trait for pluggable result cache implementations

use std::time::Duration;

use async_trait::async_trait;

use super::StorageResult;
use crate::Hotel;

/// TTL key-value cache for reconciled hotels, keyed by hotel id.
///
/// Values are stored as `Hotel`, so a hit always has the canonical shape.
/// Backends that cannot decode an entry report `StorageError::Serialization`.
#[async_trait]
pub trait HotelCacheTrait: Send + Sync {
	/// Get a live (non-expired) hotel by id
	async fn get_hotel(&self, hotel_id: &str) -> StorageResult<Option<Hotel>>;

	/// Insert or replace a hotel, expiring after `ttl`
	async fn set_hotel(&self, hotel: Hotel, ttl: Duration) -> StorageResult<()>;

	/// Remove a hotel by id
	async fn remove_hotel(&self, hotel_id: &str) -> StorageResult<bool>;

	/// Remove expired entries, returning how many were dropped
	async fn cleanup_expired(&self) -> StorageResult<usize>;

	/// (total, live) entry counts
	async fn cache_stats(&self) -> StorageResult<(usize, usize)>;

	/// Health check for the cache backend
	async fn health_check(&self) -> StorageResult<bool>;

	/// Start any background tasks associated with the implementation (e.g., TTL cleanup).
	/// Default implementation does nothing.
	async fn start_background_tasks(&self) -> StorageResult<()> {
		Ok(())
	}
}
