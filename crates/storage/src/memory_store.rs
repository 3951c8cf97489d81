//! In-memory result cache using DashMap with TTL support

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use hotel_types::Hotel;
use tokio::time::interval;
use tracing::{debug, info};

use crate::traits::{HotelCache, StorageError, StorageResult};

/// Default sweep interval for expired entries
pub const DEFAULT_CLEANUP_INTERVAL: Duration = Duration::from_secs(120);

/// A cached hotel and the instant it stops being served
#[derive(Debug, Clone)]
struct CachedHotel {
	hotel: Hotel,
	expires_at: DateTime<Utc>,
}

impl CachedHotel {
	fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
		self.expires_at <= now
	}
}

/// In-memory TTL cache of reconciled hotels, keyed by hotel id
#[derive(Clone)]
pub struct MemoryStore {
	hotels: Arc<DashMap<String, CachedHotel>>,
	cleanup_interval: Duration,
}

impl MemoryStore {
	/// Create a new memory store instance
	pub fn new() -> Self {
		Self::with_cleanup_interval(DEFAULT_CLEANUP_INTERVAL)
	}

	/// Create a new memory store sweeping expired entries every `cleanup_interval`
	pub fn with_cleanup_interval(cleanup_interval: Duration) -> Self {
		Self {
			hotels: Arc::new(DashMap::new()),
			cleanup_interval,
		}
	}

	/// Start the TTL cleanup task for expired hotels
	pub fn start_ttl_cleanup(&self) -> tokio::task::JoinHandle<()> {
		let hotels = Arc::clone(&self.hotels);
		let period = self.cleanup_interval;

		tokio::spawn(async move {
			let mut cleanup_interval = interval(period);

			loop {
				cleanup_interval.tick().await;
				let removed = Self::remove_expired(&hotels);
				if removed > 0 {
					debug!("Cleaned up {} expired cached hotels", removed);
				}
			}
		})
	}

	fn remove_expired(hotels: &DashMap<String, CachedHotel>) -> usize {
		let now = Utc::now();
		let before = hotels.len();
		hotels.retain(|_, cached| !cached.is_expired_at(now));
		before.saturating_sub(hotels.len())
	}

	/// Number of entries currently held, expired or not
	pub fn len(&self) -> usize {
		self.hotels.len()
	}

	pub fn is_empty(&self) -> bool {
		self.hotels.is_empty()
	}
}

impl Default for MemoryStore {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl HotelCache for MemoryStore {
	async fn get_hotel(&self, hotel_id: &str) -> StorageResult<Option<Hotel>> {
		let now = Utc::now();
		if let Some(entry) = self.hotels.get(hotel_id) {
			if !entry.is_expired_at(now) {
				return Ok(Some(entry.hotel.clone()));
			}
		} else {
			return Ok(None);
		}

		// Expired: evict lazily, unless a fresh value replaced it meanwhile
		self.hotels
			.remove_if(hotel_id, |_, cached| cached.is_expired_at(now));
		Ok(None)
	}

	async fn set_hotel(&self, hotel: Hotel, ttl: Duration) -> StorageResult<()> {
		let ttl = chrono::Duration::from_std(ttl).map_err(|e| StorageError::Operation {
			message: format!("Invalid TTL for hotel {}: {}", hotel.id, e),
		})?;
		let expires_at = Utc::now()
			.checked_add_signed(ttl)
			.ok_or_else(|| StorageError::Operation {
				message: format!("TTL for hotel {} overflows the expiry timestamp", hotel.id),
			})?;

		self.hotels
			.insert(hotel.id.clone(), CachedHotel { hotel, expires_at });
		Ok(())
	}

	async fn remove_hotel(&self, hotel_id: &str) -> StorageResult<bool> {
		Ok(self.hotels.remove(hotel_id).is_some())
	}

	async fn cleanup_expired(&self) -> StorageResult<usize> {
		let removed = Self::remove_expired(&self.hotels);
		if removed > 0 {
			info!("Cleaned up {} expired cached hotels", removed);
		}
		Ok(removed)
	}

	async fn cache_stats(&self) -> StorageResult<(usize, usize)> {
		let now = Utc::now();
		let total = self.hotels.len();
		let live = self
			.hotels
			.iter()
			.filter(|entry| !entry.value().is_expired_at(now))
			.count();

		Ok((total, live))
	}

	async fn health_check(&self) -> StorageResult<bool> {
		// For in-memory storage, just check if the map is accessible
		Ok(true)
	}

	async fn start_background_tasks(&self) -> StorageResult<()> {
		self.start_ttl_cleanup();
		Ok(())
	}
}
