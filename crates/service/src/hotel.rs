//! Hotel service
//!
//! Resolves hotel queries from the result cache and live supplier fetches.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hotel_types::{Hotel, HotelCacheTrait, HotelQuery};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::fetcher::SupplierFetcher;
use crate::reconciler::{reconcile, ReconcileError};

/// Default time a reconciled hotel stays in the cache
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum HotelServiceError {
	#[error("internal error: {0}")]
	Internal(String),
}

impl From<ReconcileError> for HotelServiceError {
	fn from(err: ReconcileError) -> Self {
		HotelServiceError::Internal(err.to_string())
	}
}

/// Trait for hotel query resolution
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelServiceTrait: Send + Sync {
	/// Resolve a query into reconciled hotels
	async fn get_hotels(
		&self,
		query: HotelQuery,
		cancel: CancellationToken,
	) -> Result<Vec<Hotel>, HotelServiceError>;

	/// Names of the suppliers queried on a live fetch
	fn supplier_names(&self) -> Vec<String>;
}

#[derive(Clone)]
pub struct HotelService {
	fetcher: SupplierFetcher,
	cache: Arc<dyn HotelCacheTrait>,
	cache_ttl: Duration,
}

impl HotelService {
	pub fn new(fetcher: SupplierFetcher, cache: Arc<dyn HotelCacheTrait>, cache_ttl: Duration) -> Self {
		Self {
			fetcher,
			cache,
			cache_ttl,
		}
	}

	/// Split the requested ids into cache hits and ids still to fetch
	async fn lookup_cached(&self, ids: Vec<String>) -> (Vec<Hotel>, Vec<String>) {
		let mut cached = Vec::new();
		let mut remaining = Vec::new();

		for id in ids {
			match self.cache.get_hotel(&id).await {
				Ok(Some(hotel)) => cached.push(hotel),
				Ok(None) => remaining.push(id),
				Err(e) => {
					warn!("Cache lookup for hotel {} failed, treating as miss: {}", id, e);
					remaining.push(id);
				},
			}
		}

		(cached, remaining)
	}

	async fn store_merged(&self, hotels: &[Hotel]) {
		for hotel in hotels {
			if let Err(e) = self.cache.set_hotel(hotel.clone(), self.cache_ttl).await {
				warn!("Failed to cache hotel {}: {}", hotel.id, e);
			}
		}
	}
}

#[async_trait]
impl HotelServiceTrait for HotelService {
	async fn get_hotels(
		&self,
		query: HotelQuery,
		cancel: CancellationToken,
	) -> Result<Vec<Hotel>, HotelServiceError> {
		let (cached, live_query) = if query.is_cacheable() {
			let (cached, remaining) = self.lookup_cached(query.unique_ids()).await;
			debug!(
				"Cache lookup: {} hits, {} misses",
				cached.len(),
				remaining.len()
			);

			if remaining.is_empty() {
				info!("Served {} hotels from cache", cached.len());
				return Ok(cached);
			}
			(cached, query.with_ids(remaining))
		} else {
			(Vec::new(), query)
		};

		let batches = self.fetcher.fetch_all(&live_query, &cancel).await;
		let mut hotels = reconcile(batches)?;

		self.store_merged(&hotels).await;

		info!(
			"Resolved {} hotels ({} reconciled, {} from cache)",
			hotels.len() + cached.len(),
			hotels.len(),
			cached.len()
		);

		// Cache hits are appended as-is, not merged with the live results
		hotels.extend(cached);
		Ok(hotels)
	}

	fn supplier_names(&self) -> Vec<String> {
		self.fetcher.supplier_names()
	}
}
