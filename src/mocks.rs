//! Mock supplier adapter for demos and testing
//!
//! Serves a fixed list of hotels with optional delay and failure injection,
//! and counts how often it was called.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hotel_types::{AdapterError, AdapterResult, Hotel, HotelQuery, SupplierAdapter};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
pub struct MockSupplierAdapter {
	name: String,
	hotels: Arc<Vec<Hotel>>,
	call_tracker: Arc<AtomicUsize>,
	pub should_fail: bool,
	pub response_delay_ms: u64,
}

impl MockSupplierAdapter {
	/// Adapter serving `hotels` immediately
	pub fn new(name: impl Into<String>, hotels: Vec<Hotel>) -> Self {
		Self {
			name: name.into(),
			hotels: Arc::new(hotels),
			call_tracker: Arc::new(AtomicUsize::new(0)),
			should_fail: false,
			response_delay_ms: 0,
		}
	}

	/// Adapter whose every call fails
	pub fn failing(name: impl Into<String>) -> Self {
		Self {
			should_fail: true,
			..Self::new(name, Vec::new())
		}
	}

	/// Delay each response; the delay is cut short by cancellation
	pub fn with_delay(mut self, response_delay_ms: u64) -> Self {
		self.response_delay_ms = response_delay_ms;
		self
	}

	/// Number of times this adapter has been called, shared across clones
	pub fn call_count(&self) -> usize {
		self.call_tracker.load(Ordering::Relaxed)
	}

	pub fn reset_calls(&self) {
		self.call_tracker.store(0, Ordering::Relaxed);
	}
}

#[async_trait]
impl SupplierAdapter for MockSupplierAdapter {
	fn name(&self) -> &str {
		&self.name
	}

	async fn fetch_hotels(
		&self,
		query: &HotelQuery,
		cancel: &CancellationToken,
	) -> AdapterResult<Vec<Hotel>> {
		self.call_tracker.fetch_add(1, Ordering::Relaxed);

		if self.response_delay_ms > 0 {
			tokio::select! {
				_ = cancel.cancelled() => {
					return Err(AdapterError::Cancelled {
						supplier: self.name.clone(),
					});
				},
				_ = tokio::time::sleep(Duration::from_millis(self.response_delay_ms)) => {},
			}
		}

		if self.should_fail {
			return Err(AdapterError::InvalidResponse {
				reason: format!("Adapter {} configured to fail", self.name),
			});
		}

		Ok(self
			.hotels
			.iter()
			.filter(|hotel| query.matches(&hotel.id, hotel.destination_id))
			.cloned()
			.collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_mock_filters_and_counts_calls() {
		let adapter = MockSupplierAdapter::new(
			"Mock",
			vec![Hotel::new("1", 10, "One"), Hotel::new("2", 20, "Two")],
		);
		let shared = adapter.clone();

		let hotels = adapter
			.fetch_hotels(&HotelQuery::by_destination(20), &CancellationToken::new())
			.await
			.unwrap();

		assert_eq!(hotels.len(), 1);
		assert_eq!(hotels[0].id, "2");
		assert_eq!(shared.call_count(), 1);

		shared.reset_calls();
		assert_eq!(adapter.call_count(), 0);
	}

	#[tokio::test]
	async fn test_delayed_mock_observes_cancellation() {
		let adapter = MockSupplierAdapter::new("Slow", vec![]).with_delay(10_000);
		let cancel = CancellationToken::new();
		cancel.cancel();

		let result = adapter.fetch_hotels(&HotelQuery::all(), &cancel).await;
		assert!(matches!(result, Err(AdapterError::Cancelled { supplier }) if supplier == "Slow"));
	}

	#[tokio::test]
	async fn test_failing_mock() {
		let adapter = MockSupplierAdapter::failing("Broken");
		let result = adapter
			.fetch_hotels(&HotelQuery::all(), &CancellationToken::new())
			.await;
		assert!(result.is_err());
	}
}
