//! Concurrent fan-out of hotel queries to every registered supplier

use std::sync::Arc;

use futures::future::join_all;
use hotel_adapters::AdapterRegistry;
use hotel_types::{Hotel, HotelQuery};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::cleaner::clean_hotels;

/// Cleaned records returned by one supplier, in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierBatch {
	pub supplier: String,
	pub hotels: Vec<Hotel>,
}

impl SupplierBatch {
	pub fn new(supplier: impl Into<String>, hotels: Vec<Hotel>) -> Self {
		Self {
			supplier: supplier.into(),
			hotels,
		}
	}

	pub fn empty(supplier: impl Into<String>) -> Self {
		Self::new(supplier, Vec::new())
	}
}

/// Fetches a query from all registered adapters at once
#[derive(Debug, Clone)]
pub struct SupplierFetcher {
	adapter_registry: Arc<AdapterRegistry>,
}

impl SupplierFetcher {
	pub fn new(adapter_registry: Arc<AdapterRegistry>) -> Self {
		Self { adapter_registry }
	}

	pub fn supplier_names(&self) -> Vec<String> {
		self.adapter_registry.names()
	}

	/// Run one task per adapter and wait for all of them.
	///
	/// A failing, cancelled or panicking adapter is logged and yields an empty
	/// batch, so the result always holds one batch per registered supplier.
	pub async fn fetch_all(&self, query: &HotelQuery, cancel: &CancellationToken) -> Vec<SupplierBatch> {
		let adapters = self.adapter_registry.get_all();
		info!(
			"Fetching hotels from {} suppliers (ids: {}, destination: {:?})",
			adapters.len(),
			query.hotel_ids.len(),
			query.destination_id
		);

		let (names, tasks): (Vec<_>, Vec<_>) = adapters
			.iter()
			.map(|(name, adapter)| {
				let adapter = Arc::clone(adapter);
				let query = query.clone();
				let cancel = cancel.child_token();
				let supplier = name.clone();

				let task = tokio::spawn(async move {
					debug!("Starting hotel fetch from supplier {}", supplier);

					match adapter.fetch_hotels(&query, &cancel).await {
						Ok(hotels) => {
							debug!("Supplier {} returned {} hotels", supplier, hotels.len());
							SupplierBatch::new(supplier, clean_hotels(hotels))
						},
						Err(e) if e.is_transient() => {
							warn!("Supplier {} unavailable: {}", supplier, e);
							SupplierBatch::empty(supplier)
						},
						Err(e) => {
							error!("Supplier {} failed to fetch hotels: {}", supplier, e);
							SupplierBatch::empty(supplier)
						},
					}
				});

				(name.clone(), task)
			})
			.unzip();

		let results = join_all(tasks).await;

		let batches: Vec<SupplierBatch> = names
			.into_iter()
			.zip(results)
			.map(|(supplier, result)| match result {
				Ok(batch) => batch,
				Err(e) => {
					warn!("Fetch task for supplier {} did not complete: {}", supplier, e);
					SupplierBatch::empty(supplier)
				},
			})
			.collect();

		info!(
			"Supplier fetch completed: {} records from {} suppliers",
			batches.iter().map(|b| b.hotels.len()).sum::<usize>(),
			batches.len()
		);

		batches
	}
}
