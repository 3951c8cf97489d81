//! Mock supplier sets for integration tests

#![allow(dead_code)]

use hotel_aggregator::mocks::MockSupplierAdapter;

use super::entities::*;

/// The three suppliers with overlapping Beach Villas and Hilton records
pub struct SupplierSet {
	pub acme: MockSupplierAdapter,
	pub patagonia: MockSupplierAdapter,
	pub paperflies: MockSupplierAdapter,
}

impl SupplierSet {
	pub fn healthy() -> Self {
		Self {
			acme: MockSupplierAdapter::new(
				"Acme",
				vec![acme_beach_villas(), acme_intercontinental(), acme_hilton()],
			),
			patagonia: MockSupplierAdapter::new(
				"Patagonia",
				vec![patagonia_beach_villas(), patagonia_hilton()],
			),
			paperflies: MockSupplierAdapter::new("Paperflies", vec![paperflies_beach_villas()]),
		}
	}

	/// Same data, but Paperflies is down
	pub fn with_paperflies_outage() -> Self {
		Self {
			paperflies: MockSupplierAdapter::failing("Paperflies"),
			..Self::healthy()
		}
	}

	/// Same data, but Patagonia answers slowly
	pub fn with_slow_patagonia(delay_ms: u64) -> Self {
		let healthy = Self::healthy();
		Self {
			patagonia: healthy.patagonia.with_delay(delay_ms),
			..healthy
		}
	}

	pub fn all(&self) -> Vec<MockSupplierAdapter> {
		vec![
			self.acme.clone(),
			self.patagonia.clone(),
			self.paperflies.clone(),
		]
	}

	pub fn total_calls(&self) -> usize {
		self.all().iter().map(|a| a.call_count()).sum()
	}
}
