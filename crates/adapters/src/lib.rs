//! Hotel Adapters
//!
//! Supplier-specific adapters for the hotel aggregator, plus the registry the
//! fetch orchestrator iterates over.

pub mod acme_adapter;
pub mod client;
mod decode;
pub mod paperflies_adapter;
pub mod patagonia_adapter;

use std::collections::BTreeMap;
use std::sync::Arc;

pub use acme_adapter::AcmeAdapter;
pub use hotel_types::{AdapterError, AdapterResult, SupplierAdapter};
pub use paperflies_adapter::PaperfliesAdapter;
pub use patagonia_adapter::PatagoniaAdapter;

use hotel_types::{SupplierKind, SupplierRuntimeConfig};
use tracing::info;

/// Factory for creating supplier adapters
pub struct AdapterFactory;

impl AdapterFactory {
	/// Create an adapter of the given kind
	pub fn create_adapter(
		kind: SupplierKind,
		config: SupplierRuntimeConfig,
	) -> AdapterResult<Box<dyn SupplierAdapter>> {
		match kind {
			SupplierKind::Acme => Ok(Box::new(AcmeAdapter::new(config)?)),
			SupplierKind::Patagonia => Ok(Box::new(PatagoniaAdapter::new(config)?)),
			SupplierKind::Paperflies => Ok(Box::new(PaperfliesAdapter::new(config)?)),
		}
	}

	/// Create an adapter from a kind name such as `"acme"`
	pub fn create_from_kind(
		kind: &str,
		config: SupplierRuntimeConfig,
	) -> AdapterResult<Box<dyn SupplierAdapter>> {
		Self::create_adapter(kind.parse()?, config)
	}
}

/// Registered supplier adapters, keyed and ordered by adapter name.
///
/// The registry is built once at startup and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct AdapterRegistry {
	adapters: BTreeMap<String, Arc<dyn SupplierAdapter>>,
}

impl AdapterRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register an adapter under its own name
	pub fn register(&mut self, adapter: Box<dyn SupplierAdapter>) -> AdapterResult<()> {
		self.register_shared(Arc::from(adapter))
	}

	/// Register an adapter that is also held elsewhere (e.g. by tests tracking calls)
	pub fn register_shared(&mut self, adapter: Arc<dyn SupplierAdapter>) -> AdapterResult<()> {
		let name = adapter.name().to_string();
		if self.adapters.contains_key(&name) {
			return Err(AdapterError::AlreadyRegistered { name });
		}

		info!("Registered supplier adapter {}", name);
		self.adapters.insert(name, adapter);
		Ok(())
	}

	pub fn get(&self, name: &str) -> Option<Arc<dyn SupplierAdapter>> {
		self.adapters.get(name).cloned()
	}

	pub fn get_all(&self) -> &BTreeMap<String, Arc<dyn SupplierAdapter>> {
		&self.adapters
	}

	/// Adapter names in registry order
	pub fn names(&self) -> Vec<String> {
		self.adapters.keys().cloned().collect()
	}

	pub fn len(&self) -> usize {
		self.adapters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.adapters.is_empty()
	}
}
