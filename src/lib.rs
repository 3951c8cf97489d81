//! Hotel Aggregator Library
//!
//! Aggregates hotel listings from multiple suppliers, reconciles records that
//! describe the same hotel and serves them over HTTP with a short-lived cache.

// Core domain types
pub use hotel_types::{
	serde_json,
	AdapterError,
	AdapterResult,
	Amenities,
	Hotel,
	HotelCacheTrait,
	HotelQuery,
	HotelQueryError,
	Image,
	Images,
	Location,
	StorageError,
	StorageResult,
	SupplierAdapter,
	SupplierKind,
	SupplierRuntimeConfig,
};

// Service layer
pub use hotel_service::{
	HotelService, HotelServiceError, HotelServiceTrait, ReconcileError, SupplierBatch,
	SupplierFetcher,
};

// Storage layer
pub use hotel_storage::MemoryStore;

// API layer
pub use hotel_api::{create_router, AppState};

// Adapters
pub use hotel_adapters::{AdapterFactory, AdapterRegistry};

// Config
pub use hotel_config::{load_config, ConfigLoadError, Settings};

pub mod adapters {
	pub use hotel_adapters::*;
}

pub mod service {
	pub use hotel_service::*;
}

pub mod storage {
	pub use hotel_storage::*;
}

pub mod config {
	pub use hotel_config::*;
}

pub mod api {
	pub use hotel_api::*;
}

pub mod mocks;

use std::net::SocketAddr;
use std::sync::Arc;

use hotel_config::{
	log_configuration, log_service_info, log_service_shutdown, log_startup_complete, LogFormat,
};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

// Re-export external dependencies for custom adapters
pub use async_trait;
pub use tokio_util;

/// Builder for wiring suppliers, cache and HTTP surface together
pub struct HotelAggregatorBuilder<C = MemoryStore>
where
	C: HotelCacheTrait + Clone + 'static,
{
	settings: Option<Settings>,
	cache: C,
	adapter_registry: AdapterRegistry,
}

impl<C> HotelAggregatorBuilder<C>
where
	C: HotelCacheTrait + Clone + 'static,
{
	/// Create a new builder with the provided cache backend
	pub fn with_cache(cache: C) -> Self {
		Self {
			settings: None,
			cache,
			adapter_registry: AdapterRegistry::new(),
		}
	}
}

impl Default for HotelAggregatorBuilder<MemoryStore> {
	fn default() -> Self {
		Self::new()
	}
}

impl HotelAggregatorBuilder<MemoryStore> {
	/// Create a new builder with an in-memory cache
	pub fn new() -> Self {
		Self::with_cache(MemoryStore::new())
	}

	/// Create a builder whose in-memory cache follows the configured sweep interval
	pub fn from_settings(settings: Settings) -> Self {
		let cache = MemoryStore::with_cleanup_interval(settings.cache.cleanup_interval());
		Self::with_cache(cache).with_settings(settings)
	}
}

impl<C> HotelAggregatorBuilder<C>
where
	C: HotelCacheTrait + Clone + 'static,
{
	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Register a custom adapter
	/// Panics if adapter registration fails (this is intentional for startup-time configuration errors)
	pub fn with_adapter(mut self, adapter: Box<dyn SupplierAdapter>) -> Self {
		self.adapter_registry.register(adapter).expect(
			"Failed to register adapter during startup - this is a fatal configuration error",
		);
		self
	}

	/// Register an adapter the caller keeps a handle to
	/// Panics if adapter registration fails (this is intentional for startup-time configuration errors)
	pub fn with_shared_adapter(mut self, adapter: Arc<dyn SupplierAdapter>) -> Self {
		self.adapter_registry.register_shared(adapter).expect(
			"Failed to register adapter during startup - this is a fatal configuration error",
		);
		self
	}

	/// Create and register one adapter per enabled supplier in `settings`
	fn register_suppliers_from_settings(
		registry: &mut AdapterRegistry,
		settings: &Settings,
	) -> Result<(), String> {
		let mut errors = Vec::new();

		for (key, supplier) in settings.enabled_suppliers() {
			let runtime_config = supplier.to_runtime_config(&key);
			let registered = AdapterFactory::create_from_kind(&supplier.adapter, runtime_config)
				.and_then(|adapter| registry.register(adapter));

			if let Err(e) = registered {
				errors.push(format!("Supplier '{}': {}", key, e));
			}
		}

		if !errors.is_empty() {
			return Err(format!(
				"Configuration errors found:\n{}",
				errors.join("\n")
			));
		}

		Ok(())
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
		let structured = settings.logging.structured;

		match settings.logging.format {
			LogFormat::Json => tracing_subscriber::fmt()
				.json()
				.with_env_filter(env_filter)
				.with_target(structured)
				.with_thread_ids(structured)
				.try_init()
				.map_err(|e| e.to_string())?,
			LogFormat::Pretty => tracing_subscriber::fmt()
				.pretty()
				.with_env_filter(env_filter)
				.with_target(structured)
				.with_thread_ids(structured)
				.try_init()
				.map_err(|e| e.to_string())?,
			LogFormat::Compact => tracing_subscriber::fmt()
				.compact()
				.with_env_filter(env_filter)
				.with_target(structured)
				.with_thread_ids(structured)
				.try_init()
				.map_err(|e| e.to_string())?,
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Build the service graph and return the router with its state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.clone().unwrap_or_default();
		settings.validate()?;

		let mut adapter_registry = self.adapter_registry;
		Self::register_suppliers_from_settings(&mut adapter_registry, &settings)?;

		if adapter_registry.is_empty() {
			warn!("No supplier adapters registered; every hotel query will come back empty");
		} else {
			info!(
				"Successfully initialized with {} supplier(s): {}",
				adapter_registry.len(),
				adapter_registry.names().join(", ")
			);
		}

		self.cache
			.start_background_tasks()
			.await
			.map_err(|e| format!("Failed to start cache background tasks: {}", e))?;

		let cache: Arc<dyn HotelCacheTrait> = Arc::new(self.cache.clone());
		let fetcher = SupplierFetcher::new(Arc::new(adapter_registry));
		let hotel_service = HotelService::new(fetcher, Arc::clone(&cache), settings.cache.ttl());

		let app_state = AppState::new(Arc::new(hotel_service), cache);
		let router = create_router().with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server: load `.env` and configuration, initialize
	/// tracing, bind, and serve until SIGINT/SIGTERM.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		dotenvy::dotenv().ok();

		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config()?,
		};

		Self::init_tracing_from_settings(&settings)?;
		log_service_info();
		log_configuration(&settings);

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);
		let (app, state) = self.start().await?;

		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET  /health");
		info!("  GET  /ready");
		info!("  GET  /hotels?hotels=<ids>&destination=<id>");
		info!("  GET  /api/v1/hotels");
		if cfg!(feature = "openapi") {
			info!("  GET  /swagger-ui");
			info!("  GET  /api-docs/openapi.json");
		}

		axum::serve(listener, app)
			.with_graceful_shutdown(shutdown_signal(state.shutdown.clone()))
			.await?;

		log_service_shutdown();
		Ok(())
	}
}

/// Resolve on SIGINT or SIGTERM (or when `shutdown` is cancelled elsewhere),
/// cancelling `shutdown` so in-flight supplier calls abort.
pub async fn shutdown_signal(shutdown: CancellationToken) {
	let ctrl_c = async {
		if let Err(e) = tokio::signal::ctrl_c().await {
			warn!("Failed to listen for Ctrl+C: {}", e);
			std::future::pending::<()>().await;
		}
	};

	#[cfg(unix)]
	let terminate = async {
		match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
			Ok(mut signal) => {
				signal.recv().await;
			},
			Err(e) => {
				warn!("Failed to listen for SIGTERM: {}", e);
				std::future::pending::<()>().await;
			},
		}
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => info!("Received Ctrl+C, shutting down"),
		_ = terminate => info!("Received SIGTERM, shutting down"),
		_ = shutdown.cancelled() => info!("Shutdown requested"),
	}

	shutdown.cancel();
}
