//! Hotel Aggregator Configuration
//!
//! Settings, loading and startup logging for the hotel aggregator.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::{load_config, load_config_from, ConfigLoadError};
pub use settings::{
	CacheSettings, ConfigValidationError, LogFormat, LoggingSettings, ServerSettings, Settings,
	SupplierConfig, MAX_CACHE_TTL_SECS,
};
pub use startup_logger::{
	log_configuration, log_service_info, log_service_shutdown, log_startup_complete,
};
