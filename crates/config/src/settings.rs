//! Configuration settings structures

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use hotel_types::{SupplierRuntimeConfig, DEFAULT_SUPPLIER_TIMEOUT_MS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub suppliers: HashMap<String, SupplierConfig>,
	pub cache: CacheSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

/// Individual supplier configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SupplierConfig {
	/// Adapter kind: `acme`, `patagonia` or `paperflies`
	pub adapter: String,
	pub endpoint: String,
	#[serde(default = "default_supplier_timeout_ms")]
	pub timeout_ms: u64,
	#[serde(default = "default_enabled")]
	pub enabled: bool,
	#[serde(default)]
	pub headers: Option<HashMap<String, String>>,
	/// Registration name; defaults to the supplier's key in the settings map
	#[serde(default)]
	pub name: Option<String>,
}

fn default_supplier_timeout_ms() -> u64 {
	DEFAULT_SUPPLIER_TIMEOUT_MS
}

fn default_enabled() -> bool {
	true
}

impl SupplierConfig {
	/// Runtime adapter configuration for the supplier stored under `key`
	pub fn to_runtime_config(&self, key: &str) -> SupplierRuntimeConfig {
		let name = self.name.as_deref().unwrap_or(key);
		let config = SupplierRuntimeConfig::new(name, self.endpoint.clone(), self.timeout_ms);
		match &self.headers {
			Some(headers) => config.with_headers(headers.clone()),
			None => config,
		}
	}
}

/// Upper bound for the cache TTL (one day)
pub const MAX_CACHE_TTL_SECS: u64 = 24 * 60 * 60;

/// Result cache configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CacheSettings {
	/// How long a reconciled hotel is served from cache
	pub ttl_secs: u64,
	/// How often expired entries are swept
	pub cleanup_interval_secs: u64,
}

impl CacheSettings {
	pub fn ttl(&self) -> Duration {
		Duration::from_secs(self.ttl_secs)
	}

	pub fn cleanup_interval(&self) -> Duration {
		Duration::from_secs(self.cleanup_interval_secs)
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

/// Configuration rejected at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
	#[error("Supplier '{supplier}' has an empty endpoint")]
	EmptyEndpoint { supplier: String },
	#[error("Supplier '{supplier}' has a zero timeout")]
	ZeroTimeout { supplier: String },
	#[error("Cache TTL must be greater than zero")]
	ZeroCacheTtl,
	#[error("Cache TTL of {ttl_secs}s exceeds the {max_secs}s limit")]
	CacheTtlTooLarge { ttl_secs: u64, max_secs: u64 },
	#[error("Cache cleanup interval must be greater than zero")]
	ZeroCleanupInterval,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 8080,
		}
	}
}

impl Default for CacheSettings {
	fn default() -> Self {
		Self {
			ttl_secs: 60,
			cleanup_interval_secs: 120,
		}
	}
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Enabled suppliers, ordered by name
	pub fn enabled_suppliers(&self) -> BTreeMap<String, SupplierConfig> {
		self.suppliers
			.iter()
			.filter(|(_, config)| config.enabled)
			.map(|(k, v)| (k.clone(), v.clone()))
			.collect()
	}

	/// Check the values serde cannot express as constraints
	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		if self.cache.ttl_secs == 0 {
			return Err(ConfigValidationError::ZeroCacheTtl);
		}
		if self.cache.ttl_secs > MAX_CACHE_TTL_SECS {
			return Err(ConfigValidationError::CacheTtlTooLarge {
				ttl_secs: self.cache.ttl_secs,
				max_secs: MAX_CACHE_TTL_SECS,
			});
		}
		if self.cache.cleanup_interval_secs == 0 {
			return Err(ConfigValidationError::ZeroCleanupInterval);
		}

		for (name, supplier) in self.enabled_suppliers() {
			if supplier.endpoint.trim().is_empty() {
				return Err(ConfigValidationError::EmptyEndpoint { supplier: name });
			}
			if supplier.timeout_ms == 0 {
				return Err(ConfigValidationError::ZeroTimeout { supplier: name });
			}
		}

		Ok(())
	}
}
