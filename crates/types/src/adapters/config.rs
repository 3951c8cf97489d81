//! Supplier adapter configuration models

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{AdapterError, AdapterResult};

/// Default per-request timeout for supplier calls
pub const DEFAULT_SUPPLIER_TIMEOUT_MS: u64 = 2000;

/// Kinds of supplier adapters known to the factory
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SupplierKind {
	Acme,
	Patagonia,
	Paperflies,
}

impl SupplierKind {
	/// Display name, also used as the default adapter name
	pub fn display_name(&self) -> &'static str {
		match self {
			SupplierKind::Acme => "Acme",
			SupplierKind::Patagonia => "Patagonia",
			SupplierKind::Paperflies => "Paperflies",
		}
	}
}

impl fmt::Display for SupplierKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.display_name())
	}
}

impl FromStr for SupplierKind {
	type Err = AdapterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"acme" => Ok(SupplierKind::Acme),
			"patagonia" => Ok(SupplierKind::Patagonia),
			"paperflies" => Ok(SupplierKind::Paperflies),
			other => Err(AdapterError::UnsupportedAdapter(other.to_string())),
		}
	}
}

/// Runtime configuration handed to an adapter at construction
#[derive(Debug, Clone, PartialEq)]
pub struct SupplierRuntimeConfig {
	/// Supplier name, used for registration, logging and fold ordering
	pub name: String,

	/// Endpoint returning the supplier's full hotel list
	pub endpoint: String,

	/// Timeout for requests in milliseconds
	pub timeout_ms: u64,

	/// Optional custom HTTP headers for requests
	pub headers: Option<HashMap<String, String>>,
}

impl SupplierRuntimeConfig {
	pub fn new(name: impl Into<String>, endpoint: impl Into<String>, timeout_ms: u64) -> Self {
		Self {
			name: name.into(),
			endpoint: endpoint.into(),
			timeout_ms,
			headers: None,
		}
	}

	/// Create runtime config with optional headers
	pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
		self.headers = Some(headers);
		self
	}

	pub fn validate(&self) -> AdapterResult<()> {
		if self.name.trim().is_empty() {
			return Err(AdapterError::ConfigError {
				reason: "supplier name cannot be empty".to_string(),
			});
		}
		if self.endpoint.trim().is_empty() {
			return Err(AdapterError::ConfigError {
				reason: format!("supplier '{}' has an empty endpoint", self.name),
			});
		}
		if self.timeout_ms == 0 {
			return Err(AdapterError::ConfigError {
				reason: format!("supplier '{}' has a zero timeout", self.name),
			});
		}
		Ok(())
	}
}
