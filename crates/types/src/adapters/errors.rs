//! Error types for adapter operations

use thiserror::Error;

/// Adapter operation errors
#[derive(Error, Debug)]
pub enum AdapterError {
	#[error("Supplier request failed: {0}")]
	HttpError(#[from] reqwest::Error),

	#[error("HTTP {status_code}: {reason}")]
	HttpStatusError { status_code: u16, reason: String },

	#[error("Timeout occurred after {timeout_ms}ms")]
	Timeout { timeout_ms: u64 },

	#[error("Request cancelled for supplier {supplier}")]
	Cancelled { supplier: String },

	#[error("Unreadable supplier payload: {reason}")]
	InvalidResponse { reason: String },

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error("Configuration error: {reason}")]
	ConfigError { reason: String },

	#[error("Adapter already registered: {name}")]
	AlreadyRegistered { name: String },

	#[error("Unknown supplier kind: {0}")]
	UnsupportedAdapter(String),
}

impl AdapterError {
	/// HTTP status of the failed supplier call, if the supplier answered
	pub fn status_code(&self) -> Option<u16> {
		match self {
			AdapterError::HttpStatusError { status_code, .. } => Some(*status_code),
			AdapterError::HttpError(reqwest_error) => {
				reqwest_error.status().map(|status| status.as_u16())
			},
			_ => None,
		}
	}

	/// Error for a non-success supplier response
	pub fn from_http_failure(status_code: u16) -> Self {
		let reason = reqwest::StatusCode::from_u16(status_code)
			.ok()
			.and_then(|status| status.canonical_reason())
			.map(str::to_string)
			.unwrap_or_else(|| format!("HTTP Error {}", status_code));

		Self::HttpStatusError {
			status_code,
			reason,
		}
	}

	/// Whether the supplier was unreachable, slow or cut off rather than wrong
	pub fn is_transient(&self) -> bool {
		match self {
			AdapterError::Timeout { .. } | AdapterError::Cancelled { .. } => true,
			AdapterError::HttpError(e) => e.is_timeout() || e.is_connect(),
			AdapterError::HttpStatusError { status_code, .. } => *status_code >= 500,
			_ => false,
		}
	}
}
