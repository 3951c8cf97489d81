//! HTTP client construction and JSON fetching shared by supplier adapters

use std::str::FromStr;
use std::time::Duration;

use hotel_types::{AdapterError, AdapterResult, SupplierRuntimeConfig};
use reqwest::{
	header::{HeaderMap, HeaderName, HeaderValue},
	Client,
};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

/// Maximum number of idle connections kept per supplier host
const MAX_IDLE_PER_HOST: usize = 100;

/// Build an HTTP client with supplier headers and the configured timeout
pub fn build_client(config: &SupplierRuntimeConfig, adapter_type: &str) -> AdapterResult<Client> {
	Url::parse(&config.endpoint).map_err(|e| AdapterError::ConfigError {
		reason: format!(
			"Invalid endpoint '{}' for supplier {}: {}",
			config.endpoint, config.name, e
		),
	})?;

	let mut headers = HeaderMap::new();
	headers.insert("Accept", HeaderValue::from_static("application/json"));
	headers.insert(
		"User-Agent",
		HeaderValue::from_static("Hotel-Aggregator/1.0"),
	);
	if let Ok(value) = HeaderValue::from_str(adapter_type) {
		headers.insert("X-Adapter-Type", value);
	}

	// Add custom headers from the supplier config
	if let Some(supplier_headers) = &config.headers {
		for (key, value) in supplier_headers {
			match (HeaderName::from_str(key), HeaderValue::from_str(value)) {
				(Ok(header_name), Ok(header_value)) => {
					headers.insert(header_name, header_value);
				},
				_ => warn!(
					"Skipping invalid header '{}' for supplier {}",
					key, config.name
				),
			}
		}
	}

	Client::builder()
		.default_headers(headers)
		.timeout(Duration::from_millis(config.timeout_ms))
		.pool_max_idle_per_host(MAX_IDLE_PER_HOST)
		.build()
		.map_err(AdapterError::HttpError)
}

/// GET the supplier endpoint and decode a JSON array of `T`.
///
/// Returns `AdapterError::Cancelled` as soon as `cancel` fires.
pub async fn fetch_json<T>(
	client: &Client,
	config: &SupplierRuntimeConfig,
	cancel: &CancellationToken,
) -> AdapterResult<Vec<T>>
where
	T: DeserializeOwned,
{
	let request = async {
		debug!(
			"Requesting hotels from supplier {} at {}",
			config.name, config.endpoint
		);

		let response = client.get(&config.endpoint).send().await.map_err(|e| {
			if e.is_timeout() {
				AdapterError::Timeout {
					timeout_ms: config.timeout_ms,
				}
			} else {
				AdapterError::HttpError(e)
			}
		})?;

		let status = response.status();
		if !status.is_success() {
			return Err(AdapterError::from_http_failure(status.as_u16()));
		}

		let body = response.text().await.map_err(AdapterError::HttpError)?;

		serde_json::from_str::<Vec<T>>(&body).map_err(|e| AdapterError::InvalidResponse {
			reason: format!("Failed to parse {} response: {}", config.name, e),
		})
	};

	tokio::select! {
		biased;
		_ = cancel.cancelled() => Err(AdapterError::Cancelled {
			supplier: config.name.clone(),
		}),
		result = request => result,
	}
}
