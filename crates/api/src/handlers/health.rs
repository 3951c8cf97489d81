use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::state::AppState;

/// Health check endpoint
#[cfg_attr(feature = "openapi", utoipa::path(
	get,
	path = "/health",
	responses((status = 200, description = "Service healthy", body = String)),
	tag = "health"
))]
pub async fn health() -> &'static str {
	"OK"
}

/// Readiness response
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ReadinessResponse {
	pub status: String,
	pub cache_healthy: bool,
	pub cache: Option<CacheStats>,
	pub suppliers: Vec<String>,
}

/// Cached hotel counts
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CacheStats {
	pub total: usize,
	pub live: usize,
}

/// GET /ready - Readiness probe with cache and supplier checks
#[cfg_attr(feature = "openapi", utoipa::path(
	get,
	path = "/ready",
	responses(
		(status = 200, description = "Service ready", body = ReadinessResponse),
		(status = 503, description = "Service degraded", body = ReadinessResponse)
	),
	tag = "health"
))]
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
	let cache_healthy = state.cache.health_check().await.unwrap_or(false);
	let cache = state
		.cache
		.cache_stats()
		.await
		.ok()
		.map(|(total, live)| CacheStats { total, live });
	let suppliers = state.hotel_service.supplier_names();

	let overall = cache_healthy && !suppliers.is_empty() && !state.shutdown.is_cancelled();
	let status = if overall { "ready" } else { "degraded" };

	let body = ReadinessResponse {
		status: status.to_string(),
		cache_healthy,
		cache,
		suppliers,
	};
	let code = if overall {
		StatusCode::OK
	} else {
		StatusCode::SERVICE_UNAVAILABLE
	};
	(code, Json(body))
}
