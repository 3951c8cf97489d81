use axum::{
	extract::{Query, State},
	http::StatusCode,
	response::Json,
};
use hotel_service::HotelServiceError;
use hotel_types::{Hotel, HotelQuery};
use serde::Deserialize;
use tracing::{info, warn};
#[cfg(feature = "openapi")]
use utoipa::IntoParams;

use crate::handlers::common::{ApiError, ErrorResponse};
use crate::state::AppState;

/// Raw query parameters; parsed into a `HotelQuery` by the handler
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct HotelsParams {
	/// Comma-separated hotel ids
	pub hotels: Option<String>,
	/// Destination id (integer)
	pub destination: Option<String>,
}

/// GET /hotels - Reconciled hotels, optionally filtered by ids and destination
#[cfg_attr(feature = "openapi", utoipa::path(
	get,
	path = "/api/v1/hotels",
	params(HotelsParams),
	responses(
		(status = 200, description = "Reconciled hotels", body = [Hotel]),
		(status = 400, description = "Invalid destination", body = ErrorResponse),
		(status = 404, description = "No hotels matched", body = ErrorResponse),
		(status = 500, description = "Internal error", body = ErrorResponse)
	),
	tag = "hotels"
))]
pub async fn get_hotels(
	State(state): State<AppState>,
	Query(params): Query<HotelsParams>,
) -> Result<Json<Vec<Hotel>>, ApiError> {
	let query = HotelQuery::from_params(params.hotels.as_deref(), params.destination.as_deref())
		.map_err(|e| {
			ErrorResponse::new("INVALID_DESTINATION", e.to_string()).with_status(StatusCode::BAD_REQUEST)
		})?;

	info!(
		"Received hotels request (ids: {}, destination: {:?})",
		query.hotel_ids.len(),
		query.destination_id
	);

	// Dropping the handler (client gone) cancels this request's supplier calls
	let cancel = state.shutdown.child_token();
	let _guard = cancel.clone().drop_guard();

	let hotels = state
		.hotel_service
		.get_hotels(query, cancel)
		.await
		.map_err(|e| match e {
			HotelServiceError::Internal(message) => {
				warn!("Hotel query failed: {}", message);
				ErrorResponse::new("INTERNAL_ERROR", "Failed to resolve hotels")
					.with_status(StatusCode::INTERNAL_SERVER_ERROR)
			},
		})?;

	if hotels.is_empty() {
		return Err(ErrorResponse::new("NO_HOTELS_FOUND", "No hotels found")
			.with_status(StatusCode::NOT_FOUND));
	}

	info!("Returning {} hotels", hotels.len());
	Ok(Json(hotels))
}
