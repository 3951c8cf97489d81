use utoipa::OpenApi;

use crate::handlers::common::ErrorResponse;
use crate::handlers::health::{self, CacheStats, ReadinessResponse};
use crate::handlers::hotels;
use hotel_types::{Amenities, Hotel, Image, Images, Location};

#[derive(OpenApi)]
#[openapi(
	paths(health::health, health::ready, hotels::get_hotels),
	components(schemas(
		Hotel,
		Location,
		Amenities,
		Images,
		Image,
		ErrorResponse,
		ReadinessResponse,
		CacheStats
	)),
	tags(
		(name = "hotels", description = "Reconciled hotel listings"),
		(name = "health", description = "Health and readiness endpoints")
	)
)]
pub struct ApiDoc;
