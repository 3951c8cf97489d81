use axum::{
	body::Body,
	http::{HeaderName, Request, Response},
	routing::get,
	Router,
};
use tower::ServiceBuilder;
use tower_http::{
	compression::CompressionLayer,
	cors::CorsLayer,
	limit::RequestBodyLimitLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	trace::{DefaultOnResponse, TraceLayer},
	LatencyUnit,
};
use tracing::{Level, Span};

use crate::handlers::{get_hotels, health, ready};
use crate::security::add_security_headers;
use crate::state::AppState;
#[cfg(feature = "openapi")]
use crate::openapi::ApiDoc;
#[cfg(feature = "openapi")]
use utoipa::OpenApi;
#[cfg(feature = "openapi")]
use utoipa_swagger_ui::SwaggerUi;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Largest accepted request body; every route is a bodyless GET
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Span per request carrying the hotel query so supplier logs can be correlated
fn hotel_request_span(req: &Request<Body>) -> Span {
	let request_id = req
		.headers()
		.get(REQUEST_ID_HEADER)
		.and_then(|v| v.to_str().ok())
		.unwrap_or("-");

	tracing::info_span!(
		"http_request",
		method = %req.method(),
		path = req.uri().path(),
		query = req.uri().query().unwrap_or(""),
		request_id
	)
}

pub fn create_router() -> Router<AppState> {
	let router = Router::new()
		.route("/health", get(health))
		.route("/health/", get(health))
		.route("/ready", get(ready))
		.route("/hotels", get(get_hotels))
		.route("/hotels/", get(get_hotels))
		.route("/api/v1/hotels", get(get_hotels))
		.route("/api/v1/hotels/", get(get_hotels));

	#[cfg(feature = "openapi")]
	let router = router
		.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

	// Outermost first: the request id exists before the trace span reads it
	let middleware = ServiceBuilder::new()
		.layer(SetRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER), MakeRequestUuid))
		.layer(PropagateRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER)))
		.layer(
			TraceLayer::new_for_http()
				.make_span_with(hotel_request_span)
				.on_response(
					DefaultOnResponse::new()
						.level(Level::INFO)
						.latency_unit(LatencyUnit::Millis),
				),
		)
		.layer(CorsLayer::permissive())
		.layer(CompressionLayer::new())
		// Erase the limit layer's body type so CORS can build default bodies
		.map_response(|res: Response<_>| res.map(Body::new))
		.layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES));

	add_security_headers(router.layer(middleware))
}
