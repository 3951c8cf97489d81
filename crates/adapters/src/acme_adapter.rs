//! Acme supplier adapter
//!
//! Acme serves a flat list with PascalCase keys. Coordinates arrive as numbers,
//! numeric strings, empty strings or `null`; facilities are uncategorised and
//! map to general amenities. Acme has no images or booking conditions.

use async_trait::async_trait;
use hotel_types::{
	AdapterResult, Amenities, Hotel, HotelQuery, Location, SupplierAdapter, SupplierKind,
	SupplierRuntimeConfig, DEFAULT_SUPPLIER_TIMEOUT_MS,
};
use reqwest::Client;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::client::{build_client, fetch_json};
use crate::decode::{lenient_coordinate, null_as_default};

/// One hotel as returned by the Acme API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcmeHotel {
	pub id: String,
	pub destination_id: i64,
	#[serde(default, deserialize_with = "null_as_default")]
	pub name: String,
	#[serde(default, deserialize_with = "lenient_coordinate")]
	pub latitude: Option<f64>,
	#[serde(default, deserialize_with = "lenient_coordinate")]
	pub longitude: Option<f64>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub address: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub city: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub country: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub postal_code: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub description: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub facilities: Vec<String>,
}

impl From<AcmeHotel> for Hotel {
	fn from(raw: AcmeHotel) -> Self {
		Hotel {
			id: raw.id,
			destination_id: raw.destination_id,
			name: raw.name,
			location: Location {
				lat: raw.latitude.unwrap_or_default(),
				lng: raw.longitude.unwrap_or_default(),
				address: raw.address,
				city: raw.city,
				country: raw.country,
			},
			description: raw.description,
			amenities: Amenities {
				general: raw.facilities,
				room: Vec::new(),
			},
			..Default::default()
		}
	}
}

/// Adapter for the Acme hotel API
#[derive(Debug)]
pub struct AcmeAdapter {
	config: SupplierRuntimeConfig,
	client: Client,
}

impl AcmeAdapter {
	pub fn new(config: SupplierRuntimeConfig) -> AdapterResult<Self> {
		config.validate()?;
		let client = build_client(&config, "acme")?;
		Ok(Self { config, client })
	}

	/// Acme adapter with the default name and timeout
	pub fn with_endpoint(endpoint: impl Into<String>) -> AdapterResult<Self> {
		Self::new(SupplierRuntimeConfig::new(
			SupplierKind::Acme.display_name(),
			endpoint,
			DEFAULT_SUPPLIER_TIMEOUT_MS,
		))
	}
}

#[async_trait]
impl SupplierAdapter for AcmeAdapter {
	fn name(&self) -> &str {
		&self.config.name
	}

	async fn fetch_hotels(
		&self,
		query: &HotelQuery,
		cancel: &CancellationToken,
	) -> AdapterResult<Vec<Hotel>> {
		let raw: Vec<AcmeHotel> = fetch_json(&self.client, &self.config, cancel).await?;
		let total = raw.len();

		let hotels: Vec<Hotel> = raw
			.into_iter()
			.filter(|hotel| query.matches(&hotel.id, hotel.destination_id))
			.map(Hotel::from)
			.collect();

		debug!(
			"Supplier {} returned {} hotels, {} after filtering",
			self.config.name,
			total,
			hotels.len()
		);
		Ok(hotels)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use httpmock::prelude::*;
	use serde_json::json;

	fn payload() -> serde_json::Value {
		json!([
			{
				"Id": "iJhz",
				"DestinationId": 5432,
				"Name": "Beach Villas Singapore",
				"Latitude": 1.264751,
				"Longitude": 103.824006,
				"Address": " 8 Sentosa Gateway, Beach Villas ",
				"City": "Singapore",
				"Country": "SG",
				"PostalCode": "098269",
				"Description": "  This 5 star hotel is located on the coastline of Singapore.",
				"Facilities": ["Pool", "BusinessCenter", "WiFi ", "DryCleaning", " Breakfast"]
			},
			{
				"Id": "SjyX",
				"DestinationId": 5432,
				"Name": "InterContinental Singapore Robertson Quay",
				"Latitude": null,
				"Longitude": null,
				"Address": "1 Nanson Road",
				"City": "Singapore",
				"Country": "SG",
				"PostalCode": "238909",
				"Description": "Enjoy sophisticated waterfront living.",
				"Facilities": ["Pool", "WiFi "]
			},
			{
				"Id": "f8c9",
				"DestinationId": 1122,
				"Name": "Hilton Shinjuku Tokyo",
				"Latitude": "",
				"Longitude": "",
				"Address": "160-0023, SHINJUKU-KU, 6-6-2 NISHI-SHINJUKU, JAPAN",
				"City": "Tokyo",
				"Country": "JP",
				"PostalCode": "160-0023",
				"Description": "Hilton Tokyo is located in Shinjuku.",
				"Facilities": ["Pool", "WiFi ", "BathTub"]
			}
		])
	}

	#[test]
	fn test_convert_acme_hotel() {
		let raw: Vec<AcmeHotel> = serde_json::from_value(payload()).unwrap();
		let hotel = Hotel::from(raw[0].clone());

		assert_eq!(hotel.id, "iJhz");
		assert_eq!(hotel.destination_id, 5432);
		assert_eq!(hotel.location.lat, 1.264751);
		assert_eq!(hotel.location.country, "SG");
		assert_eq!(hotel.amenities.general.len(), 5);
		assert!(hotel.amenities.room.is_empty());
		assert!(hotel.images.rooms.is_empty());
		assert!(hotel.booking_conditions.is_empty());
	}

	#[test]
	fn test_missing_coordinates_default_to_zero() {
		let raw: Vec<AcmeHotel> = serde_json::from_value(payload()).unwrap();
		let null_coords = Hotel::from(raw[1].clone());
		let empty_coords = Hotel::from(raw[2].clone());

		assert_eq!(null_coords.location.lat, 0.0);
		assert_eq!(empty_coords.location.lng, 0.0);
	}

	#[test]
	fn test_string_coordinates_are_parsed() {
		let raw: Vec<AcmeHotel> = serde_json::from_value(json!([{
			"Id": "x", "DestinationId": 1, "Latitude": "35.6926", "Longitude": " 139.690965"
		}]))
		.unwrap();
		let hotel = Hotel::from(raw[0].clone());
		assert_eq!(hotel.location.lat, 35.6926);
		assert_eq!(hotel.location.lng, 139.690965);
	}

	#[tokio::test]
	async fn test_fetch_hotels_applies_filters() {
		let server = MockServer::start_async().await;
		let mock = server
			.mock_async(|when, then| {
				when.method(GET).path("/acme");
				then.status(200).json_body(payload());
			})
			.await;

		let adapter = AcmeAdapter::with_endpoint(server.url("/acme")).unwrap();
		assert_eq!(adapter.name(), "Acme");

		let all = adapter
			.fetch_hotels(&HotelQuery::all(), &CancellationToken::new())
			.await
			.unwrap();
		let ids: Vec<&str> = all.iter().map(|h| h.id.as_str()).collect();
		assert_eq!(ids, vec!["iJhz", "SjyX", "f8c9"]);

		let by_destination = adapter
			.fetch_hotels(&HotelQuery::by_destination(5432), &CancellationToken::new())
			.await
			.unwrap();
		assert_eq!(by_destination.len(), 2);

		let both = adapter
			.fetch_hotels(
				&HotelQuery::new(vec!["f8c9".to_string()], 5432),
				&CancellationToken::new(),
			)
			.await
			.unwrap();
		assert!(both.is_empty());

		mock.assert_hits_async(3).await;
	}
}
