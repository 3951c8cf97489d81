//! Paperflies supplier adapter
//!
//! Paperflies provides categorised amenities, captioned room and site images
//! and booking conditions, but no coordinates or city.

use async_trait::async_trait;
use hotel_types::{
	AdapterResult, Amenities, Hotel, HotelQuery, Image, Images, Location, SupplierAdapter,
	SupplierKind, SupplierRuntimeConfig, DEFAULT_SUPPLIER_TIMEOUT_MS,
};
use reqwest::Client;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::client::{build_client, fetch_json};
use crate::decode::null_as_default;

/// One hotel as returned by the Paperflies API
#[derive(Debug, Clone, Deserialize)]
pub struct PaperfliesHotel {
	pub hotel_id: String,
	pub destination_id: i64,
	#[serde(default, deserialize_with = "null_as_default")]
	pub hotel_name: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub location: PaperfliesLocation,
	#[serde(default, deserialize_with = "null_as_default")]
	pub details: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub amenities: PaperfliesAmenities,
	#[serde(default, deserialize_with = "null_as_default")]
	pub images: PaperfliesImages,
	#[serde(default, deserialize_with = "null_as_default")]
	pub booking_conditions: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaperfliesLocation {
	#[serde(default, deserialize_with = "null_as_default")]
	pub address: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub country: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaperfliesAmenities {
	#[serde(default, deserialize_with = "null_as_default")]
	pub general: Vec<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub room: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaperfliesImages {
	#[serde(default, deserialize_with = "null_as_default")]
	pub rooms: Vec<PaperfliesImage>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub site: Vec<PaperfliesImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaperfliesImage {
	pub link: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub caption: String,
}

fn convert_images(images: Vec<PaperfliesImage>) -> Vec<Image> {
	images
		.into_iter()
		.map(|image| Image::new(image.link, image.caption))
		.collect()
}

impl From<PaperfliesHotel> for Hotel {
	fn from(raw: PaperfliesHotel) -> Self {
		Hotel {
			id: raw.hotel_id,
			destination_id: raw.destination_id,
			name: raw.hotel_name,
			location: Location {
				address: raw.location.address,
				country: raw.location.country,
				..Default::default()
			},
			description: raw.details,
			amenities: Amenities {
				general: raw.amenities.general,
				room: raw.amenities.room,
			},
			images: Images {
				rooms: convert_images(raw.images.rooms),
				site: convert_images(raw.images.site),
				amenities: Vec::new(),
			},
			booking_conditions: raw.booking_conditions,
		}
	}
}

/// Adapter for the Paperflies hotel API
#[derive(Debug)]
pub struct PaperfliesAdapter {
	config: SupplierRuntimeConfig,
	client: Client,
}

impl PaperfliesAdapter {
	pub fn new(config: SupplierRuntimeConfig) -> AdapterResult<Self> {
		config.validate()?;
		let client = build_client(&config, "paperflies")?;
		Ok(Self { config, client })
	}

	/// Paperflies adapter with the default name and timeout
	pub fn with_endpoint(endpoint: impl Into<String>) -> AdapterResult<Self> {
		Self::new(SupplierRuntimeConfig::new(
			SupplierKind::Paperflies.display_name(),
			endpoint,
			DEFAULT_SUPPLIER_TIMEOUT_MS,
		))
	}
}

#[async_trait]
impl SupplierAdapter for PaperfliesAdapter {
	fn name(&self) -> &str {
		&self.config.name
	}

	async fn fetch_hotels(
		&self,
		query: &HotelQuery,
		cancel: &CancellationToken,
	) -> AdapterResult<Vec<Hotel>> {
		let raw: Vec<PaperfliesHotel> = fetch_json(&self.client, &self.config, cancel).await?;
		let total = raw.len();

		let hotels: Vec<Hotel> = raw
			.into_iter()
			.filter(|hotel| query.matches(&hotel.hotel_id, hotel.destination_id))
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
				"hotel_id": "iJhz",
				"destination_id": 5432,
				"hotel_name": "Beach Villas Singapore",
				"location": {
					"address": "8 Sentosa Gateway, Beach Villas, 098269",
					"country": "Singapore"
				},
				"details": "Surrounded by tropical gardens, these upscale villas feature plunge pools.",
				"amenities": {
					"general": ["outdoor pool", "indoor pool", "business center", "childcare"],
					"room": ["tv", "coffee machine", "kettle", "hair dryer", "iron"]
				},
				"images": {
					"rooms": [
						{"link": "https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/2.jpg", "caption": "Double room"}
					],
					"site": [
						{"link": "https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/1.jpg", "caption": "Front"}
					]
				},
				"booking_conditions": [
					"All children are welcome.",
					"Pets are not allowed."
				]
			},
			{
				"hotel_id": "SjyX",
				"destination_id": 5432,
				"hotel_name": "InterContinental",
				"location": null,
				"details": null,
				"amenities": {"general": null, "room": ["aircon"]},
				"images": null,
				"booking_conditions": null
			}
		])
	}

	#[test]
	fn test_convert_paperflies_hotel() {
		let raw: Vec<PaperfliesHotel> = serde_json::from_value(payload()).unwrap();
		let hotel = Hotel::from(raw[0].clone());

		assert_eq!(hotel.id, "iJhz");
		assert_eq!(hotel.location.country, "Singapore");
		assert_eq!(hotel.location.lat, 0.0);
		assert_eq!(hotel.amenities.general.len(), 4);
		assert_eq!(hotel.amenities.room.len(), 5);
		assert_eq!(hotel.images.site[0].description, "Front");
		assert!(hotel.images.amenities.is_empty());
		assert_eq!(hotel.booking_conditions.len(), 2);
	}

	#[test]
	fn test_null_sections_become_empty() {
		let raw: Vec<PaperfliesHotel> = serde_json::from_value(payload()).unwrap();
		let hotel = Hotel::from(raw[1].clone());

		assert_eq!(hotel.location.address, "");
		assert_eq!(hotel.description, "");
		assert!(hotel.amenities.general.is_empty());
		assert_eq!(hotel.amenities.room, vec!["aircon".to_string()]);
		assert!(hotel.images.rooms.is_empty());
		assert!(hotel.booking_conditions.is_empty());
	}

	#[tokio::test]
	async fn test_fetch_hotels_surfaces_server_errors() {
		let server = MockServer::start_async().await;
		server
			.mock_async(|when, then| {
				when.method(GET).path("/paperflies");
				then.status(500);
			})
			.await;

		let adapter = PaperfliesAdapter::with_endpoint(server.url("/paperflies")).unwrap();
		let err = adapter
			.fetch_hotels(&HotelQuery::all(), &CancellationToken::new())
			.await
			.unwrap_err();

		assert_eq!(err.status_code(), Some(500));
	}
}
