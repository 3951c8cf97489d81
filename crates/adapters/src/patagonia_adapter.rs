//! Patagonia supplier adapter
//!
//! Patagonia reports room amenities only, uses `info` for the description and
//! may send `null` for address, info and amenities. It has no city, country or
//! booking conditions.

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
use crate::decode::{lenient_coordinate, null_as_default};

/// One hotel as returned by the Patagonia API
#[derive(Debug, Clone, Deserialize)]
pub struct PatagoniaHotel {
	pub id: String,
	pub destination: i64,
	#[serde(default, deserialize_with = "null_as_default")]
	pub name: String,
	#[serde(default, deserialize_with = "lenient_coordinate")]
	pub lat: Option<f64>,
	#[serde(default, deserialize_with = "lenient_coordinate")]
	pub lng: Option<f64>,
	#[serde(default)]
	pub address: Option<String>,
	#[serde(default)]
	pub info: Option<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub amenities: Vec<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub images: PatagoniaImages,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatagoniaImages {
	#[serde(default, deserialize_with = "null_as_default")]
	pub rooms: Vec<PatagoniaImage>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub site: Vec<PatagoniaImage>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub amenities: Vec<PatagoniaImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatagoniaImage {
	pub url: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub description: String,
}

fn convert_images(images: Vec<PatagoniaImage>) -> Vec<Image> {
	images
		.into_iter()
		.map(|image| Image::new(image.url, image.description))
		.collect()
}

impl From<PatagoniaHotel> for Hotel {
	fn from(raw: PatagoniaHotel) -> Self {
		Hotel {
			id: raw.id,
			destination_id: raw.destination,
			name: raw.name,
			location: Location {
				lat: raw.lat.unwrap_or_default(),
				lng: raw.lng.unwrap_or_default(),
				address: raw.address.unwrap_or_default(),
				..Default::default()
			},
			description: raw.info.unwrap_or_default(),
			amenities: Amenities {
				general: Vec::new(),
				room: raw.amenities,
			},
			images: Images {
				rooms: convert_images(raw.images.rooms),
				site: convert_images(raw.images.site),
				amenities: convert_images(raw.images.amenities),
			},
			booking_conditions: Vec::new(),
		}
	}
}

/// Adapter for the Patagonia hotel API
#[derive(Debug)]
pub struct PatagoniaAdapter {
	config: SupplierRuntimeConfig,
	client: Client,
}

impl PatagoniaAdapter {
	pub fn new(config: SupplierRuntimeConfig) -> AdapterResult<Self> {
		config.validate()?;
		let client = build_client(&config, "patagonia")?;
		Ok(Self { config, client })
	}

	/// Patagonia adapter with the default name and timeout
	pub fn with_endpoint(endpoint: impl Into<String>) -> AdapterResult<Self> {
		Self::new(SupplierRuntimeConfig::new(
			SupplierKind::Patagonia.display_name(),
			endpoint,
			DEFAULT_SUPPLIER_TIMEOUT_MS,
		))
	}
}

#[async_trait]
impl SupplierAdapter for PatagoniaAdapter {
	fn name(&self) -> &str {
		&self.config.name
	}

	async fn fetch_hotels(
		&self,
		query: &HotelQuery,
		cancel: &CancellationToken,
	) -> AdapterResult<Vec<Hotel>> {
		let raw: Vec<PatagoniaHotel> = fetch_json(&self.client, &self.config, cancel).await?;
		let total = raw.len();

		let hotels: Vec<Hotel> = raw
			.into_iter()
			.filter(|hotel| query.matches(&hotel.id, hotel.destination))
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
