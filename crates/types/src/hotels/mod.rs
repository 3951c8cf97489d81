//! Canonical hotel record
//!
//! A `Hotel` is the reconciled, cross-supplier representation of one listing.
//! Supplier adapters map their own payloads into this shape; the service layer
//! cleans, merges and caches it.

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

pub mod errors;
pub mod request;

pub use errors::HotelQueryError;
pub use request::HotelQuery;

/// Canonical hotel record, shaped after the public API response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Hotel {
	/// Stable identifier, used as merge key and cache key
	pub id: String,

	/// Destination the hotel belongs to (not unique)
	pub destination_id: i64,

	pub name: String,

	pub location: Location,

	pub description: String,

	pub amenities: Amenities,

	pub images: Images,

	/// Free-form booking conditions, kept in supplier order
	pub booking_conditions: Vec<String>,
}

/// Geographic and postal location of a hotel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Location {
	/// Latitude, `0.0` when the supplier does not provide one
	pub lat: f64,
	/// Longitude, `0.0` when the supplier does not provide one
	pub lng: f64,
	pub address: String,
	pub city: String,
	pub country: String,
}

/// Amenities split by category.
///
/// Each category is semantically a set; the order of entries carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Amenities {
	pub general: Vec<String>,
	pub room: Vec<String>,
}

/// Images divided into categories
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Images {
	pub rooms: Vec<Image>,
	pub site: Vec<Image>,
	pub amenities: Vec<Image>,
}

/// A single image; `link` is unique within its category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Image {
	pub link: String,
	pub description: String,
}

impl Hotel {
	/// Create a hotel with only its identity fields set
	pub fn new(id: impl Into<String>, destination_id: i64, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			destination_id,
			name: name.into(),
			..Default::default()
		}
	}
}

impl Image {
	pub fn new(link: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			link: link.into(),
			description: description.into(),
		}
	}
}
