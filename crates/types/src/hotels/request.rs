//! Hotel query model and filter semantics

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::HotelQueryError;

/// Identifier and destination filter for a hotel lookup.
///
/// Both filters are optional and combine with AND: a hotel is selected when it
/// matches the destination (if one is set) and its id is listed (if any ids are
/// listed). An empty query selects every hotel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelQuery {
	pub hotel_ids: Vec<String>,
	pub destination_id: Option<i64>,
}

impl HotelQuery {
	/// Build a query from raw filters. A negative destination means "any destination".
	pub fn new(hotel_ids: Vec<String>, destination_id: i64) -> Self {
		Self {
			hotel_ids,
			destination_id: (destination_id >= 0).then_some(destination_id),
		}
	}

	/// Query with no constraints
	pub fn all() -> Self {
		Self::default()
	}

	pub fn by_ids<I, S>(ids: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			hotel_ids: ids.into_iter().map(Into::into).collect(),
			destination_id: None,
		}
	}

	pub fn by_destination(destination_id: i64) -> Self {
		Self::new(Vec::new(), destination_id)
	}

	/// Parse the boundary query parameters.
	///
	/// `hotels` is a comma-separated id list; blank entries are ignored.
	/// `destination` must be an integer when present.
	pub fn from_params(
		hotels: Option<&str>,
		destination: Option<&str>,
	) -> Result<Self, HotelQueryError> {
		let hotel_ids = hotels
			.map(|raw| {
				raw.split(',')
					.map(str::trim)
					.filter(|id| !id.is_empty())
					.map(str::to_string)
					.collect()
			})
			.unwrap_or_default();

		let destination_id = match destination.map(str::trim) {
			None | Some("") => -1,
			Some(raw) => raw
				.parse::<i64>()
				.map_err(|_| HotelQueryError::InvalidDestination {
					value: raw.to_string(),
				})?,
		};

		Ok(Self::new(hotel_ids, destination_id))
	}

	/// Whether a record with the given identity passes both filters
	pub fn matches(&self, hotel_id: &str, destination_id: i64) -> bool {
		let destination_ok = self
			.destination_id
			.map_or(true, |wanted| wanted == destination_id);
		let id_ok = self.hotel_ids.is_empty() || self.hotel_ids.iter().any(|id| id == hotel_id);

		destination_ok && id_ok
	}

	/// The cache is only consulted for pure id lookups
	pub fn is_cacheable(&self) -> bool {
		!self.hotel_ids.is_empty() && self.destination_id.is_none()
	}

	/// Requested ids with duplicates removed, first occurrence order kept
	pub fn unique_ids(&self) -> Vec<String> {
		let mut seen = HashSet::new();
		self.hotel_ids
			.iter()
			.filter(|id| seen.insert(id.as_str()))
			.cloned()
			.collect()
	}

	/// Same destination constraint, restricted to the given ids
	pub fn with_ids(&self, hotel_ids: Vec<String>) -> Self {
		Self {
			hotel_ids,
			destination_id: self.destination_id,
		}
	}
}
