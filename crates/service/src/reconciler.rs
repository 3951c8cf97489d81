//! Cross-supplier reconciliation of hotel records
//!
//! Records sharing an `id` are folded pairwise with [`merge_hotels`]. The merge
//! is not commutative, so [`reconcile`] fixes the fold order: batches are
//! sorted by supplier name, then records are folded in source order.

use std::collections::{BTreeMap, HashMap, HashSet};

use hotel_types::{Amenities, Hotel, Image, Images, Location};
use thiserror::Error;
use tracing::{debug, warn};

use crate::fetcher::SupplierBatch;

/// Internal failures of the reconciliation path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
	#[error("Duplicate hotel identifier after reconciliation: {id}")]
	DuplicateIdentifier { id: String },
}

pub type ReconcileResult<T> = Result<T, ReconcileError>;

/// Merge the supplier batches into one record per hotel id, ordered by id
pub fn reconcile(mut batches: Vec<SupplierBatch>) -> ReconcileResult<Vec<Hotel>> {
	batches.sort_by(|a, b| a.supplier.cmp(&b.supplier));

	let mut grouped: BTreeMap<String, Hotel> = BTreeMap::new();
	let mut folds = 0usize;

	for batch in batches {
		for hotel in batch.hotels {
			if hotel.id.is_empty() {
				warn!(
					"Skipping hotel without id from supplier {} (name: {:?})",
					batch.supplier, hotel.name
				);
				continue;
			}

			match grouped.get_mut(&hotel.id) {
				Some(existing) => {
					let current = std::mem::take(existing);
					*existing = merge_hotels(current, hotel);
					folds += 1;
				},
				None => {
					grouped.insert(hotel.id.clone(), dedupe_hotel(hotel));
				},
			}
		}
	}

	debug!(
		"Reconciled {} hotels ({} duplicate records folded)",
		grouped.len(),
		folds
	);

	let hotels: Vec<Hotel> = grouped.into_values().collect();
	ensure_unique_ids(&hotels)?;
	Ok(hotels)
}

/// Check that no two records share an id
pub fn ensure_unique_ids(hotels: &[Hotel]) -> ReconcileResult<()> {
	let mut seen = HashSet::with_capacity(hotels.len());
	for hotel in hotels {
		if !seen.insert(hotel.id.as_str()) {
			return Err(ReconcileError::DuplicateIdentifier {
				id: hotel.id.clone(),
			});
		}
	}
	Ok(())
}

/// Enforce the per-category uniqueness rules on a record seen only once
fn dedupe_hotel(hotel: Hotel) -> Hotel {
	let (general, room) = merge_amenity_categories(hotel.amenities, Amenities::default());

	Hotel {
		amenities: Amenities { general, room },
		images: Images {
			rooms: merge_images(hotel.images.rooms, Vec::new()),
			site: merge_images(hotel.images.site, Vec::new()),
			amenities: merge_images(hotel.images.amenities, Vec::new()),
		},
		..hotel
	}
}

/// Fold `incoming` into `existing`.
///
/// Identity (`id`, `destination_id`) always comes from `existing`.
pub fn merge_hotels(existing: Hotel, incoming: Hotel) -> Hotel {
	let (general, room) = merge_amenity_categories(existing.amenities, incoming.amenities);

	Hotel {
		id: existing.id,
		destination_id: existing.destination_id,
		name: longer(existing.name, incoming.name),
		location: merge_location(existing.location, incoming.location),
		description: format!("{} {}", existing.description, incoming.description),
		amenities: Amenities { general, room },
		images: Images {
			rooms: merge_images(existing.images.rooms, incoming.images.rooms),
			site: merge_images(existing.images.site, incoming.images.site),
			amenities: merge_images(existing.images.amenities, incoming.images.amenities),
		},
		booking_conditions: existing
			.booking_conditions
			.into_iter()
			.chain(incoming.booking_conditions)
			.collect(),
	}
}

fn merge_location(existing: Location, incoming: Location) -> Location {
	Location {
		lat: more_precise(existing.lat, incoming.lat),
		lng: more_precise(existing.lng, incoming.lng),
		address: longer(existing.address, incoming.address),
		city: longer(existing.city, incoming.city),
		country: longer(existing.country, incoming.country),
	}
}

/// Longer string by character count; ties keep `existing`
fn longer(existing: String, incoming: String) -> String {
	if incoming.chars().count() > existing.chars().count() {
		incoming
	} else {
		existing
	}
}

/// Value with more decimal digits; ties keep `existing`
fn more_precise(existing: f64, incoming: f64) -> f64 {
	if decimal_places(incoming) > decimal_places(existing) {
		incoming
	} else {
		existing
	}
}

/// Digits after the decimal point in the shortest round-trip rendering,
/// so `1.50` and `1.5` both count 1.
pub fn decimal_places(value: f64) -> usize {
	let rendered = value.to_string();
	rendered
		.split_once('.')
		.map_or(0, |(_, fraction)| fraction.len())
}

/// Comparison key for amenities: lowercase with whitespace removed
pub fn normalize_amenity(amenity: &str) -> String {
	amenity
		.chars()
		.filter(|c| !c.is_whitespace())
		.flat_map(char::to_lowercase)
		.collect()
}

/// Union both categories, then drop general amenities already listed as room
fn merge_amenity_categories(existing: Amenities, incoming: Amenities) -> (Vec<String>, Vec<String>) {
	let room = union_amenities(existing.room, incoming.room);
	let room_keys: HashSet<String> = room.iter().map(|a| normalize_amenity(a)).collect();

	let mut general = union_amenities(existing.general, incoming.general);
	general.retain(|amenity| !room_keys.contains(&normalize_amenity(amenity)));

	(general, room)
}

/// Union by normalized key. On collision the spaced variant wins, otherwise
/// the entry seen first is kept in its original position.
fn union_amenities(existing: Vec<String>, incoming: Vec<String>) -> Vec<String> {
	let mut merged: Vec<String> = Vec::with_capacity(existing.len() + incoming.len());
	let mut positions: HashMap<String, usize> = HashMap::new();

	for amenity in existing.into_iter().chain(incoming) {
		let key = normalize_amenity(&amenity);
		match positions.get(&key) {
			Some(&index) => {
				if !merged[index].contains(' ') && amenity.contains(' ') {
					merged[index] = amenity;
				}
			},
			None => {
				positions.insert(key, merged.len());
				merged.push(amenity);
			},
		}
	}

	merged
}

/// Union by link; an existing image is never replaced
fn merge_images(existing: Vec<Image>, incoming: Vec<Image>) -> Vec<Image> {
	let mut links: HashSet<String> = HashSet::with_capacity(existing.len() + incoming.len());
	let mut merged = Vec::with_capacity(existing.len() + incoming.len());

	for image in existing.into_iter().chain(incoming) {
		if links.insert(image.link.clone()) {
			merged.push(image);
		}
	}

	merged
}
