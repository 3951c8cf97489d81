//! Post-fetch normalization of canonical hotel records

use hotel_types::Hotel;

/// Normalize one record before it takes part in a merge.
///
/// Trims every free-text field and lower-cases amenities. Image links are
/// left untouched since they are merge keys.
pub fn clean_hotel(mut hotel: Hotel) -> Hotel {
	trim_in_place(&mut hotel.name);
	trim_in_place(&mut hotel.description);
	trim_in_place(&mut hotel.location.address);
	trim_in_place(&mut hotel.location.city);
	trim_in_place(&mut hotel.location.country);

	hotel.amenities.general = clean_amenities(hotel.amenities.general);
	hotel.amenities.room = clean_amenities(hotel.amenities.room);

	hotel.booking_conditions.iter_mut().for_each(trim_in_place);

	for images in [
		&mut hotel.images.rooms,
		&mut hotel.images.site,
		&mut hotel.images.amenities,
	] {
		images
			.iter_mut()
			.for_each(|image| trim_in_place(&mut image.description));
	}

	hotel
}

/// Clean a supplier batch, keeping source order
pub fn clean_hotels(hotels: Vec<Hotel>) -> Vec<Hotel> {
	hotels.into_iter().map(clean_hotel).collect()
}

fn clean_amenities(amenities: Vec<String>) -> Vec<String> {
	amenities
		.into_iter()
		.map(|amenity| amenity.trim().to_lowercase())
		.collect()
}

fn trim_in_place(value: &mut String) {
	let trimmed = value.trim();
	if trimmed.len() != value.len() {
		*value = trimmed.to_string();
	}
}
