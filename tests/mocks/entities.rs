//! Hotel fixtures and raw supplier payloads

#![allow(dead_code)]

use hotel_aggregator::{Hotel, Image};
use serde_json::{json, Value};

pub const BEACH_VILLAS_ID: &str = "iJhz";
pub const INTERCONTINENTAL_ID: &str = "SjyX";
pub const HILTON_ID: &str = "f8c9";
pub const SINGAPORE: i64 = 5432;
pub const TOKYO: i64 = 1122;

fn strings(values: &[&str]) -> Vec<String> {
	values.iter().map(|v| v.to_string()).collect()
}

/// Beach Villas as Acme describes it
pub fn acme_beach_villas() -> Hotel {
	let mut hotel = Hotel::new(BEACH_VILLAS_ID, SINGAPORE, "Beach Villas Singapore");
	hotel.location.lat = 1.264751;
	hotel.location.lng = 103.824006;
	hotel.location.address = " 8 Sentosa Gateway, Beach Villas ".to_string();
	hotel.location.city = "Singapore".to_string();
	hotel.location.country = "SG".to_string();
	hotel.description = "  This 5 star hotel is located on the coastline of Singapore.".to_string();
	hotel.amenities.general = strings(&["Pool", "BusinessCenter", "WiFi ", "DryCleaning", "Breakfast"]);
	hotel
}

/// Beach Villas as Patagonia describes it
pub fn patagonia_beach_villas() -> Hotel {
	let mut hotel = Hotel::new(BEACH_VILLAS_ID, SINGAPORE, "Beach Villas Singapore");
	hotel.location.lat = 1.26475;
	hotel.location.lng = 103.824;
	hotel.location.address = "8 Sentosa Gateway, Beach Villas, 098269".to_string();
	hotel.description = "Located at the western tip of Resorts World Sentosa.".to_string();
	hotel.amenities.room = strings(&["Aircon", "Tv", "Coffee machine", "Kettle", "Hair dryer", "Iron", "Tub"]);
	hotel.images.rooms = vec![
		Image::new("https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/2.jpg", "Double room"),
		Image::new("https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/4.jpg", "Bathroom"),
	];
	hotel.images.amenities = vec![Image::new(
		"https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/0.jpg",
		"RWS",
	)];
	hotel
}

/// Beach Villas as Paperflies describes it
pub fn paperflies_beach_villas() -> Hotel {
	let mut hotel = Hotel::new(BEACH_VILLAS_ID, SINGAPORE, "Beach Villas Singapore");
	hotel.location.address = "8 Sentosa Gateway, Beach Villas, 098269".to_string();
	hotel.location.country = "Singapore".to_string();
	hotel.description = "Surrounded by tropical gardens.".to_string();
	hotel.amenities.general = strings(&["outdoor pool", "indoor pool", "business center", "childcare"]);
	hotel.amenities.room = strings(&["tv", "coffee machine", "kettle", "hair dryer", "iron"]);
	hotel.images.rooms = vec![
		Image::new("https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/2.jpg", "Double room (paperflies)"),
		Image::new("https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/3.jpg", "Double room"),
	];
	hotel.images.site = vec![Image::new(
		"https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/1.jpg",
		"Front",
	)];
	hotel.booking_conditions = strings(&[
		"All children are welcome.",
		"Pets are not allowed.",
	]);
	hotel
}

pub fn acme_intercontinental() -> Hotel {
	let mut hotel = Hotel::new(INTERCONTINENTAL_ID, SINGAPORE, "InterContinental Singapore Robertson Quay");
	hotel.location.lat = 1.28624;
	hotel.location.lng = 103.848;
	hotel.location.city = "Singapore".to_string();
	hotel.amenities.general = strings(&["Pool", "WiFi "]);
	hotel
}

pub fn acme_hilton() -> Hotel {
	let mut hotel = Hotel::new(HILTON_ID, TOKYO, "Hilton Shinjuku");
	hotel.location.lat = 35.6926;
	hotel.location.lng = 139.690965;
	hotel.location.city = "Tokyo".to_string();
	hotel.location.country = "JP".to_string();
	hotel
}

pub fn patagonia_hilton() -> Hotel {
	let mut hotel = Hotel::new(HILTON_ID, TOKYO, "Hilton Tokyo Shinjuku");
	hotel.location.lat = 35.6926;
	hotel.location.lng = 139.690965;
	hotel.amenities.room = strings(&["Aircon", "Minibar"]);
	hotel
}

/// Raw Acme payload (PascalCase, coordinates may be strings or empty)
pub fn acme_payload() -> Value {
	json!([
		{
			"Id": BEACH_VILLAS_ID,
			"DestinationId": SINGAPORE,
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
			"Id": HILTON_ID,
			"DestinationId": TOKYO,
			"Name": "Hilton Shinjuku",
			"Latitude": "35.6926",
			"Longitude": "139.690965",
			"Address": "160-0023, SHINJUKU-KU, TOKYO, JAPAN",
			"City": "Tokyo",
			"Country": "JP",
			"PostalCode": "160-0023",
			"Description": "Hilton Tokyo is located in Shinjuku.",
			"Facilities": ["Pool", "WiFi ", "BusinessCenter"]
		}
	])
}

/// Raw Patagonia payload
pub fn patagonia_payload() -> Value {
	json!([
		{
			"id": BEACH_VILLAS_ID,
			"destination": SINGAPORE,
			"name": "Beach Villas Singapore",
			"lat": 1.26475,
			"lng": 103.824,
			"address": "8 Sentosa Gateway, Beach Villas, 098269",
			"info": "Located at the western tip of Resorts World Sentosa.",
			"amenities": ["Aircon", "Tv", "Coffee machine", "Kettle", "Hair dryer", "Iron", "Tub"],
			"images": {
				"rooms": [
					{"url": "https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/2.jpg", "description": "Double room"},
					{"url": "https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/4.jpg", "description": "Bathroom"}
				],
				"amenities": [
					{"url": "https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/0.jpg", "description": "RWS"}
				]
			}
		},
		{
			"id": HILTON_ID,
			"destination": TOKYO,
			"name": "Hilton Tokyo Shinjuku",
			"lat": 35.6926,
			"lng": 139.690965,
			"address": null,
			"info": null,
			"amenities": null,
			"images": {"rooms": [], "amenities": []}
		}
	])
}

/// Raw Paperflies payload
pub fn paperflies_payload() -> Value {
	json!([
		{
			"hotel_id": BEACH_VILLAS_ID,
			"destination_id": SINGAPORE,
			"hotel_name": "Beach Villas Singapore",
			"location": {
				"address": "8 Sentosa Gateway, Beach Villas, 098269",
				"country": "Singapore"
			},
			"details": "Surrounded by tropical gardens.",
			"amenities": {
				"general": ["outdoor pool", "indoor pool", "business center", "childcare"],
				"room": ["tv", "coffee machine", "kettle", "hair dryer", "iron"]
			},
			"images": {
				"rooms": [
					{"link": "https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/2.jpg", "caption": "Double room (paperflies)"},
					{"link": "https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/3.jpg", "caption": "Double room"}
				],
				"site": [
					{"link": "https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/1.jpg", "caption": "Front"}
				]
			},
			"booking_conditions": [
				"All children are welcome.",
				"Pets are not allowed."
			]
		}
	])
}
