//! Writes the hotel aggregator OpenAPI document to disk without starting the server.
//!
//! ```bash
//! cargo run -p hotel-api --bin generate_openapi --features openapi -- docs/api/openapi.json
//! ```

#[cfg(feature = "openapi")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
	use std::path::PathBuf;

	use hotel_api::openapi::ApiDoc;
	use utoipa::OpenApi;

	let output = std::env::args()
		.nth(1)
		.map(PathBuf::from)
		.unwrap_or_else(|| PathBuf::from("docs/api/openapi.json"));

	if let Some(dir) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
		std::fs::create_dir_all(dir)?;
	}

	std::fs::write(&output, ApiDoc::openapi().to_pretty_json()?)?;
	println!("Hotel API document written to {}", output.display());
	Ok(())
}

#[cfg(not(feature = "openapi"))]
fn main() {
	eprintln!("generate_openapi needs the `openapi` feature");
	std::process::exit(1);
}
