//! Hotel Aggregator Server
//!
//! Main entry point for the aggregator server

use hotel_aggregator::HotelAggregatorBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	HotelAggregatorBuilder::new().start_server().await
}
