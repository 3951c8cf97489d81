use std::sync::Arc;

use hotel_service::HotelServiceTrait;
use hotel_types::HotelCacheTrait;
use tokio_util::sync::CancellationToken;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub hotel_service: Arc<dyn HotelServiceTrait>,
	pub cache: Arc<dyn HotelCacheTrait>,
	/// Cancelled on shutdown; each request works under a child token
	pub shutdown: CancellationToken,
}

impl AppState {
	pub fn new(hotel_service: Arc<dyn HotelServiceTrait>, cache: Arc<dyn HotelCacheTrait>) -> Self {
		Self {
			hotel_service,
			cache,
			shutdown: CancellationToken::new(),
		}
	}

	pub fn with_shutdown(mut self, shutdown: CancellationToken) -> Self {
		self.shutdown = shutdown;
		self
	}
}
