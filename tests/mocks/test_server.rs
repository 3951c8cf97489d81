//! Test server for integration tests

#![allow(dead_code)]

use axum::Router;
use hotel_aggregator::{AppState, HotelAggregatorBuilder, Settings};
use tokio::task::JoinHandle;

use super::adapters::SupplierSet;

/// Test server instance bound to an ephemeral port
pub struct TestServer {
	pub base_url: String,
	pub state: AppState,
	pub handle: JoinHandle<()>,
}

impl TestServer {
	/// Spawn a server in front of the given mock suppliers
	pub async fn spawn_with_suppliers(
		suppliers: &SupplierSet,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let mut builder = HotelAggregatorBuilder::default().with_settings(Settings::default());
		for adapter in suppliers.all() {
			builder = builder.with_adapter(Box::new(adapter));
		}

		let (app, state) = builder.start().await?;
		Self::spawn_server_with_app(app, state).await
	}

	/// Spawn a server built purely from settings (real HTTP adapters)
	pub async fn spawn_from_settings(settings: Settings) -> Result<Self, Box<dyn std::error::Error>> {
		let (app, state) = HotelAggregatorBuilder::from_settings(settings).start().await?;
		Self::spawn_server_with_app(app, state).await
	}

	async fn spawn_server_with_app(
		app: Router,
		state: AppState,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let shutdown = state.shutdown.clone();
		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app)
				.with_graceful_shutdown(async move { shutdown.cancelled().await })
				.await;
		});

		Ok(Self {
			base_url,
			state,
			handle,
		})
	}

	pub fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}

	pub fn abort(self) {
		self.state.shutdown.cancel();
		self.handle.abort();
	}
}
