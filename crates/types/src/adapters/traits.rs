//! Core adapter trait for supplier implementations

use async_trait::async_trait;
use std::fmt::Debug;
use tokio_util::sync::CancellationToken;

use super::AdapterResult;
use crate::{Hotel, HotelQuery};

/// Interface every hotel supplier adapter implements.
///
/// An adapter fetches the supplier's listings, keeps those selected by
/// `HotelQuery::matches` and maps them into canonical `Hotel` records in
/// source order. Implementations should stop work and return
/// `AdapterError::Cancelled` once `cancel` fires.
#[async_trait]
pub trait SupplierAdapter: Send + Sync + Debug {
	/// Supplier name, unique within a registry
	fn name(&self) -> &str;

	/// Fetch the supplier's hotels matching `query`
	async fn fetch_hotels(
		&self,
		query: &HotelQuery,
		cancel: &CancellationToken,
	) -> AdapterResult<Vec<Hotel>>;
}
