//! Error types for hotel queries

use thiserror::Error;

/// Caller-input errors raised while building a `HotelQuery`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HotelQueryError {
	#[error("Invalid destination ID: {value} (must be an integer)")]
	InvalidDestination { value: String },
}
