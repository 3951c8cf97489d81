//! Error types for cache operations

use thiserror::Error;

/// Failure reported by a cache backend
#[derive(Debug, Error)]
pub enum StorageError {
	#[error("Cache backend unreachable: {message}")]
	Connection { message: String },
	#[error("Serialization error: {message}")]
	Serialization { message: String },
	#[error("Cache operation failed: {message}")]
	Operation { message: String },
}
