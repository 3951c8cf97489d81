//! Centralized mocks and fixtures for testing
//!
//! Hotel fixtures, supplier payloads, mock supplier sets and a spawnable test
//! server shared across the integration tests.

pub mod adapters;
pub mod entities;
pub mod test_server;

#[allow(unused_imports)]
pub use test_server::TestServer;
