//! Shared test utilities for songbridge workspace
//!
//! Mock implementations of the two upstream services, so adapter and router
//! tests run without network access.
//!
//! # Mock Services
//!
//! - [`MockCatalogServer`] - Mock YouTube Music search endpoint
//! - [`MockTextGenServer`] - Mock KoboldCpp-style generation endpoint
//!
//! # Example
//!
//! ```rust,ignore
//! use songbridge_test_utils::{MockCatalogServer, SongFixture};
//!
//! #[tokio::test]
//! async fn test_with_mocks() {
//!     let catalog = MockCatalogServer::start().await;
//!     catalog.mock_songs(&[SongFixture::new("abc", "Song", &["Artist"])]).await;
//!
//!     // Use catalog.url() to configure your client
//! }
//! ```

mod catalog;
mod textgen;

pub use catalog::{search_response, MockCatalogServer, SongFixture};
pub use textgen::MockTextGenServer;
