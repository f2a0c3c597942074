//! YouTube Music catalog search client for songbridge
//!
//! Resolves a song title and artist name to a playable
//! `https://music.youtube.com/watch?v=<id>` URL:
//! - Song-filtered search against the YouTube Music web API
//! - First-match artist selection with fallback to the top result
//!
//! # Example
//!
//! ```rust,no_run
//! use songbridge_catalog_client::CatalogClient;
//! use songbridge_shared_config::CatalogConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CatalogClient::new(&CatalogConfig::default())?;
//!
//! let result = client.resolve("Never Stop Speedcore", "Vieze Asbak").await?;
//! println!("{} - {}: {}", result.artist, result.title, result.url);
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! - `CATALOG_URL`: catalog base URL (default `https://music.youtube.com`)
//! - `CATALOG_TIMEOUT`: request timeout in seconds (default 5)

mod client;
mod error;
mod models;
mod selection;

pub use client::CatalogClient;
pub use error::{CatalogError, CatalogResult};
pub use models::{CandidateTrack, CatalogArtist, PlayableResult};
pub use selection::{select_candidate, watch_url, WATCH_URL_PREFIX};
