//! # dlproxy
//!
//! Two small, independent HTTP clients:
//!
//! - [`studio`] - typed proxies for Studio REST resources, starting with the
//!   execution context of a flow execution. Resources follow a
//!   list / context / instance layout built on [`rest::Solution`] keys.
//! - [`download_station`] - a Synology Download Station client that logs in
//!   once per session and submits torrent or NZB jobs, by link or as an
//!   uploaded file.
//!
//! ## Quick Start
//!
//! ```no_run
//! use dlproxy::{Config, DownloadStationClient};
//! use dlproxy::types::{Job, JobKind};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_json_file("dlproxy.json")?;
//!     let mut client = DownloadStationClient::new(config.download_station)?;
//!
//!     let job = Job::from_url("Show.S01E01", JobKind::Torrent, "magnet:?xt=urn:btih:abc");
//!     println!("submitted: {}", client.submit(&job).await);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Common interface for download clients
pub mod download_client;
/// Synology Download Station client
pub mod download_station;
/// Error types
pub mod error;
/// REST transport and path solutions
pub mod rest;
/// Studio REST resources
pub mod studio;
/// Job descriptor types
pub mod types;

pub use config::{Config, DownloadStationConfig, StudioConfig};
pub use download_client::DownloadClient;
pub use download_station::{DownloadStationClient, SessionState};
pub use error::{Error, ErrorKind, Result};
pub use studio::Studio;
