//! Synology Download Station client.
//!
//! Sends torrents and NZBs, or links to them, to Download Station through its
//! web API. The client is split by concern:
//! - [`auth`] - session state and the cookie-based login
//! - [`submit`] - building and sending task-create requests
//! - [`response`] - envelope parsing, the destination retry, error reporting
//! - [`error_table`] - numeric error codes and their messages
//!
//! ```no_run
//! use dlproxy::config::DownloadStationConfig;
//! use dlproxy::download_station::DownloadStationClient;
//! use dlproxy::types::{Job, JobKind};
//!
//! # async fn example() -> dlproxy::Result<()> {
//! let mut client = DownloadStationClient::new(DownloadStationConfig {
//!     host: "http://nas.local:5000/".into(),
//!     username: "admin".into(),
//!     password: "secret".into(),
//!     nzb_path: Some("downloads/nzb".into()),
//!     ..Default::default()
//! })?;
//!
//! let job = Job::from_url("Show.S01E01", JobKind::Nzb, "https://indexer.example/get/123.nzb");
//! if !client.submit(&job).await {
//!     eprintln!("submission failed, see logs");
//! }
//! # Ok(())
//! # }
//! ```

mod auth;
mod error_table;
mod response;
mod submit;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;

pub use auth::SessionState;
pub use error_table::{ApiMethod, ErrorTable};

use crate::config::DownloadStationConfig;
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;
use url::Url;

/// Name used in log lines
pub const CLIENT_NAME: &str = "DownloadStation";

/// Leading `/volumeN/` segment of an absolute NAS path
#[allow(clippy::expect_used)]
pub(crate) static VOLUME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/volume\d+/").expect("volume prefix pattern is valid"));

/// Resolved endpoint URLs
#[derive(Clone, Debug)]
pub(crate) struct ApiUrls {
    pub(crate) login: Url,
    pub(crate) task: Url,
}

impl ApiUrls {
    fn new(host: &str) -> Result<Self> {
        let base = Url::parse(host)?;
        Ok(Self {
            login: base.join("webapi/auth.cgi")?,
            task: base.join("webapi/DownloadStation/task.cgi")?,
        })
    }
}

/// Download Station API client
///
/// Mutating operations take `&mut self`: the session flag and cookie jar
/// belong to one caller at a time.
#[derive(Debug)]
pub struct DownloadStationClient {
    pub(crate) config: DownloadStationConfig,
    pub(crate) http: reqwest::Client,
    pub(crate) urls: ApiUrls,
    pub(crate) session: SessionState,
    pub(crate) errors: ErrorTable,
}

impl DownloadStationClient {
    /// Create a client from configuration
    ///
    /// No request is made until the first [`authenticate`](Self::authenticate)
    /// or [`submit`](Self::submit).
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the host is missing or not an http(s) URL
    pub fn new(config: DownloadStationConfig) -> Result<Self> {
        config.validate()?;
        let urls = ApiUrls::new(&config.host)?;
        let http = build_http_client(&config)?;

        Ok(Self {
            config,
            http,
            urls,
            session: SessionState::Unauthenticated,
            errors: ErrorTable::new(),
        })
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &DownloadStationConfig {
        &self.config
    }

    /// Login endpoint
    pub fn login_url(&self) -> &Url {
        &self.urls.login
    }

    /// Task endpoint
    pub fn task_url(&self) -> &Url {
        &self.urls.task
    }

    /// Send a request, returning the body of a 2xx response
    ///
    /// Transport failures are logged here so every caller reports them the
    /// same way.
    pub(crate) async fn execute(&self, request: reqwest::RequestBuilder) -> Result<String> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(client = CLIENT_NAME, error = %e, "request failed");
                return Err(Error::Network(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let url = response.url().to_string();
            warn!(client = CLIENT_NAME, status = status.as_u16(), url = %url, "unexpected HTTP status");
            return Err(Error::Http {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.text().await?)
    }
}

/// HTTP client with a cookie jar, so the login cookie rides along on task requests
pub(crate) fn build_http_client(config: &DownloadStationConfig) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .cookie_store(true)
        .timeout(config.timeout)
        .danger_accept_invalid_certs(!config.verify_certificates)
        .build()?)
}
