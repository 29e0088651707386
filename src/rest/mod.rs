//! Minimal REST transport shared by typed resource proxies.
//!
//! [`RestClient`] plays the role of an API version: it knows the base URL and
//! credentials, and turns a relative resource URI into a JSON payload.
//! Resource modules (see [`crate::studio`]) build on top of it.

mod solution;

pub use solution::{Solution, render_template};

use crate::config::StudioConfig;
use crate::error::{Error, Result};
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

/// User agent sent with every REST request
const USER_AGENT: &str = concat!("dlproxy/", env!("CARGO_PKG_VERSION"));

/// HTTP transport for one versioned REST API (cheap to clone)
#[derive(Clone, Debug)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    account_sid: String,
    auth_token: String,
}

impl RestClient {
    /// Create a transport from configuration
    ///
    /// # Errors
    /// Returns error if the base URL is not absolute or the HTTP client cannot be built
    pub fn new(config: &StudioConfig) -> Result<Self> {
        url::Url::parse(&config.base_url)
            .map_err(|e| Error::config(format!("invalid base_url: {}", e), "base_url"))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a resource URI such as `/Flows/FW1/Executions/EX1/Context`
    pub fn absolute_url(&self, uri: &str) -> String {
        format!("{}/{}", self.base_url, uri.trim_start_matches('/'))
    }

    /// Request a resource and return its JSON body
    ///
    /// # Errors
    /// - [`Error::Network`] when the request could not be sent
    /// - [`Error::Remote`] for any non-success status
    /// - [`Error::MalformedResponse`] when the body is not JSON
    pub async fn fetch(&self, method: Method, uri: &str) -> Result<Value> {
        let url = self.absolute_url(uri);
        debug!(%method, url = %url, "sending REST request");

        let mut request = self
            .http
            .request(method, &url)
            .header(reqwest::header::ACCEPT, "application/json");
        if !self.account_sid.is_empty() {
            request = request.basic_auth(&self.account_sid, Some(&self.auth_token));
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(remote_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| Error::MalformedResponse(format!("{}: {}", url, e)))
    }
}

/// Build an [`Error::Remote`] from an error body, reading `code` and `message` if present
fn remote_error(status: u16, body: &str) -> Error {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let code = parsed
        .as_ref()
        .and_then(|v| v.get("code"))
        .and_then(Value::as_i64);
    let message = parsed
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP error {}", status));

    Error::Remote {
        status,
        code,
        message,
    }
}
