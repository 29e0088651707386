//! Session state and login.

use super::{CLIENT_NAME, DownloadStationClient, build_http_client};
use crate::error::Result;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Authentication state of a client session
///
/// Transitions one way from `Unauthenticated` to `Authenticated` on a
/// successful login; only [`DownloadStationClient::invalidate`] goes back.
/// There is no expiry tracking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No successful login yet
    #[default]
    Unauthenticated,
    /// Logged in; the session cookie lives in the client's cookie jar
    Authenticated {
        /// When the login succeeded
        since: DateTime<Utc>,
    },
}

impl SessionState {
    /// Whether a login has succeeded
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }
}

impl DownloadStationClient {
    /// Current session state
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Log in unless the session is already authenticated
    ///
    /// Never fails: a failed login is logged as a warning and reported as
    /// `false`, leaving the session unauthenticated so the next call tries
    /// again.
    pub async fn authenticate(&mut self) -> bool {
        if let SessionState::Authenticated { since } = self.session {
            debug!(client = CLIENT_NAME, since = %since, "reusing session");
            return true;
        }

        match self.login().await {
            Ok(()) => {
                debug!(client = CLIENT_NAME, "login succeeded");
                self.session = SessionState::Authenticated { since: Utc::now() };
                true
            }
            Err(e) => {
                warn!(client = CLIENT_NAME, error = %e, "login failed");
                false
            }
        }
    }

    /// Forget the session and drop its cookies
    ///
    /// # Errors
    /// Returns error if a fresh HTTP client cannot be built
    pub fn invalidate(&mut self) -> Result<()> {
        self.http = build_http_client(&self.config)?;
        self.session = SessionState::Unauthenticated;
        Ok(())
    }

    async fn login(&self) -> Result<()> {
        let params = [
            ("api", "SYNO.API.Auth"),
            ("version", "2"),
            ("method", "login"),
            ("account", self.config.username.as_str()),
            ("passwd", self.config.password.as_str()),
            ("session", "DownloadStation"),
            ("format", "cookie"),
        ];

        let request = self.http.get(self.urls.login.clone()).query(&params);
        let body = self.execute(request).await?;
        self.check_response(&body, None).await
    }
}
