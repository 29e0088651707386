//! Configuration types for dlproxy

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Top-level configuration holding one section per client
///
/// Either section may be omitted from a config file; omitted sections take
/// their defaults.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Studio REST API settings
    #[serde(default)]
    pub studio: StudioConfig,

    /// Download Station settings
    #[serde(default)]
    pub download_station: DownloadStationConfig,
}

impl Config {
    /// Parse a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }
}

/// Studio REST API configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StudioConfig {
    /// API base URL including the version segment (default: "https://studio.twilio.com/v1")
    #[serde(default = "default_studio_base_url")]
    pub base_url: String,

    /// Account SID used as the basic-auth username
    #[serde(default)]
    pub account_sid: String,

    /// Auth token used as the basic-auth password
    #[serde(default)]
    pub auth_token: String,

    /// Request timeout (default: 30 seconds)
    #[serde(default = "default_timeout", with = "duration_serde")]
    pub timeout: Duration,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            base_url: default_studio_base_url(),
            account_sid: String::new(),
            auth_token: String::new(),
            timeout: default_timeout(),
        }
    }
}

/// Download Station configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DownloadStationConfig {
    /// Base URL of the NAS web interface (e.g. "http://nas.local:5000/")
    #[serde(default)]
    pub host: String,

    /// Account name used to log in
    #[serde(default)]
    pub username: String,

    /// Account password
    #[serde(default)]
    pub password: String,

    /// Default destination for torrent jobs, relative to the NAS shared folders
    #[serde(default)]
    pub torrent_path: Option<String>,

    /// Default destination for NZB jobs
    #[serde(default)]
    pub nzb_path: Option<String>,

    /// Request timeout (default: 30 seconds)
    #[serde(default = "default_timeout", with = "duration_serde")]
    pub timeout: Duration,

    /// Verify the NAS TLS certificate (default: false)
    #[serde(default)]
    pub verify_certificates: bool,
}

impl Default for DownloadStationConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            username: String::new(),
            password: String::new(),
            torrent_path: None,
            nzb_path: None,
            timeout: default_timeout(),
            verify_certificates: false,
        }
    }
}

impl DownloadStationConfig {
    /// Look up an option by name
    ///
    /// Recognised names are `host`, `username`, `password`, `torrent_path`
    /// and `nzb_path`. Unset and empty options return `None`.
    pub fn option(&self, key: &str) -> Option<&str> {
        let value = match key {
            "host" => Some(self.host.as_str()),
            "username" => Some(self.username.as_str()),
            "password" => Some(self.password.as_str()),
            "torrent_path" => self.torrent_path.as_deref(),
            "nzb_path" => self.nzb_path.as_deref(),
            _ => None,
        };
        value.filter(|v| !v.is_empty())
    }

    /// Check that the host is an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(Error::config("host is required", "host"));
        }
        let url = url::Url::parse(&self.host)
            .map_err(|e| Error::config(format!("invalid host '{}': {}", self.host, e), "host"))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(
                format!("unsupported scheme '{}' in host", url.scheme()),
                "host",
            ));
        }
        Ok(())
    }
}

fn default_studio_base_url() -> String {
    "https://studio.twilio.com/v1".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

// Duration serialization helper
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_fill_missing_sections() {
        let config = Config::from_json_str("{}").expect("parse failed");

        assert_eq!(config.studio.base_url, "https://studio.twilio.com/v1");
        assert_eq!(config.studio.timeout, Duration::from_secs(30));
        assert_eq!(config.download_station.timeout, Duration::from_secs(30));
        assert!(!config.download_station.verify_certificates);
        assert!(config.download_station.torrent_path.is_none());
    }

    #[test]
    fn timeout_is_read_as_seconds() {
        let config = Config::from_json_str(
            r#"{"download_station": {"host": "http://nas:5000/", "timeout": 5}}"#,
        )
        .unwrap();

        assert_eq!(config.download_station.timeout, Duration::from_secs(5));
        assert_eq!(config.download_station.host, "http://nas:5000/");
    }

    #[test]
    fn option_accessor_maps_names_to_fields() {
        let config = DownloadStationConfig {
            host: "http://nas:5000/".into(),
            username: "admin".into(),
            password: "secret".into(),
            torrent_path: Some("/volume1/torrents".into()),
            nzb_path: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(config.option("host"), Some("http://nas:5000/"));
        assert_eq!(config.option("username"), Some("admin"));
        assert_eq!(config.option("password"), Some("secret"));
        assert_eq!(config.option("torrent_path"), Some("/volume1/torrents"));
        // Empty strings count as unset
        assert_eq!(config.option("nzb_path"), None);
        assert_eq!(config.option("torrentdata_path"), None);
    }

    #[test]
    fn validate_rejects_missing_and_relative_hosts() {
        let mut config = DownloadStationConfig::default();
        assert!(matches!(
            config.validate(),
            Err(Error::Config { key: Some(ref k), .. }) if k == "host"
        ));

        config.host = "nas.local:5000".into();
        assert!(config.validate().is_err());

        config.host = "ftp://nas.local/".into();
        assert!(config.validate().is_err());

        config.host = "https://nas.local:5001/".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_json_file_reads_both_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "studio": {{"account_sid": "ACxxx", "auth_token": "token"}},
                "download_station": {{"host": "http://nas:5000/", "nzb_path": "downloads/nzb"}}
            }}"#
        )
        .unwrap();

        let config = Config::from_json_file(file.path()).unwrap();

        assert_eq!(config.studio.account_sid, "ACxxx");
        assert_eq!(config.studio.auth_token, "token");
        assert_eq!(config.download_station.option("nzb_path"), Some("downloads/nzb"));
    }

    #[test]
    fn from_json_file_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_json_file(dir.path().join("absent.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
