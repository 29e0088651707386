//! Job descriptor types shared by download clients

use serde::{Deserialize, Serialize};

/// Kind of download a job describes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobKind {
    /// BitTorrent download (magnet link, .torrent URL or .torrent file)
    Torrent,
    /// Usenet download (NZB URL or NZB file)
    Nzb,
}

impl JobKind {
    /// Lowercase name used in option keys and file extensions
    pub fn as_str(&self) -> &'static str {
        match self {
            JobKind::Torrent => "torrent",
            JobKind::Nzb => "nzb",
        }
    }

    /// Name of the configuration option holding the default destination
    pub fn path_option(&self) -> String {
        format!("{}_path", self.as_str())
    }

    /// MIME type of an uploaded payload of this kind
    pub fn mime_type(&self) -> &'static str {
        match self {
            JobKind::Torrent => "application/x-bittorrent",
            JobKind::Nzb => "application/x-nzb",
        }
    }
}

impl std::fmt::Display for JobKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What gets handed to the download service
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JobPayload {
    /// URL or magnet link the service fetches itself
    Reference(String),
    /// Raw file contents uploaded with the request
    File(Vec<u8>),
}

/// A single download job
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    /// Release name; uploaded files are named `<name>.<kind>`
    pub name: String,
    /// Torrent or NZB
    pub kind: JobKind,
    /// Reference or inline content
    pub payload: JobPayload,
    /// Destination folder overriding the configured `<kind>_path`
    pub destination: Option<String>,
}

impl Job {
    /// Job submitted by reference (URL or magnet link)
    pub fn from_url(name: impl Into<String>, kind: JobKind, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            payload: JobPayload::Reference(url.into()),
            destination: None,
        }
    }

    /// Job submitted as an uploaded file
    pub fn from_file(name: impl Into<String>, kind: JobKind, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            kind,
            payload: JobPayload::File(content.into()),
            destination: None,
        }
    }

    /// Override the destination folder
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Name of the uploaded file, e.g. `Show.S01E01.torrent`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.kind.as_str())
    }

    /// Whether the job references a magnet link
    pub fn is_magnet(&self) -> bool {
        matches!(&self.payload, JobPayload::Reference(url) if url.starts_with("magnet:"))
    }
}
