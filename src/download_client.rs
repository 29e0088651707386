//! Common interface for download clients

use crate::download_station::DownloadStationClient;
use crate::types::{Job, JobKind};
use async_trait::async_trait;
use tracing::warn;

/// Trait for clients that hand jobs to an external download service
///
/// Implementations report outcomes as booleans and log the details, so a
/// caller juggling several services can treat them uniformly.
///
/// # Examples
///
/// ```no_run
/// use dlproxy::config::DownloadStationConfig;
/// use dlproxy::download_client::DownloadClient;
/// use dlproxy::download_station::DownloadStationClient;
/// use dlproxy::types::{Job, JobKind};
///
/// # async fn example() -> dlproxy::Result<()> {
/// let mut client: Box<dyn DownloadClient> = Box::new(DownloadStationClient::new(
///     DownloadStationConfig {
///         host: "http://nas.local:5000/".into(),
///         ..Default::default()
///     },
/// )?);
///
/// let job = Job::from_url("Show.S01E01", JobKind::Torrent, "magnet:?xt=urn:btih:abc");
/// let sent = client.send_torrent(&job).await;
/// println!("{} accepted job: {}", client.name(), sent);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait DownloadClient: Send {
    /// Service name used in log lines
    fn name(&self) -> &str;

    /// Log in if needed; `true` once a session is established
    async fn authenticate(&mut self) -> bool;

    /// Hand a job of any kind to the service
    async fn send_job(&mut self, job: &Job) -> bool;

    /// Hand a torrent job to the service
    async fn send_torrent(&mut self, job: &Job) -> bool {
        if job.kind != JobKind::Torrent {
            warn!(client = self.name(), job = %job.name, kind = %job.kind, "not a torrent job");
            return false;
        }
        self.send_job(job).await
    }

    /// Hand an NZB job to the service
    async fn send_nzb(&mut self, job: &Job) -> bool {
        if job.kind != JobKind::Nzb {
            warn!(client = self.name(), job = %job.name, kind = %job.kind, "not an NZB job");
            return false;
        }
        self.send_job(job).await
    }
}

#[async_trait]
impl DownloadClient for DownloadStationClient {
    fn name(&self) -> &str {
        crate::download_station::CLIENT_NAME
    }

    async fn authenticate(&mut self) -> bool {
        DownloadStationClient::authenticate(self).await
    }

    async fn send_job(&mut self, job: &Job) -> bool {
        self.submit(job).await
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DownloadStationConfig;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn boxed_client(server: &MockServer) -> Box<dyn DownloadClient> {
        Box::new(
            DownloadStationClient::new(DownloadStationConfig {
                host: format!("{}/", server.uri()),
                username: "admin".into(),
                password: "secret".into(),
                ..Default::default()
            })
            .unwrap(),
        )
    }

    #[tokio::test]
    async fn trait_object_submits_through_download_station() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/webapi/auth.cgi"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/webapi/DownloadStation/task.cgi"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(2)
            .mount(&server)
            .await;

        let mut client = boxed_client(&server).await;
        assert_eq!(client.name(), "DownloadStation");
        assert!(client.authenticate().await);

        let torrent = Job::from_url("a", JobKind::Torrent, "magnet:?xt=urn:btih:abc");
        let nzb = Job::from_url("b", JobKind::Nzb, "https://indexer.example/b.nzb");
        assert!(client.send_torrent(&torrent).await);
        assert!(client.send_nzb(&nzb).await);
    }

    #[tokio::test]
    async fn mismatched_kind_is_refused_without_request() {
        let server = MockServer::start().await;
        let mut client = boxed_client(&server).await;

        let nzb = Job::from_url("b", JobKind::Nzb, "https://indexer.example/b.nzb");
        assert!(!client.send_torrent(&nzb).await);
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
