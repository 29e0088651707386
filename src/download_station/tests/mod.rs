use super::*;
use crate::types::{Job, JobKind};
use serde_json::json;
use std::collections::HashMap;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};


const LOGIN_PATH: &str = "/webapi/auth.cgi";
const TASK_PATH: &str = "/webapi/DownloadStation/task.cgi";

/// Client pointed at a mock server, with the given default NZB destination
fn client_for(server: &MockServer, nzb_path: Option<&str>) -> DownloadStationClient {
    DownloadStationClient::new(DownloadStationConfig {
        host: format!("{}/", server.uri()),
        username: "admin".into(),
        password: "secret".into(),
        nzb_path: nzb_path.map(str::to_string),
        ..Default::default()
    })
    .unwrap()
}

fn success() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"success": true}))
}

fn failure(code: i64) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"success": false, "error": {"code": code}}))
}

/// Mount a login mock answering success, expecting `calls` requests
async fn mount_login(server: &MockServer, calls: u64) {
    Mock::given(method("GET"))
        .and(path(LOGIN_PATH))
        .and(query_param("method", "login"))
        .respond_with(success())
        .expect(calls)
        .mount(server)
        .await;
}

/// Decoded form fields of every task request the server saw
async fn task_forms(server: &MockServer) -> Vec<HashMap<String, String>> {
    server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.url.path() == TASK_PATH)
        .map(|r| {
            url::form_urlencoded::parse(&r.body)
                .into_owned()
                .collect::<HashMap<_, _>>()
        })
        .collect()
}

#[test]
fn new_resolves_endpoints_against_host() {
    let client = DownloadStationClient::new(DownloadStationConfig {
        host: "http://nas.local:5000/".into(),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(client.login_url().as_str(), "http://nas.local:5000/webapi/auth.cgi");
    assert_eq!(
        client.task_url().as_str(),
        "http://nas.local:5000/webapi/DownloadStation/task.cgi"
    );
    assert!(!client.session().is_authenticated());
}

#[test]
fn new_keeps_host_path_prefix_with_trailing_slash() {
    let client = DownloadStationClient::new(DownloadStationConfig {
        host: "https://nas.example/ds/".into(),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(client.login_url().as_str(), "https://nas.example/ds/webapi/auth.cgi");
}

#[test]
fn new_rejects_invalid_host() {
    let result = DownloadStationClient::new(DownloadStationConfig {
        host: "not a url".into(),
        ..Default::default()
    });
    assert!(matches!(result, Err(Error::Config { .. })));
}

#[test]
fn corrected_destination_strips_volume_prefix() {
    let client = DownloadStationClient::new(DownloadStationConfig {
        host: "http://nas.local:5000/".into(),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(
        client.corrected_destination(Some("/volume1/downloads")),
        Some("downloads".to_string())
    );
    assert_eq!(
        client.corrected_destination(Some("/volume12/media/tv")),
        Some("media/tv".to_string())
    );
    assert_eq!(
        client.corrected_destination(Some("//downloads")),
        Some("downloads".to_string())
    );
    assert_eq!(
        client.corrected_destination(Some("/volumeX/downloads")),
        Some("volumeX/downloads".to_string())
    );
    assert_eq!(client.corrected_destination(Some("downloads")), None);
    assert_eq!(client.corrected_destination(None), None);
}

#[test]
fn volume_prefix_only_matches_leading_volume_segment() {
    assert!(VOLUME_PREFIX.is_match("/volume1/downloads"));
    assert!(VOLUME_PREFIX.is_match("/volume12/media"));
    assert!(!VOLUME_PREFIX.is_match("volume1/downloads"));
    assert!(!VOLUME_PREFIX.is_match("/data/volume1/downloads"));
    assert!(!VOLUME_PREFIX.is_match("/volume/downloads"));
}
