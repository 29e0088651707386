//! Common test utilities for dlproxy integration tests

use dlproxy::config::{DownloadStationConfig, StudioConfig};
use serde_json::{Value, json};
use wiremock::{MockServer, ResponseTemplate};

/// Download Station config pointing at a mock server
#[allow(dead_code)]
pub fn station_config(server: &MockServer) -> DownloadStationConfig {
    DownloadStationConfig {
        host: format!("{}/", server.uri()),
        username: "admin".into(),
        password: "secret".into(),
        torrent_path: Some("/volume1/torrents".into()),
        nzb_path: Some("downloads/nzb".into()),
        ..Default::default()
    }
}

/// Studio config pointing at a mock server
#[allow(dead_code)]
pub fn studio_config(server: &MockServer) -> StudioConfig {
    StudioConfig {
        base_url: format!("{}/v1", server.uri()),
        account_sid: "ACxxx".into(),
        auth_token: "token".into(),
        ..Default::default()
    }
}

/// `{"success": true}`
#[allow(dead_code)]
pub fn envelope_ok() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"success": true}))
}

/// `{"success": false, "error": {"code": code}}`
#[allow(dead_code)]
pub fn envelope_error(code: i64) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"success": false, "error": {"code": code}}))
}

/// Execution context payload as Studio returns it
#[allow(dead_code)]
pub fn context_payload(flow_sid: &str, execution_sid: &str) -> Value {
    json!({
        "account_sid": "ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        "context": {"flow": {"first_name": "Foo"}, "widgets": {}},
        "flow_sid": flow_sid,
        "execution_sid": execution_sid,
        "url": format!(
            "https://studio.twilio.com/v1/Flows/{}/Executions/{}/Context",
            flow_sid, execution_sid
        )
    })
}
