//! Response envelope checking.

use super::submit::TaskRequest;
use super::{ApiMethod, CLIENT_NAME, DownloadStationClient, VOLUME_PREFIX};
use crate::error::{Error, Result};
use serde::Deserialize;
use tracing::info;

/// Task-create code answered when the destination folder is not accepted as given
const DESTINATION_RETRY_CODE: i64 = 403;

/// `{"success": bool, "error": {"code": int}}`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiEnvelope {
    #[serde(default)]
    pub(crate) success: bool,
    #[serde(default)]
    pub(crate) error: Option<ApiErrorBody>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub(crate) code: Option<i64>,
}

impl ApiEnvelope {
    pub(crate) fn error_code(&self) -> Option<i64> {
        self.error.as_ref().and_then(|e| e.code)
    }
}

/// Parse an envelope, logging bodies that are not one
pub(crate) fn parse_envelope(body: &str) -> Result<ApiEnvelope> {
    serde_json::from_str(body).map_err(|e| {
        info!(
            client = CLIENT_NAME,
            error = %e,
            "Could not convert response to json, check the host:port"
        );
        Error::MalformedResponse(e.to_string())
    })
}

impl DownloadStationClient {
    /// Interpret a response body
    ///
    /// `request` is the task-create request that produced `body`, or `None`
    /// for login. A create rejected with code 403 while carrying an absolute
    /// destination is resent once with the destination made relative. Any
    /// remaining failure is looked up in the error table for the request's
    /// method (login when there is no request) and logged.
    pub(crate) async fn check_response(
        &self,
        body: &str,
        mut request: Option<&mut TaskRequest>,
    ) -> Result<()> {
        let mut envelope = parse_envelope(body)?;

        if !envelope.success && envelope.error_code() == Some(DESTINATION_RETRY_CODE) {
            if let Some(request) = request.as_deref_mut() {
                if let Some(corrected) = self.corrected_destination(request.destination.as_deref())
                {
                    info!(
                        client = CLIENT_NAME,
                        from = ?request.destination,
                        to = %corrected,
                        "destination rejected, retrying with relative path"
                    );
                    request.destination = Some(corrected);
                    let body = self.send_task(request).await?;
                    envelope = parse_envelope(&body)?;
                }
            }
        }

        if envelope.success {
            return Ok(());
        }

        let method = ApiMethod::from_method(request.as_deref().map(TaskRequest::method));
        let code = envelope.error_code();
        let message = self.errors.describe(method, code);
        info!(
            client = CLIENT_NAME,
            method = method.as_str(),
            code = ?code,
            "{}",
            message
        );

        Err(Error::Rejected {
            method: method.as_str().to_string(),
            code,
            message,
        })
    }

    /// Relative form of an absolute destination, `None` if it is not absolute
    ///
    /// `/volume1/downloads/tv` becomes `downloads/tv`; other absolute paths
    /// only lose their leading slashes.
    pub(crate) fn corrected_destination(&self, destination: Option<&str>) -> Option<String> {
        let destination = destination.filter(|d| d.starts_with('/'))?;
        let stripped = VOLUME_PREFIX.replace(destination, "");
        Some(stripped.trim_start_matches('/').to_string())
    }
}
