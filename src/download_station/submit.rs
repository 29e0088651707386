//! Task creation: sending jobs by reference or as uploaded files.

use super::{CLIENT_NAME, DownloadStationClient};
use crate::error::{Error, Result};
use crate::types::{Job, JobPayload};
use reqwest::multipart::{Form, Part};
use tracing::{debug, warn};

/// File attached to a task-create request
#[derive(Clone, Debug)]
pub(crate) struct TaskFile {
    pub(crate) file_name: String,
    pub(crate) mime_type: &'static str,
    pub(crate) content: Vec<u8>,
}

/// One task-create request, kept so it can be resent with a corrected destination
#[derive(Clone, Debug)]
pub(crate) struct TaskRequest {
    pub(crate) uri: Option<String>,
    pub(crate) destination: Option<String>,
    pub(crate) file: Option<TaskFile>,
}

impl TaskRequest {
    /// Value of the `method` form field
    pub(crate) fn method(&self) -> &'static str {
        "create"
    }

    /// Form fields in wire order
    pub(crate) fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("api", "SYNO.DownloadStation.Task".to_string()),
            ("version", "1".to_string()),
            ("method", self.method().to_string()),
            ("session", "DownloadStation".to_string()),
        ];
        if let Some(uri) = &self.uri {
            fields.push(("uri", uri.clone()));
        }
        if let Some(destination) = &self.destination {
            fields.push(("destination", destination.clone()));
        }
        fields
    }
}

impl DownloadStationClient {
    /// Send a job, reporting only success
    ///
    /// Authenticates first if needed. Every failure (login, transport,
    /// malformed body, rejection) is logged and reported as `false`.
    pub async fn submit(&mut self, job: &Job) -> bool {
        match self.try_submit(job).await {
            Ok(()) => true,
            Err(e) => {
                debug!(client = CLIENT_NAME, job = %job.name, error = %e, "submission failed");
                false
            }
        }
    }

    /// Send a job, returning why it failed
    ///
    /// # Errors
    /// - [`Error::AuthenticationFailed`] if login did not succeed; nothing is submitted
    /// - [`Error::Network`] / [`Error::Http`] on transport failures
    /// - [`Error::MalformedResponse`] when the body is not a JSON envelope
    /// - [`Error::Rejected`] when Download Station reports `success: false`
    pub async fn try_submit(&mut self, job: &Job) -> Result<()> {
        debug!(client = CLIENT_NAME, job = %job.name, kind = %job.kind, "Calling DownloadStation client");

        if !self.authenticate().await {
            warn!("{}: Authentication Failed", CLIENT_NAME);
            return Err(Error::AuthenticationFailed);
        }

        let mut request = self.task_request(job);
        let body = self.send_task(&request).await?;
        self.check_response(&body, Some(&mut request)).await
    }

    /// Build the request for a job; the job's destination wins over `<kind>_path`
    pub(crate) fn task_request(&self, job: &Job) -> TaskRequest {
        let destination = job.destination.clone().or_else(|| {
            self.config
                .option(&job.kind.path_option())
                .map(str::to_string)
        });

        match &job.payload {
            JobPayload::Reference(uri) => TaskRequest {
                uri: Some(uri.clone()),
                destination,
                file: None,
            },
            JobPayload::File(content) => TaskRequest {
                uri: None,
                destination,
                file: Some(TaskFile {
                    file_name: job.file_name(),
                    mime_type: job.kind.mime_type(),
                    content: content.clone(),
                }),
            },
        }
    }

    /// POST a task-create request and return the response body
    pub(crate) async fn send_task(&self, request: &TaskRequest) -> Result<String> {
        let builder = self.http.post(self.urls.task.clone());

        let builder = match &request.file {
            None => builder.form(&request.form_fields()),
            Some(file) => {
                let part = Part::bytes(file.content.clone())
                    .file_name(file.file_name.clone())
                    .mime_str(file.mime_type)?;
                let form = request
                    .form_fields()
                    .into_iter()
                    .fold(Form::new(), |form, (name, value)| form.text(name, value))
                    .part("file", part);
                builder.multipart(form)
            }
        };

        debug!(
            client = CLIENT_NAME,
            destination = ?request.destination,
            upload = request.file.is_some(),
            "sending task create request"
        );
        self.execute(builder).await
    }
}
