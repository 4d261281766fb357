use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::application::ports::{JobSubmission, WorkerClient, WorkerClientError};
use crate::domain::JobId;

/// `WorkerClient` speaking JSON over HTTP to the processing service.
pub struct HttpWorkerClient {
    client: Client,
    base_url: String,
    submit_timeout: Duration,
    status_timeout: Duration,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitJobRequest<'a> {
    job_id: String,
    filename: &'a str,
    study_id: Option<&'a str>,
}

impl HttpWorkerClient {
    /// Each operation carries its own deadline, applied per request.
    pub fn new(
        base_url: &str,
        submit_timeout: Duration,
        status_timeout: Duration,
    ) -> Result<Self, WorkerClientError> {
        let client = Client::builder()
            .build()
            .map_err(|e| WorkerClientError::RequestFailed(format!("client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            submit_timeout,
            status_timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn map_send_error(
        operation: &'static str,
        timeout: Duration,
        e: reqwest::Error,
    ) -> WorkerClientError {
        if e.is_timeout() {
            WorkerClientError::Timeout {
                operation,
                millis: timeout.as_millis() as u64,
            }
        } else {
            WorkerClientError::RequestFailed(e.to_string())
        }
    }

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, WorkerClientError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        Err(WorkerClientError::UnexpectedStatus { status, body })
    }
}

#[async_trait]
impl WorkerClient for HttpWorkerClient {
    #[instrument(skip(self, submission), fields(job_id = %submission.job_id))]
    async fn submit(&self, submission: &JobSubmission) -> Result<(), WorkerClientError> {
        let body = SubmitJobRequest {
            job_id: submission.job_id.to_string(),
            filename: &submission.filename,
            study_id: submission.study_id.as_deref(),
        };

        tracing::debug!(base_url = %self.base_url, "Submitting job to processing service");

        let response = self
            .client
            .post(format!("{}/jobs", self.base_url))
            .timeout(self.submit_timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| Self::map_send_error("submission", self.submit_timeout, e))?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    #[instrument(skip(self, job_id), fields(job_id = %job_id))]
    async fn fetch_status(&self, job_id: JobId) -> Result<Value, WorkerClientError> {
        let response = self
            .client
            .get(format!("{}/jobs/{}/status", self.base_url, job_id))
            .timeout(self.status_timeout)
            .send()
            .await
            .map_err(|e| Self::map_send_error("status query", self.status_timeout, e))?;

        let response = Self::ensure_success(response).await?;

        response
            .json::<Value>()
            .await
            .map_err(|e| WorkerClientError::InvalidBody(e.to_string()))
    }
}
