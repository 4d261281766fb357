use async_trait::async_trait;
use serde_json::Value;

use crate::domain::JobId;

/// Request forwarded to the processing service when a job is submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct JobSubmission {
    pub job_id: JobId,
    pub filename: String,
    pub study_id: Option<String>,
}

/// Client for the external processing service.
///
/// `fetch_status` hands back the raw body: validating its shape is the
/// caller's job, so adapters must not coerce or default missing fields.
#[async_trait]
pub trait WorkerClient: Send + Sync {
    async fn submit(&self, submission: &JobSubmission) -> Result<(), WorkerClientError>;

    async fn fetch_status(&self, job_id: JobId) -> Result<Value, WorkerClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WorkerClientError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("invalid response body: {0}")]
    InvalidBody(String),
    #[error("{operation} timed out after {millis}ms")]
    Timeout {
        operation: &'static str,
        millis: u64,
    },
}
