use super::JobId;

pub const FAILED_STATUS: &str = "failed";

/// Snapshot of a job as last observed from the worker. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct JobStatusReport {
    pub job_id: JobId,
    pub status: String,
    pub progress: Option<f64>,
    pub message: Option<String>,
}

impl JobStatusReport {
    pub fn new(
        job_id: JobId,
        status: String,
        progress: Option<f64>,
        message: Option<String>,
    ) -> Self {
        Self {
            job_id,
            status,
            progress,
            message,
        }
    }

    pub fn failed(job_id: JobId, message: impl Into<String>) -> Self {
        Self {
            job_id,
            status: FAILED_STATUS.to_string(),
            progress: None,
            message: Some(message.into()),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == FAILED_STATUS
    }
}
