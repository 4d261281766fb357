use std::sync::Arc;
use std::time::Duration;

use tracing::instrument;

use super::status_response::normalize_status_response;
use crate::application::ports::{
    JobRepository, JobSubmission, RepositoryError, WorkerClient, WorkerClientError,
};
use crate::domain::{Job, JobCompletion, JobId, JobStatus, JobStatusReport};

pub const DEFAULT_STATUS_TIMEOUT: Duration = Duration::from_millis(5000);
pub const SUBMISSION_FAILED_MESSAGE: &str = "submission to processing service failed";

/// Creates job records, hands them to the worker and reconciles what comes back.
pub struct JobService {
    job_repository: Arc<dyn JobRepository>,
    worker_client: Arc<dyn WorkerClient>,
    status_timeout: Duration,
}

impl JobService {
    pub fn new(
        job_repository: Arc<dyn JobRepository>,
        worker_client: Arc<dyn WorkerClient>,
        status_timeout: Duration,
    ) -> Self {
        Self {
            job_repository,
            worker_client,
            status_timeout,
        }
    }

    /// Persists a pending job and forwards it to the worker.
    ///
    /// Only a failed initial write is returned as an error. A rejected
    /// submission comes back as a `Failed` job.
    #[instrument(skip(self), fields(job_id = tracing::field::Empty))]
    pub async fn submit_job(
        &self,
        filename: String,
        study_id: Option<String>,
    ) -> Result<Job, JobServiceError> {
        if filename.trim().is_empty() {
            return Err(JobServiceError::InvalidInput(
                "filename is required".to_string(),
            ));
        }

        let mut job = Job::new(filename, study_id);
        tracing::Span::current().record("job_id", tracing::field::display(job.id));

        self.job_repository
            .create(&job)
            .await
            .map_err(JobServiceError::Repository)?;

        let submission = JobSubmission {
            job_id: job.id,
            filename: job.filename.clone(),
            study_id: job.study_id.clone(),
        };

        match self.worker_client.submit(&submission).await {
            Ok(()) => {
                self.transition(&mut job, JobStatus::Running, None).await;
                tracing::info!("Job accepted by processing service");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Job submission rejected");
                self.transition(&mut job, JobStatus::Failed, Some(SUBMISSION_FAILED_MESSAGE))
                    .await;
            }
        }

        Ok(job)
    }

    #[instrument(skip(self, job_id), fields(job_id = %job_id))]
    pub async fn get_job(&self, job_id: JobId) -> Result<Option<Job>, JobServiceError> {
        self.job_repository
            .get_by_id(job_id)
            .await
            .map_err(JobServiceError::Repository)
    }

    #[instrument(skip(self))]
    pub async fn list_jobs(&self, status: JobStatus) -> Result<Vec<Job>, JobServiceError> {
        self.job_repository
            .list_by_status(status)
            .await
            .map_err(JobServiceError::Repository)
    }

    /// Asks the worker where a job stands.
    ///
    /// `None` means the id is malformed or unknown. Every other outcome,
    /// including transport errors and timeouts, is a report.
    #[instrument(skip(self))]
    pub async fn get_job_status(&self, raw_job_id: &str) -> Option<JobStatusReport> {
        let job_id = match JobId::parse(raw_job_id) {
            Ok(id) => id,
            Err(e) => {
                tracing::debug!(error = %e, "Malformed job id");
                return None;
            }
        };

        match self.job_repository.get_by_id(job_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return None,
            Err(e) => {
                tracing::error!(error = %e, job_id = %job_id, "Failed to look up job");
                return None;
            }
        }

        let outcome =
            match tokio::time::timeout(self.status_timeout, self.worker_client.fetch_status(job_id))
                .await
            {
                Ok(result) => result,
                Err(_) => Err(WorkerClientError::Timeout {
                    operation: "status query",
                    millis: self.status_timeout.as_millis() as u64,
                }),
            };

        let report = match outcome {
            Ok(body) => normalize_status_response(job_id, &body),
            Err(e) => {
                tracing::warn!(error = %e, job_id = %job_id, "Status query failed");
                JobStatusReport::failed(job_id, format!("failed to get job status: {}", e))
            }
        };

        if report.is_failed() {
            tracing::debug!(job_id = %job_id, detail = ?report.message, "Reporting failed status");
        }

        Some(report)
    }

    /// Applies a completion notice from the worker. Returns `None` for unknown jobs.
    #[instrument(skip(self, job_id), fields(job_id = %job_id))]
    pub async fn record_completion(
        &self,
        job_id: JobId,
        completion: JobCompletion,
    ) -> Result<Option<Job>, JobServiceError> {
        if self.job_repository.get_by_id(job_id).await?.is_none() {
            return Ok(None);
        }

        let (status, message) = match &completion {
            JobCompletion::Succeeded => (JobStatus::Completed, None),
            JobCompletion::Failed { message } => (JobStatus::Failed, Some(message.as_str())),
        };

        self.job_repository
            .update_status(job_id, status, message)
            .await?;
        tracing::info!(status = %status, "Job completion recorded");

        Ok(self.job_repository.get_by_id(job_id).await?)
    }

    async fn transition(&self, job: &mut Job, status: JobStatus, error_message: Option<&str>) {
        tracing::debug!(status = %status, "Job status transition");
        job.transition(status, error_message);
        if let Err(e) = self
            .job_repository
            .update_status(job.id, status, error_message)
            .await
        {
            tracing::error!(error = %e, status = %status, "Failed to persist job status");
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JobServiceError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
