use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::application::ports::{JobRepository, RepositoryError};
use crate::domain::{Job, JobId, JobStatus};

/// Process-local job store. Records live as long as the process.
#[derive(Default)]
pub struct InMemoryJobRepository {
    jobs: RwLock<HashMap<JobId, Job>>,
}

impl InMemoryJobRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    #[instrument(skip(self, job), fields(job_id = %job.id))]
    async fn create(&self, job: &Job) -> Result<(), RepositoryError> {
        let mut jobs = self.jobs.write().await;
        if jobs.contains_key(&job.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "job {} already exists",
                job.id
            )));
        }
        jobs.insert(job.id, job.clone());
        Ok(())
    }

    #[instrument(skip(self, id), fields(job_id = %id))]
    async fn get_by_id(&self, id: JobId) -> Result<Option<Job>, RepositoryError> {
        Ok(self.jobs.read().await.get(&id).cloned())
    }

    #[instrument(skip(self, id, status, error_message), fields(job_id = %id, status = %status))]
    async fn update_status(
        &self,
        id: JobId,
        status: JobStatus,
        error_message: Option<&str>,
    ) -> Result<(), RepositoryError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        job.transition(status, error_message);

        Ok(())
    }

    #[instrument(skip(self, status), fields(status = %status))]
    async fn list_by_status(&self, status: JobStatus) -> Result<Vec<Job>, RepositoryError> {
        let mut matching: Vec<Job> = self
            .jobs
            .read()
            .await
            .values()
            .filter(|job| job.status == status)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }
}
