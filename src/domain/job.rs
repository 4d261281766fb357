use super::{JobId, JobStatus};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub id: JobId,
    pub filename: String,
    pub study_id: Option<String>,
    pub status: JobStatus,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Job {
    /// A freshly allocated job, not yet handed to the worker.
    pub fn new(filename: String, study_id: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: JobId::new(),
            filename,
            study_id,
            status: JobStatus::Pending,
            error_message: None,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    /// Moves the in-memory record to `status`, keeping the message only for failures.
    pub fn transition(&mut self, status: JobStatus, error_message: Option<&str>) {
        let now = Utc::now();
        self.status = status;
        self.error_message = if status.keeps_error_message() {
            error_message.map(str::to_string)
        } else {
            None
        };
        if status == JobStatus::Completed {
            self.completed_at = Some(now);
        }
        self.updated_at = now;
    }
}

/// Outcome delivered by the worker once processing has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobCompletion {
    Succeeded,
    Failed { message: String },
}
