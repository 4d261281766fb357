use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Job, JobStatusReport};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitJobRequest {
    pub filename: String,
    #[serde(default)]
    pub study_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: String,
    pub filename: String,
    pub study_id: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    pub completed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id.to_string(),
            filename: job.filename,
            study_id: job.study_id,
            status: job.status.as_str().to_string(),
            created_at: job.created_at.to_rfc3339(),
            updated_at: job.updated_at.to_rfc3339(),
            completed_at: job.completed_at.map(|t| t.to_rfc3339()),
            error_message: job.error_message,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatusResponse {
    pub job_id: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<JobStatusReport> for JobStatusResponse {
    fn from(report: JobStatusReport) -> Self {
        Self {
            job_id: report.job_id.to_string(),
            status: report.status,
            progress: report.progress.map(progress_value),
            message: report.message,
        }
    }
}

// Whole percentages go back out as integers, the way the worker sent them.
fn progress_value(progress: f64) -> Value {
    if progress.fract() == 0.0 && progress.abs() < 9_007_199_254_740_992.0 {
        Value::from(progress as i64)
    } else {
        Value::from(progress)
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}
