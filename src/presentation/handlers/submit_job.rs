use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::dto::{JobResponse, SubmitJobRequest, error_response};
use crate::application::services::JobServiceError;
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state, request), fields(filename = %request.filename))]
pub async fn submit_job_handler(
    State(state): State<AppState>,
    Json(request): Json<SubmitJobRequest>,
) -> impl IntoResponse {
    match state
        .job_service
        .submit_job(request.filename, request.study_id)
        .await
    {
        Ok(job) => {
            tracing::info!(job_id = %job.id, status = %job.status, "Job submitted");
            (StatusCode::CREATED, Json(JobResponse::from(job))).into_response()
        }
        Err(JobServiceError::InvalidInput(reason)) => {
            tracing::warn!(reason = %reason, "Rejected job submission");
            error_response(StatusCode::BAD_REQUEST, reason)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create job record");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to create job: {}", e),
            )
        }
    }
}
