use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::dto::{JobStatusResponse, error_response};
use crate::presentation::state::AppState;

/// Malformed and unknown ids both answer 404; the service does not tell them apart.
#[tracing::instrument(skip(state))]
pub async fn job_status_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> impl IntoResponse {
    match state.job_service.get_job_status(&job_id).await {
        Some(report) => (StatusCode::OK, Json(JobStatusResponse::from(report))).into_response(),
        None => error_response(StatusCode::NOT_FOUND, format!("Job not found: {}", job_id)),
    }
}
