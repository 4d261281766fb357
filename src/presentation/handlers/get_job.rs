use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::dto::{JobResponse, error_response};
use crate::domain::JobId;
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state))]
pub async fn get_job_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> impl IntoResponse {
    let id = match JobId::parse(&job_id) {
        Ok(id) => id,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match state.job_service.get_job(id).await {
        Ok(Some(job)) => (StatusCode::OK, Json(JobResponse::from(job))).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, format!("Job not found: {}", job_id)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch job");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to fetch job: {}", e),
            )
        }
    }
}
