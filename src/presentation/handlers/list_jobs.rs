use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use super::dto::{JobResponse, error_response};
use crate::domain::JobStatus;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListJobsParams {
    pub status: Option<String>,
}

#[tracing::instrument(skip(state))]
pub async fn list_jobs_handler(
    State(state): State<AppState>,
    Query(params): Query<ListJobsParams>,
) -> impl IntoResponse {
    let Some(raw_status) = params.status else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "status query parameter is required",
        );
    };

    let status = match raw_status.parse::<JobStatus>() {
        Ok(s) => s,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
    };

    match state.job_service.list_jobs(status).await {
        Ok(jobs) => {
            let body: Vec<JobResponse> = jobs.into_iter().map(JobResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to list jobs");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to list jobs: {}", e),
            )
        }
    }
}
