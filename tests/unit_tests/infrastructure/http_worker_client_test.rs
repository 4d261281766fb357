use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use etl_tracker::application::ports::{JobSubmission, WorkerClient, WorkerClientError};
use etl_tracker::domain::JobId;
use etl_tracker::infrastructure::worker::HttpWorkerClient;

const TEST_TIMEOUT: Duration = Duration::from_secs(2);

async fn start_mock_worker(app: Router) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn status_app(response_status: u16, response_body: &'static str) -> Router {
    Router::new().route(
        "/jobs/{job_id}/status",
        get(move |Path(_job_id): Path<String>| async move {
            let status = StatusCode::from_u16(response_status).unwrap();
            (
                status,
                [(axum::http::header::CONTENT_TYPE, "application/json")],
                response_body,
            )
                .into_response()
        }),
    )
}

#[tokio::test]
async fn given_accepting_worker_when_submitting_then_posts_camel_case_body() {
    let received: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&received);
    let app = Router::new().route(
        "/jobs",
        post(move |Json(body): Json<Value>| {
            let sink = Arc::clone(&sink);
            async move {
                *sink.lock().unwrap() = Some(body);
                (StatusCode::OK, Json(json!({"status": "running"})))
            }
        }),
    );
    let (base_url, shutdown_tx) = start_mock_worker(app).await;

    let client = HttpWorkerClient::new(&base_url, TEST_TIMEOUT, TEST_TIMEOUT).unwrap();
    let job_id = JobId::new();
    let submission = JobSubmission {
        job_id,
        filename: "sample_study001.csv".to_string(),
        study_id: Some("STUDY001".to_string()),
    };

    let result = client.submit(&submission).await;

    assert!(result.is_ok());
    assert_eq!(
        received.lock().unwrap().clone(),
        Some(json!({
            "jobId": job_id.to_string(),
            "filename": "sample_study001.csv",
            "studyId": "STUDY001"
        }))
    );
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_worker_rejects_submission_when_submitting_then_returns_unexpected_status() {
    let app = Router::new().route(
        "/jobs",
        post(|| async { (StatusCode::BAD_REQUEST, "Not a file.") }),
    );
    let (base_url, shutdown_tx) = start_mock_worker(app).await;

    let client = HttpWorkerClient::new(&base_url, TEST_TIMEOUT, TEST_TIMEOUT).unwrap();
    let submission = JobSubmission {
        job_id: JobId::new(),
        filename: "missing.csv".to_string(),
        study_id: None,
    };

    let result = client.submit(&submission).await;

    match result {
        Err(WorkerClientError::UnexpectedStatus { status, body }) => {
            assert_eq!(status, 400);
            assert_eq!(body, "Not a file.");
        }
        other => panic!("expected UnexpectedStatus, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_worker_when_submitting_then_returns_request_failed() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client =
        HttpWorkerClient::new(&format!("http://{}", addr), TEST_TIMEOUT, TEST_TIMEOUT).unwrap();
    let submission = JobSubmission {
        job_id: JobId::new(),
        filename: "a.csv".to_string(),
        study_id: None,
    };

    let result = client.submit(&submission).await;

    assert!(matches!(result, Err(WorkerClientError::RequestFailed(_))));
}

#[tokio::test]
async fn given_status_body_when_fetching_status_then_returns_raw_json() {
    let body = r#"{"jobId": "x", "status": "running", "progress": 30, "message": "staging rows"}"#;
    let (base_url, shutdown_tx) = start_mock_worker(status_app(200, body)).await;

    let client = HttpWorkerClient::new(&base_url, TEST_TIMEOUT, TEST_TIMEOUT).unwrap();

    let result = client.fetch_status(JobId::new()).await.unwrap();

    assert_eq!(result["status"], "running");
    assert_eq!(result["progress"], 30);
    assert_eq!(result["message"], "staging rows");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_malformed_fields_when_fetching_status_then_body_is_passed_through_unchanged() {
    let body = r#"{"status": "done", "progress": "bad"}"#;
    let (base_url, shutdown_tx) = start_mock_worker(status_app(200, body)).await;

    let client = HttpWorkerClient::new(&base_url, TEST_TIMEOUT, TEST_TIMEOUT).unwrap();

    let result = client.fetch_status(JobId::new()).await.unwrap();

    assert_eq!(result, json!({"status": "done", "progress": "bad"}));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unknown_job_on_worker_when_fetching_status_then_returns_unexpected_status() {
    let body = r#"{"detail": "Job not found"}"#;
    let (base_url, shutdown_tx) = start_mock_worker(status_app(404, body)).await;

    let client = HttpWorkerClient::new(&base_url, TEST_TIMEOUT, TEST_TIMEOUT).unwrap();

    let result = client.fetch_status(JobId::new()).await;

    assert!(matches!(
        result,
        Err(WorkerClientError::UnexpectedStatus { status: 404, .. })
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_non_json_body_when_fetching_status_then_returns_invalid_body() {
    let (base_url, shutdown_tx) = start_mock_worker(status_app(200, "<html>oops</html>")).await;

    let client = HttpWorkerClient::new(&base_url, TEST_TIMEOUT, TEST_TIMEOUT).unwrap();

    let result = client.fetch_status(JobId::new()).await;

    assert!(matches!(result, Err(WorkerClientError::InvalidBody(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_slow_worker_when_fetching_status_then_returns_timeout() {
    let app = Router::new().route(
        "/jobs/{job_id}/status",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({"status": "running"}))
        }),
    );
    let (base_url, shutdown_tx) = start_mock_worker(app).await;

    let client =
        HttpWorkerClient::new(&base_url, Duration::from_secs(10), Duration::from_millis(200))
            .unwrap();

    let result = client.fetch_status(JobId::new()).await;

    assert!(matches!(
        result,
        Err(WorkerClientError::Timeout {
            operation: "status query",
            millis: 200
        })
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_slow_worker_when_submitting_then_times_out_with_submit_bound() {
    let app = Router::new().route(
        "/jobs",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            StatusCode::ACCEPTED
        }),
    );
    let (base_url, shutdown_tx) = start_mock_worker(app).await;

    let client =
        HttpWorkerClient::new(&base_url, Duration::from_millis(200), Duration::from_secs(10))
            .unwrap();

    let result = client
        .submit(&JobSubmission {
            job_id: JobId::new(),
            filename: "sample_study001.csv".to_string(),
            study_id: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(WorkerClientError::Timeout {
            operation: "submission",
            millis: 200
        })
    ));
    shutdown_tx.send(()).ok();
}

#[test]
fn given_base_url_with_trailing_slash_when_building_client_then_slash_is_trimmed() {
    let client = HttpWorkerClient::new("http://etl:8000/", TEST_TIMEOUT, TEST_TIMEOUT).unwrap();

    assert_eq!(client.base_url(), "http://etl:8000");
}
