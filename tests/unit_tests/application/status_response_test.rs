use serde_json::json;

use etl_tracker::application::services::{
    BAD_RESPONSE, INVALID_MESSAGE, INVALID_PROGRESS, normalize_status_response,
};
use etl_tracker::domain::{JobId, JobStatusReport};

#[test]
fn given_non_object_body_when_normalizing_then_reports_bad_response() {
    let job_id = JobId::new();

    let report = normalize_status_response(job_id, &json!(["running"]));

    assert!(report.is_failed());
    assert_eq!(report.message.as_deref(), Some(BAD_RESPONSE));
}

#[test]
fn given_numeric_status_when_normalizing_then_reports_bad_response() {
    let report = normalize_status_response(JobId::new(), &json!({"status": 3}));

    assert!(report.is_failed());
    assert_eq!(report.message.as_deref(), Some(BAD_RESPONSE));
}

#[test]
fn given_empty_status_when_normalizing_then_reports_bad_response() {
    let report = normalize_status_response(JobId::new(), &json!({"status": ""}));

    assert_eq!(report.message.as_deref(), Some(BAD_RESPONSE));
}

#[test]
fn given_whitespace_status_when_normalizing_then_it_is_passed_through_verbatim() {
    let job_id = JobId::new();

    let report = normalize_status_response(job_id, &json!({"status": "  "}));

    assert_eq!(
        report,
        JobStatusReport::new(job_id, "  ".to_string(), None, None)
    );
}

#[test]
fn given_null_optional_fields_when_normalizing_then_they_are_omitted() {
    let job_id = JobId::new();
    let body = json!({"jobId": job_id.to_string(), "status": "running", "progress": null, "message": null});

    let report = normalize_status_response(job_id, &body);

    assert_eq!(
        report,
        JobStatusReport::new(job_id, "running".to_string(), None, None)
    );
}

#[test]
fn given_non_string_message_when_normalizing_then_reports_invalid_message() {
    let report = normalize_status_response(
        JobId::new(),
        &json!({"status": "running", "progress": 10, "message": {"text": "hi"}}),
    );

    assert!(report.is_failed());
    assert_eq!(report.message.as_deref(), Some(INVALID_MESSAGE));
}

#[test]
fn given_bad_progress_and_bad_message_when_normalizing_then_progress_is_reported_first() {
    let report = normalize_status_response(
        JobId::new(),
        &json!({"status": "running", "progress": "ten", "message": 7}),
    );

    assert_eq!(report.message.as_deref(), Some(INVALID_PROGRESS));
}

#[test]
fn given_fractional_progress_when_normalizing_then_it_is_kept() {
    let report =
        normalize_status_response(JobId::new(), &json!({"status": "running", "progress": 12.5}));

    assert_eq!(report.progress, Some(12.5));
    assert_eq!(report.message, None);
}
