use serde_json::Value;

use crate::domain::{JobId, JobStatusReport};

pub const BAD_RESPONSE: &str = "bad response";
pub const INVALID_PROGRESS: &str = "invalid progress data";
pub const INVALID_MESSAGE: &str = "invalid message data";

/// Validates a worker status body and turns it into a report.
///
/// A present field must be well typed or the whole response counts as failed.
/// JSON `null` is treated as an absent field.
pub fn normalize_status_response(job_id: JobId, body: &Value) -> JobStatusReport {
    let Some(fields) = body.as_object() else {
        return JobStatusReport::failed(job_id, BAD_RESPONSE);
    };

    let status = match fields.get("status").and_then(Value::as_str) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => return JobStatusReport::failed(job_id, BAD_RESPONSE),
    };

    let progress = match fields.get("progress") {
        None | Some(Value::Null) => None,
        Some(value) => match value.as_f64() {
            Some(p) => Some(p),
            None => return JobStatusReport::failed(job_id, INVALID_PROGRESS),
        },
    };

    let message = match fields.get("message") {
        None | Some(Value::Null) => None,
        Some(Value::String(m)) => Some(m.clone()),
        Some(_) => return JobStatusReport::failed(job_id, INVALID_MESSAGE),
    };

    JobStatusReport::new(job_id, status, progress, message)
}
