mod job_service;
mod status_response;

pub use job_service::{
    DEFAULT_STATUS_TIMEOUT, JobService, JobServiceError, SUBMISSION_FAILED_MESSAGE,
};
pub use status_response::{
    BAD_RESPONSE, INVALID_MESSAGE, INVALID_PROGRESS, normalize_status_response,
};
