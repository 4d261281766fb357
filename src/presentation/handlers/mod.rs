mod dto;
mod get_job;
mod health;
mod job_status;
mod list_jobs;
mod submit_job;

pub use dto::{ErrorResponse, JobResponse, JobStatusResponse, SubmitJobRequest};
pub use get_job::get_job_handler;
pub use health::health_handler;
pub use job_status::job_status_handler;
pub use list_jobs::list_jobs_handler;
pub use submit_job::submit_job_handler;
