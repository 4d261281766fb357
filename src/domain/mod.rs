mod job;
mod job_id;
mod job_status;
mod job_status_report;

pub use job::{Job, JobCompletion};
pub use job_id::{InvalidJobId, JobId};
pub use job_status::JobStatus;
pub use job_status_report::{FAILED_STATUS, JobStatusReport};
