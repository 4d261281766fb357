mod job_repository;
mod repository_error;
mod worker_client;

pub use job_repository::JobRepository;
pub use repository_error::RepositoryError;
pub use worker_client::{JobSubmission, WorkerClient, WorkerClientError};
