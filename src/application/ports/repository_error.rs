#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("store unavailable: {0}")]
    ConnectionFailed(String),
    #[error("job not found: {0}")]
    NotFound(String),
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
}
