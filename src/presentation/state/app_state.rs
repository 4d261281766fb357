use std::sync::Arc;

use crate::application::services::JobService;

#[derive(Clone)]
pub struct AppState {
    pub job_service: Arc<JobService>,
}
