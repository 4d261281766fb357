mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DEFAULT_WORKER_BASE_URL, LoggingSettings, ServerSettings, Settings, WorkerSettings,
};
