use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::DEFAULT_STATUS_TIMEOUT;

pub const DEFAULT_WORKER_BASE_URL: &str = "http://etl:8000";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub worker: WorkerSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Where the processing service lives and how long to wait on it.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkerSettings {
    pub base_url: String,
    pub status_timeout_ms: u64,
    pub submit_timeout_ms: u64,
}

impl WorkerSettings {
    pub fn status_timeout(&self) -> Duration {
        Duration::from_millis(self.status_timeout_ms)
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Defaults, then `appsettings.{env}.*` if present, then `APP__SECTION__KEY` variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("worker.base_url", DEFAULT_WORKER_BASE_URL)?
            .set_default(
                "worker.status_timeout_ms",
                DEFAULT_STATUS_TIMEOUT.as_millis() as i64,
            )?
            .set_default("worker.submit_timeout_ms", 30000_i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", environment == Environment::Prod)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
