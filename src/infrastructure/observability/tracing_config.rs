/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// Filter used when `RUST_LOG` is unset.
    pub default_filter: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            default_filter: "info,etl_tracker=debug,tower_http=debug".to_string(),
        }
    }
}

impl TracingConfig {
    /// Builds the config from a log level, keeping `LOG_FORMAT=json` as an override.
    pub fn new(environment: impl Into<String>, level: &str, json_format: bool) -> Self {
        let defaults = Self::default();
        Self {
            environment: environment.into(),
            json_format: json_format || defaults.json_format,
            default_filter: format!("{level},etl_tracker={level},tower_http={level}"),
        }
    }
}
