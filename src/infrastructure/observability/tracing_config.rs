use crate::presentation::config::{Environment, Settings};

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: Environment,
    pub level: String,
    pub json_format: bool,
}

impl TracingConfig {
    /// JSON output is always used in production.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            environment: settings.environment,
            level: settings.logging.level.clone(),
            json_format: settings.logging.enable_json || settings.environment.is_production(),
        }
    }

    pub fn filter_directive(&self) -> String {
        format!("{},folio={},tower_http=debug", self.level, self.level)
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            level: "info".to_string(),
            json_format: false,
        }
    }
}
