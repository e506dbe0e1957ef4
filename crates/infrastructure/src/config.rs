//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `config.toml` (or an explicit file), then `RIDER_`-prefixed environment
//! variables. Nested keys use a double underscore, e.g.
//! `RIDER_RIDES__BASE_URL` or `RIDER_GEOCODING__TIMEOUT_SECS`.

use std::path::Path;

use application::services::ViewportConfig;
use integration_rides::{NominatimConfig, RideServiceConfig};
use serde::{Deserialize, Serialize};

use crate::telemetry::LogFormat;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Ride backend
    #[serde(default)]
    pub rides: RideServiceConfig,

    /// Address geocoding
    #[serde(default)]
    pub geocoding: NominatimConfig,

    /// Map framing for resolved rides
    #[serde(default)]
    pub viewport: ViewportConfig,

    /// Log filter (e.g., "warn", "info,integration_rides=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "json" for structured JSON logs, "text" for human-readable
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rides: RideServiceConfig::default(),
            geocoding: NominatimConfig::default(),
            viewport: ViewportConfig::default(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// Without `path`, a `config.toml` in the working directory is used if
    /// present. An explicit `path` must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., RIDER_RIDES__TIMEOUT_SECS)
            .add_source(
                config::Environment::with_prefix("RIDER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate().map_err(config::ConfigError::Message)?;

        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        self.rides.validate()?;
        self.geocoding.validate()?;
        self.viewport.validate()?;

        if self.log_level.trim().is_empty() {
            return Err("log_level must not be empty".to_string());
        }

        Ok(())
    }
}
