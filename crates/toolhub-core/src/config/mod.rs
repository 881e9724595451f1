//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod cmp;
pub mod logging;
pub mod validation;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::cmp::CmpConfig;
pub use self::logging::LoggingConfig;
pub use self::validation::ValidationConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Remote DAM platform settings.
    #[serde(default)]
    pub cmp: CmpConfig,
    /// Asset validation rules.
    #[serde(default)]
    pub validation: ValidationConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `TOOLHUB_`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("TOOLHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject values the services cannot run with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.cmp.page_size == 0 {
            return Err(AppError::configuration("cmp.page_size must be at least 1"));
        }
        if self.validation.probe_concurrency == 0 {
            return Err(AppError::configuration(
                "validation.probe_concurrency must be at least 1",
            ));
        }
        if self.cmp.client_id.is_some() != self.cmp.client_secret.is_some() {
            return Err(AppError::configuration(
                "cmp.client_id and cmp.client_secret must be set together",
            ));
        }
        Ok(())
    }
}
