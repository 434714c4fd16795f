mod api;
mod session;

pub use api::*;
pub use session::*;

use serde::{Deserialize, Serialize};
use std::fmt;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Top-level config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Config validation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Severity level for a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSeverity {
    Error,
    Warning,
}

/// A single configuration validation issue.
#[derive(Debug, Clone)]
pub struct ConfigError {
    pub severity: ConfigSeverity,
    pub field: String,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            ConfigSeverity::Error => "ERROR",
            ConfigSeverity::Warning => "WARN",
        };
        write!(f, "[{tag}] {}: {}", self.field, self.message)
    }
}

impl Config {
    /// Validate the configuration and return a list of issues.
    ///
    /// Only `memchat config validate` calls this. The chat loop itself
    /// never refuses to start; a missing endpoint or token simply shows
    /// up as a failed exchange.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let resolved = self.api.resolve();

        if resolved.endpoint.is_empty() {
            errors.push(ConfigError {
                severity: ConfigSeverity::Warning,
                field: "api.endpoint".into(),
                message: format!(
                    "no endpoint configured and ${} is unset",
                    self.api.endpoint_env
                ),
            });
        }

        if resolved.api_key.is_empty() {
            errors.push(ConfigError {
                severity: ConfigSeverity::Warning,
                field: "api.api_key".into(),
                message: format!(
                    "no API key configured and ${} is unset",
                    self.api.api_key_env
                ),
            });
        }

        if self.api.timeout_ms == 0 {
            errors.push(ConfigError {
                severity: ConfigSeverity::Error,
                field: "api.timeout_ms".into(),
                message: "timeout must be greater than 0".into(),
            });
        }

        if self.session.user_name.trim().is_empty() {
            errors.push(ConfigError {
                severity: ConfigSeverity::Error,
                field: "session.user_name".into(),
                message: "user name must not be empty".into(),
            });
        }

        if self.session.bot_name_file.as_os_str().is_empty() {
            errors.push(ConfigError {
                severity: ConfigSeverity::Error,
                field: "session.bot_name_file".into(),
                message: "bot name file path must not be empty".into(),
            });
        }

        errors
    }
}
