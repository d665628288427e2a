//! Application configuration management
//!
//! This module handles loading and validating configuration from environment
//! variables. All configuration is loaded once and validated before use.

use std::env;
use std::sync::LazyLock;

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECONDS};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub policy: PolicyConfig,
}

/// Backend API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the REST backend, without a trailing slash
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

/// Behavioral policy knobs
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    /// How the name field of a newly created subtask is pre-filled
    pub subtask_naming: SubtaskNaming,
}

/// Naming policy for newly created subtasks.
///
/// The backend accepts any name; `InheritParent` reproduces the historical
/// behavior of copying the parent task's name verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubtaskNaming {
    #[default]
    InheritParent,
    Blank,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api: ApiConfig::from_env()?,
            policy: PolicyConfig::from_env()?,
        })
    }
}

impl ApiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env::var("EDUSIM_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            timeout_seconds: env::var("EDUSIM_API_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| DEFAULT_API_TIMEOUT_SECONDS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("EDUSIM_API_TIMEOUT_SECONDS".to_string()))?,
        })
    }
}

impl PolicyConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let subtask_naming = match env::var("EDUSIM_SUBTASK_NAMING") {
            Ok(value) => match value.as_str() {
                "inherit_parent" => SubtaskNaming::InheritParent,
                "blank" => SubtaskNaming::Blank,
                _ => return Err(ConfigError::InvalidValue("EDUSIM_SUBTASK_NAMING".to_string())),
            },
            Err(_) => SubtaskNaming::default(),
        };

        Ok(Self { subtask_naming })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
