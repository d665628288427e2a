//! Custom error types and handling
//!
//! This module defines the application's error types and the message
//! resolution used when a failure is surfaced to the end user.

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Guard errors
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Action not allowed from the current status")]
    IllegalTransition,

    #[error("Conflict: {0}")]
    Conflict(String),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Resource errors
    #[error("Not found: {0}")]
    NotFound(String),

    // Backend errors
    /// The backend answered with `result == false`; the payload message, if
    /// any, is the highest-priority text to show the user.
    #[error("Backend rejected the request")]
    Api { message: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed backend response: {0}")]
    Decode(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Forbidden(_) => "FORBIDDEN",
            Self::IllegalTransition => "ILLEGAL_TRANSITION",
            Self::Conflict(_) => "CONFLICT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Api { .. } => "API_ERROR",
            Self::Network(_) => "NETWORK_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Resolve the text shown to the user for this failure.
    ///
    /// Priority: message nested in the backend response, then the error's
    /// own message, then the caller-supplied static fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api { message: Some(m) } if !m.trim().is_empty() => m.clone(),
            Self::Api { .. } => fallback.to_string(),
            Self::Internal(e) => {
                // Log internal details but don't expose them to the user
                tracing::error!("Internal error: {:?}", e);
                fallback.to_string()
            }
            Self::Network(m) | Self::Decode(m) if !m.trim().is_empty() => m.clone(),
            _ => {
                let own = self.to_string();
                if own.trim().is_empty() {
                    fallback.to_string()
                } else {
                    own
                }
            }
        }
    }
}

// Implement From for common error types
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
