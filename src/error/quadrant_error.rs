//! Unified error type for quadrant.

use thiserror::Error;

use super::category::ErrorCategory;
use super::cli::CliError;
use super::navigation::NavigationError;

/// Unified error type consolidating the domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuadrantError {
    /// History/document host failures.
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// Route inspector argument errors.
    #[error(transparent)]
    Cli(#[from] CliError),

    /// Invalid configuration value.
    #[error("Invalid value '{value}' for {key}")]
    Config { key: String, value: String },
}

impl QuadrantError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            QuadrantError::Navigation(_) => ErrorCategory::Navigation,
            QuadrantError::Cli(_) => ErrorCategory::User,
            QuadrantError::Config { .. } => ErrorCategory::Configuration,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            QuadrantError::Navigation(err) => err.user_message(),
            QuadrantError::Cli(err) => err.user_message(),
            QuadrantError::Config { key, .. } => {
                format!("{} has an unsupported value. {}", key, self.recovery_hint())
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            QuadrantError::Navigation(err) => err.error_code(),
            QuadrantError::Cli(err) => err.error_code(),
            QuadrantError::Config { .. } => "E_CONFIG",
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}
