//! Command-line errors for the route inspector.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("Unknown flag: {flag}")]
    UnknownFlag { flag: String },

    #[error("Missing value for {flag}")]
    MissingValue { flag: String },

    #[error("Invalid step '{step}': {reason}")]
    InvalidStep { step: String, reason: String },

    #[error("Invalid language '{value}' (expected ko or en)")]
    InvalidLanguage { value: String },
}

impl CliError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        format!("{}. Run `quadrant --help` for usage.", self)
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            CliError::UnknownFlag { .. } => "E_CLI_FLAG",
            CliError::MissingValue { .. } => "E_CLI_VALUE",
            CliError::InvalidStep { .. } => "E_CLI_STEP",
            CliError::InvalidLanguage { .. } => "E_CLI_LANG",
        }
    }
}
