//! Error category classification for unified error handling.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The history or document host rejected an operation.
    /// Navigation is idempotent, so the request can be repeated.
    Navigation,

    /// User action required (invalid input).
    User,

    /// Configuration errors (invalid environment settings).
    Configuration,
}

impl ErrorCategory {
    /// Returns true if the failed operation can be attempted again as-is.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Navigation)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Navigation => "navigation",
            ErrorCategory::User => "user",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Navigation => "Reload the page and try the link again.",
            ErrorCategory::User => "Check the command line and try again.",
            ErrorCategory::Configuration => "Check the QUADRANT_* environment variables.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
