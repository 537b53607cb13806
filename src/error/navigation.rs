//! Navigation host errors.
//!
//! These come from the history/document host behind the router, never from
//! route parsing itself.

use thiserror::Error;

/// Failure reported by a `NavigationProvider` or `DocumentHost`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The host has no usable history object.
    #[error("History API unavailable: {message}")]
    HistoryUnavailable { message: String },

    /// The host has no document to annotate.
    #[error("Document unavailable: {message}")]
    DocumentUnavailable { message: String },

    /// `pushState` was rejected.
    #[error("Failed to push history entry '{path}': {message}")]
    PushFailed { path: String, message: String },

    /// `replaceState` was rejected.
    #[error("Failed to replace history entry '{path}': {message}")]
    ReplaceFailed { path: String, message: String },

    /// The pop-state listener could not be registered.
    #[error("Failed to register popstate listener: {message}")]
    ListenerFailed { message: String },

    /// The route payload could not be encoded for the history entry.
    #[error("Failed to encode history state: {message}")]
    StatePayload { message: String },
}

impl NavigationError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NavigationError::HistoryUnavailable { .. }
            | NavigationError::DocumentUnavailable { .. } => {
                "This browser does not support in-page navigation.".to_string()
            }
            NavigationError::PushFailed { path, .. }
            | NavigationError::ReplaceFailed { path, .. } => {
                format!("Could not open {}. Please try again.", path)
            }
            NavigationError::ListenerFailed { .. } => {
                "Back and forward buttons may not update the page.".to_string()
            }
            NavigationError::StatePayload { .. } => {
                "Could not save the page state. Please try again.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NavigationError::HistoryUnavailable { .. } => "E_NAV_HISTORY",
            NavigationError::DocumentUnavailable { .. } => "E_NAV_DOCUMENT",
            NavigationError::PushFailed { .. } => "E_NAV_PUSH",
            NavigationError::ReplaceFailed { .. } => "E_NAV_REPLACE",
            NavigationError::ListenerFailed { .. } => "E_NAV_LISTENER",
            NavigationError::StatePayload { .. } => "E_NAV_PAYLOAD",
        }
    }
}

impl From<serde_json::Error> for NavigationError {
    fn from(err: serde_json::Error) -> Self {
        NavigationError::StatePayload {
            message: err.to_string(),
        }
    }
}
