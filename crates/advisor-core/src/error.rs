//! Error Types

use thiserror::Error;

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Advisor error types
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Submission did not carry a risk tolerance value
    #[error("Risk tolerance is required.")]
    MissingRiskTolerance,

    /// Risk tolerance value outside the supported set
    #[error("Unsupported risk tolerance option.")]
    UnsupportedRiskTolerance(String),

    /// Submission carried no documents
    #[error("Please upload at least one document describing the portfolio.")]
    NoFilesProvided,

    /// A document exceeded the per-file size ceiling
    #[error("{0} exceeds the 5MB size limit.")]
    FileTooLarge(String),

    /// Malformed multipart payload or unreadable upload
    #[error("Invalid submission: {0}")]
    Submission(String),

    /// Completion service call failed (network, non-2xx, undecodable envelope)
    #[error("Completion service error: {0}")]
    Completion(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl AdvisorError {
    /// Check if error is a client-side validation failure (HTTP 400)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AdvisorError::MissingRiskTolerance
                | AdvisorError::UnsupportedRiskTolerance(_)
                | AdvisorError::NoFilesProvided
                | AdvisorError::FileTooLarge(_)
                | AdvisorError::Submission(_)
        )
    }

    /// Check if error is retryable by resubmitting
    pub fn is_retryable(&self) -> bool {
        matches!(self, AdvisorError::Completion(_))
    }

    /// Convert to a user-friendly message
    ///
    /// Validation errors surface their own message; completion failures
    /// collapse into one fixed retry-suggesting sentence so the underlying
    /// cause never leaks to the caller.
    pub fn user_message(&self) -> String {
        match self {
            AdvisorError::MissingRiskTolerance
            | AdvisorError::UnsupportedRiskTolerance(_)
            | AdvisorError::NoFilesProvided
            | AdvisorError::FileTooLarge(_)
            | AdvisorError::Submission(_) => self.to_string(),
            AdvisorError::Completion(_) => {
                "We couldn't analyze the portfolio right now. Please retry in a moment or verify the server configuration.".into()
            }
            _ => "An unexpected error occurred.".into(),
        }
    }
}

impl From<anyhow::Error> for AdvisorError {
    fn from(err: anyhow::Error) -> Self {
        AdvisorError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(AdvisorError::MissingRiskTolerance.is_validation());
        assert!(AdvisorError::FileTooLarge("notes.txt".into()).is_validation());
        assert!(!AdvisorError::Completion("timeout".into()).is_validation());
    }

    #[test]
    fn test_oversized_file_names_the_file() {
        let err = AdvisorError::FileTooLarge("holdings.csv".into());
        assert_eq!(err.user_message(), "holdings.csv exceeds the 5MB size limit.");
    }

    #[test]
    fn test_completion_failure_hides_cause() {
        let err = AdvisorError::Completion("connection reset by peer".into());
        assert!(err.is_retryable());
        assert!(!err.user_message().contains("connection reset"));
        assert!(err.user_message().contains("Please retry"));
    }
}
