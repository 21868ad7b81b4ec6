//! Submission state.

use serde::{Deserialize, Serialize};

/// Banner text shown when the write fails.
pub const SUBMISSION_ERROR_MESSAGE: &str =
    "Hubo un error al registrar. Por favor, intenta de nuevo.";

/// Where a form instance is in its submission lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionState::Success)
    }

    /// Banner message for the `Error` state.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Whether field values may change.
    pub fn is_editable(&self) -> bool {
        !self.is_success()
    }

    /// Short label for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Success => "success",
            SubmissionState::Error(_) => "error",
        }
    }
}

impl std::fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SubmissionState::default(), SubmissionState::Idle);
    }

    #[test]
    fn test_error_message() {
        let state = SubmissionState::Error(SUBMISSION_ERROR_MESSAGE.to_string());
        assert_eq!(
            state.error_message(),
            Some("Hubo un error al registrar. Por favor, intenta de nuevo.")
        );
        assert!(state.is_editable());
        assert!(SubmissionState::Idle.error_message().is_none());
    }

    #[test]
    fn test_success_is_not_editable() {
        assert!(!SubmissionState::Success.is_editable());
        assert!(SubmissionState::Submitting.is_editable());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(SubmissionState::Error("x".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({"status": "error", "message": "x"}));
    }
}
