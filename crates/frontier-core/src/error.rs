//! Error types for frontier-core
//!
//! Errors carry a stable code, a severity and, when converted to
//! [`ErrorDetails`], suggestions for the operator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Required form fields missing
    ValidationError,
    /// Rule id not present
    RuleNotFound,
    /// Report id not present
    ReportNotFound,
    /// Report exists but is not completed
    ReportUnavailable,
    /// Unknown dashboard or admin tab
    UnknownTab,
    /// Request body could not be decoded
    InvalidRequest,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::ValidationError => write!(f, "VALIDATION_ERROR"),
            ErrorCode::RuleNotFound => write!(f, "RULE_NOT_FOUND"),
            ErrorCode::ReportNotFound => write!(f, "REPORT_NOT_FOUND"),
            ErrorCode::ReportUnavailable => write!(f, "REPORT_UNAVAILABLE"),
            ErrorCode::UnknownTab => write!(f, "UNKNOWN_TAB"),
            ErrorCode::InvalidRequest => write!(f, "INVALID_REQUEST"),
        }
    }
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            suggestions: vec![],
        }
    }

    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.details = Some(detail);
        self
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, "\nDetails: {}", details)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    Info,
    /// Operation rejected, state unchanged
    Warning,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
        }
    }
}

/// Main error type for frontier-core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Rule not found: {id}")]
    RuleNotFound { id: String },

    #[error("Report not found: {id}")]
    ReportNotFound { id: String },

    #[error("Report {id} is not available (status: {status})")]
    ReportUnavailable { id: String, status: String },

    #[error("Unknown tab: {tab}")]
    UnknownTab { tab: String },
}

impl CoreError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::ValidationError { .. } => ErrorCode::ValidationError,
            CoreError::RuleNotFound { .. } => ErrorCode::RuleNotFound,
            CoreError::ReportNotFound { .. } => ErrorCode::ReportNotFound,
            CoreError::ReportUnavailable { .. } => ErrorCode::ReportUnavailable,
            CoreError::UnknownTab { .. } => ErrorCode::UnknownTab,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::ValidationError { .. } => ErrorSeverity::Warning,
            CoreError::RuleNotFound { .. } => ErrorSeverity::Info,
            CoreError::ReportNotFound { .. } => ErrorSeverity::Info,
            CoreError::ReportUnavailable { .. } => ErrorSeverity::Info,
            CoreError::UnknownTab { .. } => ErrorSeverity::Info,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::ValidationError { message } => {
                details = details
                    .with_detail(serde_json::json!({ "validation_message": message }))
                    .with_suggestion("Name and description are required.".to_string());
            }
            CoreError::RuleNotFound { .. } => {
                details = details.with_suggestion(
                    "Use the /api/rules endpoint to list all rules.".to_string(),
                );
            }
            CoreError::ReportNotFound { .. } => {
                details = details.with_suggestion(
                    "Use the /api/reports endpoint to list all reports.".to_string(),
                );
            }
            CoreError::ReportUnavailable { status, .. } => {
                details = details
                    .with_detail(serde_json::json!({ "status": status }))
                    .with_suggestion("Only completed reports can be viewed or downloaded.".to_string());
            }
            CoreError::UnknownTab { .. } => {
                details = details.with_suggestion(
                    "Dashboard tabs: overview, reconciliation, exceptions, analytics. Admin tabs: users, settings, audit, security."
                        .to_string(),
                );
            }
        }

        details
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

/// Error logger trait
pub trait ErrorLogger {
    fn log_error(&self, error: &CoreError, operation: &str);
}

/// Error logger backed by the log crate
#[derive(Default)]
pub struct DefaultErrorLogger;

impl ErrorLogger for DefaultErrorLogger {
    fn log_error(&self, error: &CoreError, operation: &str) {
        match error.severity() {
            ErrorSeverity::Info => log::info!(
                target: "frontier::error",
                "[{}] {} - Operation: {}",
                error.code(),
                error,
                operation
            ),
            ErrorSeverity::Warning => log::warn!(
                target: "frontier::error",
                "[{}] {} - Operation: {}",
                error.code(),
                error.to_details(),
                operation
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::ValidationError.to_string(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::RuleNotFound.to_string(), "RULE_NOT_FOUND");
        assert_eq!(ErrorCode::UnknownTab.to_string(), "UNKNOWN_TAB");
    }

    #[test]
    fn test_core_error_code_and_severity() {
        let error = CoreError::ValidationError { message: "missing name".to_string() };
        assert_eq!(error.code(), ErrorCode::ValidationError);
        assert_eq!(error.severity(), ErrorSeverity::Warning);

        let error = CoreError::RuleNotFound { id: "RULE042".to_string() };
        assert_eq!(error.code(), ErrorCode::RuleNotFound);
        assert_eq!(error.severity(), ErrorSeverity::Info);
    }

    #[test]
    fn test_error_details_validation() {
        let details = CoreError::ValidationError {
            message: "Please fill in all required fields.".to_string(),
        }
        .to_details();

        assert_eq!(details.code, ErrorCode::ValidationError);
        assert!(details.details.is_some());
        assert!(!details.suggestions.is_empty());
        assert!(details.message.contains("required fields"));
    }

    #[test]
    fn test_error_details_serialize() {
        let details = CoreError::ReportNotFound { id: "RPT999".to_string() }.to_details();
        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["code"], "REPORT_NOT_FOUND");
        assert!(value.get("details").is_none());
    }

    #[test]
    fn test_error_details_display() {
        let details = ErrorDetails::new(ErrorCode::InvalidRequest, "bad json".to_string())
            .with_suggestion("Retry".to_string());
        let text = details.to_string();
        assert!(text.starts_with("[INVALID_REQUEST] bad json"));
        assert!(text.contains("  - Retry"));
    }
}
