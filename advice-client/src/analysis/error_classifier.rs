//! Maps raw client failures to messages that can be shown to end users.
//! Technical detail goes to the log, never into the message.

use crate::error::AdviceError;
use std::error::Error as StdError;
use std::fmt;

/// Context used when the caller does not name one
pub const DEFAULT_CONTEXT: &str = "processing your request";

/// Suggested action attached to server-supplied detail messages
const DETAIL_SUGGESTED_ACTION: &str = "Please try again.";

/// User-facing failure categories, in classification precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The backend sent its own human-readable message
    ServerDetail,
    NotFound,
    /// 422: the backend understood the request but could not process it
    Processing,
    RateLimited,
    /// Any other 4xx
    Client,
    Server,
    Cancelled,
    Network,
    Timeout,
    Unknown,
}

impl ErrorCategory {
    /// Canned message, retry hint and suggested action.
    ///
    /// `ServerDetail` has no canned message; its text comes from the backend.
    fn template(self) -> Option<(&'static str, bool, &'static str)> {
        let template = match self {
            Self::ServerDetail => return None,
            Self::NotFound => (
                "The requested information could not be found.",
                false,
                "Please refresh the page and try again.",
            ),
            Self::Processing => (
                "We couldn't process your request at this time.",
                true,
                "Please try again in a moment.",
            ),
            Self::RateLimited => (
                "You've made too many requests.",
                true,
                "Please wait a moment and try again.",
            ),
            Self::Client => (
                "Invalid information provided.",
                false,
                "Please check your inputs and try again.",
            ),
            Self::Server => (
                "Our service is experiencing issues.",
                true,
                "Our team has been notified. Please try again in a few minutes.",
            ),
            Self::Cancelled => (
                "The request was cancelled.",
                true,
                "Please try again if needed.",
            ),
            Self::Network => (
                "Unable to connect to our service.",
                true,
                "Please check your internet connection and try again.",
            ),
            Self::Timeout => (
                "The request took too long.",
                true,
                "Please check your connection and try again.",
            ),
            Self::Unknown => (
                "Something unexpected happened.",
                true,
                "Please try again. If the problem persists, contact support.",
            ),
        };
        Some(template)
    }
}

/// A failure translated for the end user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFriendlyError {
    pub category: ErrorCategory,
    pub message: String,
    pub can_retry: bool,
    pub suggested_action: Option<String>,
}

impl UserFriendlyError {
    /// The canned error for a category.
    ///
    /// `ServerDetail` carries backend text, so without that text it falls
    /// back to `Unknown`; use `from_detail` when the detail is at hand.
    pub fn for_category(category: ErrorCategory) -> Self {
        let Some((message, can_retry, action)) = category.template() else {
            return Self::for_category(ErrorCategory::Unknown);
        };
        Self {
            category,
            message: message.to_string(),
            can_retry,
            suggested_action: Some(action.to_string()),
        }
    }

    /// Wrap a message supplied by the backend
    pub fn from_detail<S: Into<String>>(detail: S) -> Self {
        Self {
            category: ErrorCategory::ServerDetail,
            message: detail.into(),
            can_retry: true,
            suggested_action: Some(DETAIL_SUGGESTED_ACTION.to_string()),
        }
    }

    /// Message and suggested action joined by a single space
    pub fn format_for_display(&self) -> String {
        match &self.suggested_action {
            Some(action) => format!("{} {}", self.message, action),
            None => self.message.clone(),
        }
    }
}

impl fmt::Display for UserFriendlyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_for_display())
    }
}

/// Pick the category for a failure. First match wins.
pub fn categorize(error: &AdviceError) -> ErrorCategory {
    if error.server_detail().is_some() {
        return ErrorCategory::ServerDetail;
    }

    match error.response_status() {
        Some(404) => return ErrorCategory::NotFound,
        Some(422) => return ErrorCategory::Processing,
        Some(429) => return ErrorCategory::RateLimited,
        Some(400..=499) => return ErrorCategory::Client,
        Some(status) if status >= 500 => return ErrorCategory::Server,
        _ => {}
    }

    match error {
        AdviceError::Cancelled => return ErrorCategory::Cancelled,
        AdviceError::Network { .. } => return ErrorCategory::Network,
        AdviceError::Timeout { .. } => return ErrorCategory::Timeout,
        AdviceError::Transport { message } if message.contains("timeout") => {
            return ErrorCategory::Timeout
        }
        _ => {}
    }

    if !error.has_response() {
        return ErrorCategory::Network;
    }

    ErrorCategory::Unknown
}

/// Convert a failure into a user-friendly error without logging
pub fn classify(error: &AdviceError) -> UserFriendlyError {
    match categorize(error) {
        ErrorCategory::ServerDetail => {
            UserFriendlyError::from_detail(error.server_detail().unwrap_or_default())
        }
        category => UserFriendlyError::for_category(category),
    }
}

/// Log the technical details of a failure and convert it for display
pub fn handle_error(error: &AdviceError, context: &str) -> UserFriendlyError {
    let friendly = classify(error);

    let mut chain = Vec::new();
    let mut source = error.source();
    while let Some(cause) = source {
        chain.push(cause.to_string());
        source = cause.source();
    }

    let body = match error {
        AdviceError::Status { body, .. } => Some(body.as_str()),
        _ => None,
    };

    tracing::error!(
        context,
        category = ?friendly.category,
        status = ?error.response_status(),
        body = ?body,
        causes = ?chain,
        error = %error,
        "error while {}",
        context
    );

    friendly
}

/// Message and suggested action for display
pub fn format_error_for_display(error: &UserFriendlyError) -> String {
    error.format_for_display()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16, detail: Option<&str>) -> AdviceError {
        AdviceError::Status {
            status,
            url: "http://localhost:8000/api/homes".to_string(),
            detail: detail.map(str::to_string),
            body: String::new(),
        }
    }

    #[test]
    fn test_server_detail_wins_over_status() {
        let friendly = classify(&status(404, Some("Home not found")));

        assert_eq!(friendly.category, ErrorCategory::ServerDetail);
        assert_eq!(friendly.message, "Home not found");
        assert!(friendly.can_retry);
        assert_eq!(friendly.format_for_display(), "Home not found Please try again.");
    }

    #[test]
    fn test_status_buckets() {
        let cases = [
            (404, ErrorCategory::NotFound, false),
            (422, ErrorCategory::Processing, true),
            (429, ErrorCategory::RateLimited, true),
            (400, ErrorCategory::Client, false),
            (403, ErrorCategory::Client, false),
            (500, ErrorCategory::Server, true),
            (503, ErrorCategory::Server, true),
            (504, ErrorCategory::Server, true),
        ];

        for (code, category, can_retry) in cases {
            let friendly = classify(&status(code, None));
            assert_eq!(friendly.category, category, "status {code}");
            assert_eq!(friendly.can_retry, can_retry, "status {code}");
        }
    }

    #[test]
    fn test_rate_limit_message() {
        let friendly = classify(&status(429, None));
        assert_eq!(friendly.message, "You've made too many requests.");
        assert!(friendly.can_retry);
    }

    #[test]
    fn test_transport_conditions() {
        assert_eq!(categorize(&AdviceError::Cancelled), ErrorCategory::Cancelled);
        assert_eq!(
            categorize(&AdviceError::Network {
                url: "u".to_string(),
                message: "connection refused".to_string()
            }),
            ErrorCategory::Network
        );
        assert_eq!(
            categorize(&AdviceError::Timeout {
                url: "u".to_string()
            }),
            ErrorCategory::Timeout
        );
        assert_eq!(
            categorize(&AdviceError::Transport {
                message: "operation timeout after 120s".to_string()
            }),
            ErrorCategory::Timeout
        );
    }

    #[test]
    fn test_no_response_is_network_error() {
        let friendly = classify(&AdviceError::Transport {
            message: "connection reset by peer".to_string(),
        });
        assert_eq!(friendly.category, ErrorCategory::Network);
        assert!(friendly.can_retry);
        assert_eq!(friendly.message, "Unable to connect to our service.");
    }

    #[test]
    fn test_response_without_known_status_is_unknown() {
        let friendly = classify(&AdviceError::Decode {
            status: 200,
            message: "missing field `summary`".to_string(),
        });
        assert_eq!(friendly.category, ErrorCategory::Unknown);
        assert_eq!(friendly.message, "Something unexpected happened.");
        assert!(friendly.can_retry);
    }

    #[test]
    fn test_server_detail_category_without_text_is_unknown() {
        let friendly = UserFriendlyError::for_category(ErrorCategory::ServerDetail);
        assert_eq!(friendly, UserFriendlyError::for_category(ErrorCategory::Unknown));
        assert_eq!(friendly.category, ErrorCategory::Unknown);

        let from_backend = UserFriendlyError::from_detail("Home not found");
        assert_eq!(from_backend.category, ErrorCategory::ServerDetail);
        assert_eq!(from_backend.format_for_display(), "Home not found Please try again.");
    }

    #[test]
    fn test_display_without_action() {
        let friendly = UserFriendlyError {
            category: ErrorCategory::Unknown,
            message: "Plain".to_string(),
            can_retry: true,
            suggested_action: None,
        };
        assert_eq!(format_error_for_display(&friendly), "Plain");
        assert_eq!(friendly.to_string(), "Plain");
    }

    #[test]
    fn test_handle_error_matches_classify() {
        let err = status(500, None);
        assert_eq!(handle_error(&err, DEFAULT_CONTEXT), classify(&err));
    }
}
