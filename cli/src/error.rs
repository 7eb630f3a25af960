use advice_client::{handle_error, AdviceError, UserFriendlyError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Client error: {0}")]
    Client(#[from] AdviceError),

    #[error("{0}")]
    Friendly(UserFriendlyError),

    #[error("Failed to encode JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Dialoguer error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    /// Convert a failed API call into its user-facing form, logging the
    /// technical details on the way.
    pub fn from_api_failure(err: AdviceError, context: &str) -> Self {
        Self::Friendly(handle_error(&err, context))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Client(err) => match err {
                AdviceError::InvalidProfile { field, message } => {
                    format!("Invalid home profile, {field} {message}")
                }
                AdviceError::ConfigNotFound { path } => {
                    format!("File not found: {}", path.display())
                }
                other => other.to_string(),
            },
            Self::Friendly(friendly) => friendly.format_for_display(),
            Self::JsonError(err) => format!("Failed to encode JSON: {err}"),
            Self::DialoguerError(err) => format!("UI interaction error: {err}"),
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

pub trait ResultExt<T, E> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: Into<CliError>,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let cli_err: CliError = err.into();
            cli_err.with_context(context())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_failure_shows_only_friendly_text() {
        let err = CliError::from_api_failure(
            AdviceError::Status {
                status: 500,
                url: "http://localhost:8000/api/homes".to_string(),
                detail: None,
                body: "Traceback (most recent call last): ...".to_string(),
            },
            "loading home",
        );

        let message = err.user_message();
        assert_eq!(
            message,
            "Our service is experiencing issues. Our team has been notified. Please try again in a few minutes."
        );
        assert!(!message.contains("Traceback"));
    }

    #[test]
    fn test_context_is_prefixed() {
        let result: std::result::Result<(), AdviceError> = Err(AdviceError::invalid_profile(
            "num_floors",
            "must be between 1 and 10, got 12",
        ));
        let err = result.with_context(|| "Checking home profile").unwrap_err();
        assert_eq!(
            err.user_message(),
            "Checking home profile: Invalid home profile, num_floors must be between 1 and 10, got 12"
        );
    }
}
