use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for advice client operations
pub type Result<T> = std::result::Result<T, AdviceError>;

/// Every failure the client can produce.
///
/// The first group mirrors what can go wrong on the wire and is what the
/// error classifier inspects. Transport failures are decoded into these
/// variants once, inside the HTTP client, so nothing downstream has to poke
/// at `reqwest::Error`.
#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("Request to {url} failed with status {status}")]
    Status {
        status: u16,
        url: String,
        /// Human-readable `detail` string supplied by the backend, if any
        detail: Option<String>,
        body: String,
    },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("Network error while contacting {url}: {message}")]
    Network { url: String, message: String },

    #[error("Request was cancelled")]
    Cancelled,

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Failed to decode response body (status {status}): {message}")]
    Decode { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Invalid home profile field '{field}': {message}")]
    InvalidProfile { field: String, message: String },
}

impl AdviceError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new invalid profile error
    pub fn invalid_profile<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::InvalidProfile {
            field: field.into(),
            message: message.into(),
        }
    }

    /// HTTP status of the response that caused this error, if one arrived
    pub fn response_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server answered at all
    pub fn has_response(&self) -> bool {
        self.response_status().is_some()
    }

    /// Server-supplied detail message, when the backend sent one
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            Self::Status {
                detail: Some(detail),
                ..
            } => Some(detail.as_str()),
            _ => None,
        }
    }

    /// Map a `reqwest` failure that happened before any response was read.
    pub(crate) fn from_transport(err: reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else if err.is_connect() {
            Self::Network {
                url: url.to_string(),
                message: err.to_string(),
            }
        } else {
            Self::Transport {
                message: err.to_string(),
            }
        }
    }
}
