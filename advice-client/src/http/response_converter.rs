use crate::error::{AdviceError, Result};
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Turns a `reqwest` response into a decoded payload or an `AdviceError`
#[derive(Debug, Clone, Default)]
pub struct ResponseConverter;

impl ResponseConverter {
    /// Create a new response converter
    pub fn new() -> Self {
        Self
    }

    /// Read the body and decode it as `T`, or build a `Status` error for
    /// non-2xx responses.
    pub async fn convert_response<T>(&self, response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let url = response.url().to_string();

        let body = response
            .text()
            .await
            .map_err(|e| AdviceError::from_transport(e, &url))?;

        if !status.is_success() {
            return Err(AdviceError::Status {
                status: status.as_u16(),
                detail: extract_detail(&body),
                url,
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| AdviceError::Decode {
            status: status.as_u16(),
            message: e.to_string(),
        })
    }
}

/// Pull a human-readable `detail` string out of an error body.
///
/// Validation errors may carry a list under `detail`; only plain, non-empty
/// strings count as a message meant for people. The text is kept as sent.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(|detail| detail.as_str())
        .filter(|detail| !detail.is_empty())
        .map(str::to_string)
}
