use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error")]
    Transport(#[from] reqwest::Error),

    #[error("Login failed: {0}")]
    Authentication(StatusCode),

    #[error("Error decoding login response")]
    Decode(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    Api(StatusCode),
}

/// Maximum length for error response bodies in log output
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    pub(crate) fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
    }

    /// Status code the server answered with, if the failure was a rejection
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Authentication(status) | ApiError::Api(status) => Some(*status),
            ApiError::Transport(err) => err.status(),
            ApiError::Decode(_) => None,
        }
    }
}
