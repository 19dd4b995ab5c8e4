//! Error types for the API client.

use crate::hydrate::HydrationError;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP request failed (connection error, timeout, or unreadable body).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not valid JSON.
    #[error("Failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
    /// The decoded body could not be mapped onto the target type.
    #[error(transparent)]
    Hydration(#[from] HydrationError),
    /// The configured base URL or an endpoint path did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// A static header name or value was rejected.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
    /// Required configuration was missing or unreadable.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// True for network-level and HTTP status failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::HttpStatus { .. })
    }

    pub fn is_hydration(&self) -> bool {
        matches!(self, Error::Hydration(_))
    }

    /// HTTP status code, when the server answered with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
