// src/error.rs

//! Error types for the snapd client.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to snapd.
#[derive(Debug, Error)]
pub enum Error {
    /// Socket connect/read/write failure, propagated unmodified.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed HTTP framing in the daemon's response.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// A JSON response that did not decode into the expected envelope.
    #[error("invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),

    /// snapd answered with an error status (>= 400).
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// An error response from snapd's REST API.
///
/// Carries the raw response body; [`ApiError::json`] decodes it on demand,
/// since error bodies are usually (but not always) JSON.
#[derive(Debug, Error)]
#[error("snapd returned status {status_code}")]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status_code: u16,
    /// Raw response body, undecoded.
    pub body: Vec<u8>,
}

impl ApiError {
    /// Parse the error body as JSON.
    ///
    /// Returns `None` when the body is empty or not valid JSON.
    pub fn json(&self) -> Option<serde_json::Value> {
        if self.body.is_empty() {
            return None;
        }
        serde_json::from_slice(&self.body).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_decodes_json_body() {
        let err = ApiError {
            status_code: 404,
            body: br#"{"type":"error","result":{"message":"not found"}}"#.to_vec(),
        };

        let json = err.json().unwrap();
        assert_eq!(json["result"]["message"], "not found");
    }

    #[test]
    fn api_error_empty_body_has_no_json() {
        let err = ApiError {
            status_code: 500,
            body: Vec::new(),
        };
        assert!(err.json().is_none());
    }

    #[test]
    fn api_error_non_json_body_has_no_json() {
        let err = ApiError {
            status_code: 502,
            body: b"bad gateway".to_vec(),
        };
        assert!(err.json().is_none());
    }
}
