//! Error types for the Gemini API client.

use thiserror::Error;

/// Errors that can occur when interacting with the Gemini API.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned an error.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code of the error response.
        status: u16,
        /// Error message.
        message: String,
    },

    /// Failed to parse the response or its structured payload.
    #[error("parse error: {0}")]
    Parse(String),
}

/// API error response envelope from the Generative Language API.
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorResponse {
    /// Nested error details.
    pub error: ApiError,
}

/// Nested error details.
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    /// Numeric error code.
    pub code: i32,
    /// Error message.
    pub message: String,
}
