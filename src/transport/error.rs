//! Error types for HTTP operations.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Every variant means no response was obtained. Callers never retry;
/// a failed request is reported and the run moves on.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request could not be built (e.g. credentials not encodable as a header).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
