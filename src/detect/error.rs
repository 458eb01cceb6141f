//! Error types for IP detection.

use std::fmt;

use thiserror::Error;

/// Why a single detection endpoint was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectAttempt {
    /// The endpoint that was contacted
    pub endpoint: url::Url,
    /// Human-readable reason it was rejected
    pub reason: String,
}

impl fmt::Display for DetectAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.endpoint, self.reason)
    }
}

/// Error type for IP detection.
#[derive(Debug, Error)]
pub enum DetectError {
    /// No endpoint returned a valid IPv4 address.
    #[error("Failed to auto-detect public IPv4: {}", summarize(.attempts))]
    AllSourcesFailed {
        /// One entry per endpoint, in the order they were tried
        attempts: Vec<DetectAttempt>,
    },
}

fn summarize(attempts: &[DetectAttempt]) -> String {
    if attempts.is_empty() {
        return "no detection endpoints configured".to_string();
    }
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
