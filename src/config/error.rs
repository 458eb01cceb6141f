//! Error types for configuration loading and resolution.

use std::path::PathBuf;

use thiserror::Error;

use super::Source;

/// Error type for configuration operations.
///
/// Every variant is fatal: the run stops before any update request is sent.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// User name or token is absent from every source.
    #[error("ZoneEdit user/token required (via CLI, .env, environment, or config file)")]
    MissingCredentials,

    /// No source supplied a host, or the winning source supplied an empty list.
    #[error("At least one --host (or hosts in .env, environment, or config file) is required")]
    MissingHosts,

    /// A configuration file exists but could not be read or parsed,
    /// or an explicitly requested file does not exist.
    #[error("Failed to read {origin} '{}': {reason}", path.display())]
    UnreadableSource {
        /// Which source the file backs
        origin: Source,
        /// Path of the file
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// The explicit IP is not a valid IPv4 address.
    #[error("Invalid IPv4 address '{value}' (from {origin})")]
    InvalidIp {
        /// Source that supplied the address
        origin: Source,
        /// The rejected value
        value: String,
    },

    /// The timeout is zero, negative, or not finite.
    #[error("Invalid timeout {value} (from {origin}): must be a positive number of seconds")]
    InvalidTimeout {
        /// Source that supplied the timeout
        origin: Source,
        /// The rejected value
        value: f64,
    },

    /// A key/value source held a value that could not be parsed.
    #[error("Invalid value '{value}' for {key} (from {origin})")]
    InvalidValue {
        /// Source that supplied the value
        origin: Source,
        /// Key name
        key: &'static str,
        /// The rejected value
        value: String,
    },

    /// Failed to write the configuration template (for the init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Refused to overwrite an existing file (for the init command).
    #[error("Config file '{}' already exists (use --force to overwrite)", path.display())]
    AlreadyExists {
        /// Path to the existing file
        path: PathBuf,
    },
}

impl ConfigError {
    /// Creates an `UnreadableSource` error.
    pub fn unreadable(origin: Source, path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::UnreadableSource {
            origin,
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
