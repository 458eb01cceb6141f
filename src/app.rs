//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use std::process::ExitCode;

use tracing::Level;
use tracing_subscriber::EnvFilter;
use zoneedit_ddns::config::ConfigError;
use zoneedit_ddns::report::{RunStatus, Verbosity};

use crate::run::RunError;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    use super::{RunError, RunStatus};

    /// Every update succeeded (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration or IP determination failed before any update (exit code 2).
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn config_error() -> ExitCode {
        RunStatus::Aborted.into()
    }

    /// Maps a failed run to the status the process exits with.
    ///
    /// Output failures happen after the updates were sent.
    pub const fn status_for(error: &RunError) -> RunStatus {
        match error {
            RunError::Output(_) => RunStatus::UpdateFailed,
            RunError::Config(_) | RunError::NoIpAvailable | RunError::Detect(_) => {
                RunStatus::Aborted
            }
        }
    }
}

/// Prints a failed run to stderr and returns its exit code.
pub fn report_failure(error: &RunError) -> ExitCode {
    eprintln!("Error: {error}");
    if let RunError::Config(config_error) = error {
        print_config_hint(config_error);
    }
    exit_code::status_for(error).into()
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingCredentials | ConfigError::MissingHosts => {
            eprintln!("\nRun 'zoneedit-ddns init' to generate a configuration template.");
        }
        ConfigError::AlreadyExists { .. } => {
            eprintln!("\nPass --force to replace it, or -o to choose another path.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for diagnostics on stderr.
///
/// Standard output is reserved for the result lines.
pub fn setup_tracing(verbosity: Verbosity) {
    let level = match verbosity {
        Verbosity::Quiet => Level::ERROR,
        Verbosity::Normal => Level::WARN,
        Verbosity::Verbose => Level::DEBUG,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
