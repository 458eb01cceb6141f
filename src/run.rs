//! Application execution logic.
//!
//! Determines the IP to publish, updates every host, and reports the results.

use std::io::Write;
use std::net::Ipv4Addr;

use thiserror::Error;

use zoneedit_ddns::config::{ConfigError, ResolvedConfig};
use zoneedit_ddns::detect::{DetectError, IpDetector};
use zoneedit_ddns::report::{RunStatus, report};
use zoneedit_ddns::transport::HttpClient;
use zoneedit_ddns::update::UpdateExecutor;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for failures of a single run.
#[derive(Debug, Error)]
pub enum RunError {
    /// Configuration could not be resolved or written.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No explicit IP was given and detection is disabled.
    #[error("--ip not provided and --no-detect set")]
    NoIpAvailable,

    /// No explicit IP was given and every detection endpoint failed.
    #[error(transparent)]
    Detect(#[from] DetectError),

    /// Writing the result lines failed.
    #[error("Failed to write results: {0}")]
    Output(#[source] std::io::Error),
}

/// Where the published IP came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IpOrigin {
    Explicit,
    Detected,
}

/// Picks the explicit IP, or detects one when allowed.
async fn determine_ip<H: HttpClient>(
    client: &H,
    config: &ResolvedConfig,
) -> Result<(Ipv4Addr, IpOrigin), RunError> {
    if let Some(ip) = config.explicit_ip {
        tracing::debug!("Using explicit IP {ip}");
        return Ok((ip, IpOrigin::Explicit));
    }

    if !config.detect_enabled {
        return Err(RunError::NoIpAvailable);
    }

    let ip = IpDetector::new(client, config.detect_endpoints.clone())
        .with_timeout(config.timeout)
        .detect()
        .await?;

    Ok((ip, IpOrigin::Detected))
}

/// Executes one update run.
///
/// This function:
/// 1. Uses the explicit IP, or detects the public IP when allowed
/// 2. Updates every configured host in order
/// 3. Writes the result lines to `out`
///
/// # Errors
///
/// Returns an error if no IP could be determined (no update is attempted),
/// or if writing to `out` fails.
pub async fn execute<H: HttpClient, W: Write>(
    client: &H,
    config: &ResolvedConfig,
    out: &mut W,
) -> Result<RunStatus, RunError> {
    let (ip, origin) = determine_ip(client, config).await?;

    tracing::info!("Updating {} host(s) to {ip}", config.hosts.len());
    let results = UpdateExecutor::from_config(client, config)
        .run(&config.hosts, ip)
        .await;

    let detected_ip = (origin == IpOrigin::Detected).then_some(ip);
    report(out, &results, config.verbosity, detected_ip).map_err(RunError::Output)
}
