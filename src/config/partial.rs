//! Partial configuration records produced by each source.

use std::fmt;

use super::cli::Cli;

/// A configuration source, listed from highest to lowest priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Command-line flags
    Cli,
    /// The dotenv file
    Dotenv,
    /// Process environment variables
    Environment,
    /// The YAML configuration file
    Yaml,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cli => "command line",
            Self::Dotenv => "dotenv file",
            Self::Environment => "environment",
            Self::Yaml => "YAML config",
        };
        f.write_str(name)
    }
}

/// Configuration supplied by a single source.
///
/// `None` means the source did not supply the field. For `hosts`,
/// `Some(vec![])` is a deliberately empty list and is not the same as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialConfig {
    /// ZoneEdit user name
    pub user: Option<String>,
    /// Dynamic DNS token
    pub token: Option<String>,
    /// Hosts to update, in order
    pub hosts: Option<Vec<String>>,
    /// Explicit IP address (unvalidated)
    pub ip: Option<String>,
    /// HTTP timeout in seconds (unvalidated)
    pub timeout: Option<f64>,
}

impl PartialConfig {
    /// Returns true if the source supplied nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<&Cli> for PartialConfig {
    fn from(cli: &Cli) -> Self {
        let hosts = if cli.hosts.is_empty() {
            None
        } else {
            Some(clean_hosts(cli.hosts.iter().map(String::as_str)))
        };

        Self {
            user: non_blank(cli.user.as_deref()),
            token: non_blank(cli.token.as_deref()),
            hosts,
            ip: non_blank(cli.ip.as_deref()),
            timeout: cli.timeout,
        }
    }
}

/// Trims a scalar value; blank values count as not supplied.
pub(super) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

/// Trims host names and drops blank entries, keeping order and duplicates.
pub(super) fn clean_hosts<'a>(hosts: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    hosts
        .into_iter()
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Splits a comma-separated host list.
pub(super) fn split_hosts(value: &str) -> Vec<String> {
    clean_hosts(value.split(','))
}
