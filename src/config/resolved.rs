//! Resolved configuration after merging every source.
//!
//! Each field is taken from the highest-priority source that supplies it:
//! CLI > dotenv file > process environment > YAML file. Fields are merged
//! independently, so one source may supply `user` while another supplies `hosts`.

use std::fmt;
use std::net::Ipv4Addr;
use std::time::Duration;

use url::Url;

use crate::address::parse_ipv4;
use crate::report::Verbosity;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::partial::{PartialConfig, Source};
use super::sources::Sources;

/// A partial configuration tagged with the source it came from.
type Layer<'a> = (Source, &'a PartialConfig);

/// Fully resolved configuration, built once per run and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// ZoneEdit user name (non-empty)
    pub user: String,

    /// Dynamic DNS token (non-empty)
    pub token: String,

    /// Hosts to update, in order; never empty
    pub hosts: Vec<String>,

    /// IP supplied by the user, if any
    pub explicit_ip: Option<Ipv4Addr>,

    /// Whether the public IP may be detected when no explicit IP is set
    pub detect_enabled: bool,

    /// Timeout applied to every HTTP request
    pub timeout: Duration,

    /// Output verbosity
    pub verbosity: Verbosity,

    /// Provider update endpoint
    pub update_url: Url,

    /// IP detection endpoints, in the order they are tried
    pub detect_endpoints: Vec<Url>,
}

impl fmt::Display for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ip = self
            .explicit_ip
            .map_or_else(|| "detect".to_string(), |ip| ip.to_string());

        write!(
            f,
            "Config {{ user: {}, token: <redacted>, hosts: [{}], ip: {}, detect: {}, timeout: {:.1}s }}",
            self.user,
            self.hosts.join(", "),
            ip,
            self.detect_enabled,
            self.timeout.as_secs_f64(),
        )
    }
}

impl ResolvedConfig {
    /// Merges the CLI arguments with the other sources.
    ///
    /// `--no-detect`, `--verbose` and `--quiet` are command-line switches
    /// and are not read from other sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `user` or `token` is missing ([`ConfigError::MissingCredentials`])
    /// - no hosts remain after the merge ([`ConfigError::MissingHosts`])
    /// - the explicit IP is not IPv4 ([`ConfigError::InvalidIp`])
    /// - the timeout is not a positive number ([`ConfigError::InvalidTimeout`])
    pub fn from_raw(cli: &Cli, sources: &Sources) -> Result<Self, ConfigError> {
        let cli_partial = PartialConfig::from(cli);

        let mut config = resolve(&cli_partial, &sources.dotenv, &sources.env, &sources.yaml)?;
        config.detect_enabled = !cli.no_detect;
        config.verbosity = Verbosity::from_flags(cli.verbose, cli.quiet);

        Ok(config)
    }

    /// Loads every source named by the CLI and merges them.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or the merged
    /// configuration is invalid.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let sources = Sources::load(cli)?;
        Self::from_raw(cli, &sources)
    }
}

/// Merges four partial configurations in priority order.
///
/// `hosts` is taken whole from the first source that supplies it. A source
/// supplying an empty list wins the scan and the result is
/// [`ConfigError::MissingHosts`]; lower-priority lists are not consulted.
///
/// The result has detection enabled and normal verbosity.
///
/// # Errors
///
/// See [`ResolvedConfig::from_raw`].
pub fn resolve(
    cli: &PartialConfig,
    dotenv: &PartialConfig,
    env: &PartialConfig,
    yaml: &PartialConfig,
) -> Result<ResolvedConfig, ConfigError> {
    let layers: [Layer<'_>; 4] = [
        (Source::Cli, cli),
        (Source::Dotenv, dotenv),
        (Source::Environment, env),
        (Source::Yaml, yaml),
    ];

    let user = first_present(&layers, |p| p.user.as_deref());
    let token = first_present(&layers, |p| p.token.as_deref());
    let (Some((_, user)), Some((_, token))) = (user, token) else {
        return Err(ConfigError::MissingCredentials);
    };
    if user.trim().is_empty() || token.trim().is_empty() {
        return Err(ConfigError::MissingCredentials);
    }

    let hosts = match first_present(&layers, |p| p.hosts.as_deref()) {
        Some((origin, hosts)) if !hosts.is_empty() => {
            tracing::debug!("Using {} host(s) from {origin}", hosts.len());
            hosts.to_vec()
        }
        Some((origin, _)) => {
            tracing::debug!("Host list from {origin} is empty");
            return Err(ConfigError::MissingHosts);
        }
        None => return Err(ConfigError::MissingHosts),
    };

    let explicit_ip = first_present(&layers, |p| p.ip.as_deref())
        .map(|(origin, raw)| {
            parse_ipv4(raw).ok_or_else(|| ConfigError::InvalidIp {
                origin,
                value: raw.to_string(),
            })
        })
        .transpose()?;

    let timeout = first_present(&layers, |p| p.timeout.as_ref())
        .map_or(Ok(defaults::timeout()), |(origin, &secs)| {
            parse_timeout(origin, secs)
        })?;

    Ok(ResolvedConfig {
        user: user.to_string(),
        token: token.to_string(),
        hosts,
        explicit_ip,
        detect_enabled: true,
        timeout,
        verbosity: Verbosity::Normal,
        update_url: defaults::update_url(),
        detect_endpoints: defaults::detect_endpoints(),
    })
}

/// Returns the first value supplied by a layer, scanning in priority order.
fn first_present<'a, T: ?Sized>(
    layers: &[Layer<'a>],
    field: impl Fn(&'a PartialConfig) -> Option<&'a T>,
) -> Option<(Source, &'a T)> {
    layers
        .iter()
        .find_map(|&(origin, partial)| field(partial).map(|value| (origin, value)))
}

fn parse_timeout(origin: Source, secs: f64) -> Result<Duration, ConfigError> {
    if secs <= 0.0 {
        return Err(ConfigError::InvalidTimeout { origin, value: secs });
    }
    Duration::try_from_secs_f64(secs)
        .ok()
        .filter(|timeout| !timeout.is_zero())
        .ok_or(ConfigError::InvalidTimeout { origin, value: secs })
}
