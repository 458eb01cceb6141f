//! Tests for configuration resolution.

use super::ConfigError;
use super::cli::Cli;
use super::partial::{PartialConfig, Source};
use super::resolved::{ResolvedConfig, resolve};
use super::sources::Sources;

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["zoneedit-ddns"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to build a host list
fn hosts(names: &[&str]) -> Option<Vec<String>> {
    Some(names.iter().map(ToString::to_string).collect())
}

/// A source with complete credentials and one host
fn complete(user: &str, host: &str) -> PartialConfig {
    PartialConfig {
        user: Some(user.to_string()),
        token: Some(format!("{user}-token")),
        hosts: hosts(&[host]),
        ..PartialConfig::default()
    }
}

fn empty() -> PartialConfig {
    PartialConfig::default()
}

mod precedence_tests;
