//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// Update ZoneEdit Dynamic DNS records
///
/// Resolves credentials and hosts from CLI flags, a .env file, the process
/// environment and a YAML file (highest priority first), detects the public
/// IPv4 address unless one is given, and updates every host.
#[derive(Debug, Parser)]
#[command(name = "zoneedit-ddns")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// ZoneEdit username
    #[arg(long)]
    pub user: Option<String>,

    /// ZoneEdit dynamic DNS token
    #[arg(long)]
    pub token: Option<String>,

    /// Hostname to update (repeat for multiple)
    #[arg(long = "host", value_name = "HOST")]
    pub hosts: Vec<String>,

    /// Use this IP instead of auto-detecting
    #[arg(long)]
    pub ip: Option<String>,

    /// HTTP timeout in seconds [default: 10]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<f64>,

    /// Do not auto-detect the IP if --ip is missing (error instead)
    #[arg(long = "no-detect")]
    pub no_detect: bool,

    /// Path to YAML config file [default: config/ZoneEdit.yaml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the dotenv file [default: .env]
    #[arg(long = "env-file", value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long, short)]
    pub quiet: bool,
}

/// Subcommands for zoneedit-ddns
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a YAML configuration template
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_PATH)]
        output: PathBuf,

        /// Overwrite the file if it already exists
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
