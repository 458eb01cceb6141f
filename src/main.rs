//! zoneedit-ddns: ZoneEdit Dynamic DNS updater
//!
//! Entry point for the zoneedit-ddns application.

use std::path::Path;
use std::process::ExitCode;

use zoneedit_ddns::config::{Cli, Command, ResolvedConfig, write_default_config};
use zoneedit_ddns::report::Verbosity;
use zoneedit_ddns::transport::ReqwestClient;

mod app;
mod run;

use app::{exit_code, report_failure, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand
    if let Some(Command::Init { output, force }) = &cli.command {
        return handle_init(output, *force);
    }

    setup_tracing(Verbosity::from_flags(cli.verbose, cli.quiet));

    // Load and resolve configuration
    let config = match ResolvedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => return report_failure(&e.into()),
    };

    tracing::debug!("{config}");

    run_application(&config)
}

/// Handles the `init` subcommand.
fn handle_init(output: &Path, force: bool) -> ExitCode {
    match write_default_config(output, force) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => report_failure(&e.into()),
    }
}

/// Runs one update pass on a single-threaded runtime.
///
/// Excluded from coverage - requires network access.
#[cfg(not(tarpaulin_include))]
fn run_application(config: &ResolvedConfig) -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to create Tokio runtime: {e}");
            return exit_code::config_error();
        }
    };

    let client = ReqwestClient::new();
    let mut stdout = std::io::stdout().lock();

    match runtime.block_on(run::execute(&client, config, &mut stdout)) {
        Ok(status) => status.into(),
        Err(e) => report_failure(&e),
    }
}
