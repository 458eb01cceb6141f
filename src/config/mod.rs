//! Configuration layer for zoneedit-ddns.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - Source adapters for the dotenv file, environment and YAML file ([`Sources`])
//! - Per-source partial records ([`PartialConfig`])
//! - Merged configuration ([`ResolvedConfig`], [`resolve`])
//! - Configuration template generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **CLI arguments**
//! 2. **Dotenv file** (`.env`, or `--env-file`)
//! 3. **Process environment** (`ZONEEDIT_*`)
//! 4. **YAML file** (`config/ZoneEdit.yaml`, or `--config`)
//! 5. **Built-in defaults** (timeout only)
//!
//! Each field is resolved on its own. `hosts` is taken whole from one source;
//! lists are never combined across sources.
//!
//! # CLI-Only Options
//!
//! `--no-detect`, `--verbose` and `--quiet` change behavior rather than
//! supply data, so they are read from the command line only.

mod cli;
pub mod defaults;
mod error;
mod partial;
mod resolved;
pub mod sources;
mod template;

#[cfg(test)]
mod resolved_tests;

pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use partial::{PartialConfig, Source};
pub use resolved::{ResolvedConfig, resolve};
pub use sources::Sources;
pub use template::{default_config_template, write_default_config};
