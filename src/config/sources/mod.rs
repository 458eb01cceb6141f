//! Adapters that turn each configuration source into a [`PartialConfig`].
//!
//! Files that do not exist at their default location contribute nothing.
//! A file named explicitly on the command line must exist.

mod keyvalue;
mod yaml;


use std::path::{Path, PathBuf};

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::partial::PartialConfig;

pub use keyvalue::{from_dotenv_file, from_lookup, from_process_env};
pub use yaml::{HostsValue, Scalar, YamlConfig, from_yaml_file};

/// Partial configurations from every non-CLI source.
#[derive(Debug, Clone, Default)]
pub struct Sources {
    /// Values from the dotenv file
    pub dotenv: PartialConfig,
    /// Values from the process environment
    pub env: PartialConfig,
    /// Values from the YAML configuration file
    pub yaml: PartialConfig,
}

impl Sources {
    /// Reads the dotenv file, the process environment, and the YAML file.
    ///
    /// Paths come from `--env-file` and `--config`, falling back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnreadableSource`] if a file exists but cannot be
    /// parsed, or if an explicitly named file is missing, and
    /// [`ConfigError::InvalidValue`] if a key/value entry cannot be parsed.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let (env_path, env_explicit) = choose_path(cli.env_file.as_deref(), defaults::ENV_FILE);
        let (yaml_path, yaml_explicit) = choose_path(cli.config.as_deref(), defaults::CONFIG_PATH);

        Ok(Self {
            dotenv: from_dotenv_file(&env_path, env_explicit)?,
            env: from_process_env()?,
            yaml: from_yaml_file(&yaml_path, yaml_explicit)?,
        })
    }
}

fn choose_path(explicit: Option<&Path>, default: &str) -> (PathBuf, bool) {
    explicit.map_or_else(
        || (PathBuf::from(default), false),
        |path| (expand_home(path), true),
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or when no home directory is known, are returned unchanged.
#[must_use]
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest))
}
