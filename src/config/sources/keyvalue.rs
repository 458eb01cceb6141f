//! Flat key/value sources: the dotenv file and the process environment.

use std::collections::HashMap;
use std::path::Path;

use crate::config::defaults::env_key;
use crate::config::error::ConfigError;
use crate::config::partial::{PartialConfig, Source, non_blank, split_hosts};

/// Builds a partial configuration from a key lookup.
///
/// Blank values count as unset. `ZONEEDIT_HOSTS` is split on commas; a value
/// made only of separators yields an explicitly empty host list.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if `ZONEEDIT_TIMEOUT` is not a number.
pub fn from_lookup<F>(origin: Source, lookup: F) -> Result<PartialConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| non_blank(lookup(key).as_deref());

    let timeout = get(env_key::TIMEOUT)
        .map(|raw| {
            raw.parse::<f64>().map_err(|_| ConfigError::InvalidValue {
                origin,
                key: env_key::TIMEOUT,
                value: raw.clone(),
            })
        })
        .transpose()?;

    Ok(PartialConfig {
        user: get(env_key::USER),
        token: get(env_key::TOKEN),
        hosts: get(env_key::HOSTS).map(|raw| split_hosts(&raw)),
        ip: get(env_key::IP),
        timeout,
    })
}

/// Reads `ZONEEDIT_*` variables from the process environment.
///
/// Variables that are not valid Unicode are treated as unset.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if `ZONEEDIT_TIMEOUT` is not a number.
pub fn from_process_env() -> Result<PartialConfig, ConfigError> {
    from_lookup(Source::Environment, |key| std::env::var(key).ok())
}

/// Reads `ZONEEDIT_*` keys from a dotenv file without touching the process environment.
///
/// A missing file contributes nothing unless `explicit` is set.
///
/// # Errors
///
/// Returns [`ConfigError::UnreadableSource`] if the file cannot be read or parsed
/// (or is missing while `explicit`), and [`ConfigError::InvalidValue`] for an
/// unparsable timeout.
pub fn from_dotenv_file(path: &Path, explicit: bool) -> Result<PartialConfig, ConfigError> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() && !explicit => {
            tracing::debug!("No dotenv file at {}", path.display());
            return Ok(PartialConfig::default());
        }
        Err(e) => return Err(ConfigError::unreadable(Source::Dotenv, path, e)),
    };

    let vars = iter
        .collect::<Result<HashMap<String, String>, _>>()
        .map_err(|e| ConfigError::unreadable(Source::Dotenv, path, e))?;

    tracing::debug!("Loaded {} entries from {}", vars.len(), path.display());
    from_lookup(Source::Dotenv, |key| vars.get(key).cloned())
}
