//! YAML configuration file parsing.

use std::path::Path;

use serde::Deserialize;
use serde::de::Error as _;

use crate::config::error::ConfigError;
use crate::config::partial::{PartialConfig, Source, clean_hosts, non_blank, split_hosts};

/// Structure of the YAML configuration file.
///
/// All fields are optional. Unknown keys are ignored so the file can be
/// shared with other tools.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct YamlConfig {
    /// ZoneEdit user name
    pub user: Option<Scalar>,
    /// Dynamic DNS token
    pub token: Option<Scalar>,
    /// Hosts as a YAML list or a comma-separated string
    pub hosts: Option<HostsValue>,
    /// Explicit IPv4 address
    pub ip: Option<Scalar>,
    /// HTTP timeout in seconds
    pub timeout: Option<f64>,
}

/// The `hosts` key accepts either form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum HostsValue {
    /// `hosts: [a.example.com, b.example.com]`
    List(Vec<Scalar>),
    /// `hosts: "a.example.com, b.example.com"`
    Csv(Scalar),
}

/// A scalar value read as text.
///
/// Unquoted numbers such as `token: 1234567890` are accepted and kept in
/// their decimal form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl Scalar {
    /// Returns the value as a string.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Integer(n) => n.to_string(),
            Self::Unsigned(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
        }
    }
}

fn scalar_text(value: Option<Scalar>) -> Option<String> {
    non_blank(value.map(Scalar::into_text).as_deref())
}

impl YamlConfig {
    /// Parses configuration from a YAML string.
    ///
    /// An empty document (or one holding only comments) yields the default.
    ///
    /// # Errors
    ///
    /// Returns the parser error if the YAML is invalid or not a mapping.
    pub fn parse(content: &str) -> Result<Self, serde_yaml_ng::Error> {
        let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(content)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        if !value.is_mapping() {
            return Err(serde_yaml_ng::Error::custom(
                "expected a mapping of keys at the top level",
            ));
        }
        serde_yaml_ng::from_value(value)
    }
}

impl From<YamlConfig> for PartialConfig {
    fn from(yaml: YamlConfig) -> Self {
        let hosts = yaml.hosts.map(|hosts| match hosts {
            HostsValue::List(list) => {
                let list: Vec<String> = list.into_iter().map(Scalar::into_text).collect();
                clean_hosts(list.iter().map(String::as_str))
            }
            HostsValue::Csv(raw) => split_hosts(&raw.into_text()),
        });

        Self {
            user: scalar_text(yaml.user),
            token: scalar_text(yaml.token),
            hosts,
            ip: scalar_text(yaml.ip),
            timeout: yaml.timeout,
        }
    }
}

/// Loads the YAML configuration file.
///
/// A missing file contributes nothing unless `explicit` is set.
///
/// # Errors
///
/// Returns [`ConfigError::UnreadableSource`] if the file cannot be read or parsed,
/// or is missing while `explicit`.
pub fn from_yaml_file(path: &Path, explicit: bool) -> Result<PartialConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !explicit => {
            tracing::debug!("No YAML config at {}", path.display());
            return Ok(PartialConfig::default());
        }
        Err(e) => return Err(ConfigError::unreadable(Source::Yaml, path, e)),
    };

    let yaml =
        YamlConfig::parse(&content).map_err(|e| ConfigError::unreadable(Source::Yaml, path, e))?;

    tracing::debug!("Loaded YAML config from {}", path.display());
    Ok(yaml.into())
}
