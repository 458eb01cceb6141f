//! YAML configuration template for the `init` subcommand.

use std::path::Path;

use super::error::ConfigError;

/// Generates a commented YAML configuration template.
#[must_use]
pub fn default_config_template() -> String {
    r"# ZoneEdit dynamic DNS configuration
#
# Values here have the lowest priority:
#   CLI flags > .env file > environment variables > this file

# ZoneEdit username (required)
# user: your-username

# Dynamic DNS token from the ZoneEdit control panel, NOT the account password (required)
# token: your-ddns-token

# Hosts to update (required, at least one)
# hosts:
#   - home.example.com
#   - nas.example.com

# Fixed IPv4 address to publish instead of auto-detecting
# ip: 203.0.113.10

# HTTP timeout in seconds (default: 10)
# timeout: 10
"
    .to_string()
}

/// Writes the configuration template to a file, creating parent directories.
///
/// # Errors
///
/// Returns [`ConfigError::AlreadyExists`] if the file exists and `force` is
/// not set, or [`ConfigError::FileWrite`] if it cannot be written.
pub fn write_default_config(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    let write_error = |source| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    std::fs::write(path, default_config_template()).map_err(write_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::sources::YamlConfig;
    use tempfile::tempdir;

    #[test]
    fn template_parses_to_empty_config() {
        let yaml = YamlConfig::parse(&default_config_template()).unwrap();

        assert!(yaml.user.is_none());
        assert!(yaml.hosts.is_none());
    }

    #[test]
    fn template_mentions_every_key() {
        let template = default_config_template();

        for key in ["user:", "token:", "hosts:", "ip:", "timeout:"] {
            assert!(template.contains(key), "template is missing {key}");
        }
    }

    #[test]
    fn writes_file_and_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config").join("ZoneEdit.yaml");

        write_default_config(&path, false).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            default_config_template()
        );
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ZoneEdit.yaml");
        std::fs::write(&path, "user: keep-me\n").unwrap();

        let result = write_default_config(&path, false);

        assert!(matches!(result, Err(ConfigError::AlreadyExists { .. })));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "user: keep-me\n");
    }

    #[test]
    fn overwrites_with_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ZoneEdit.yaml");
        std::fs::write(&path, "user: old\n").unwrap();

        write_default_config(&path, true).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            default_config_template()
        );
    }
}
