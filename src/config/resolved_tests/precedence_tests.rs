//! Tests for source priority and field-level merging.

use std::time::Duration;

use super::*;

mod field_priority {
    use super::*;

    #[test]
    fn cli_wins_over_every_other_source() {
        let config = resolve(
            &complete("cli", "cli.example.com"),
            &complete("dotenv", "dotenv.example.com"),
            &complete("env", "env.example.com"),
            &complete("yaml", "yaml.example.com"),
        )
        .unwrap();

        assert_eq!(config.user, "cli");
        assert_eq!(config.token, "cli-token");
        assert_eq!(config.hosts, ["cli.example.com"]);
    }

    #[test]
    fn dotenv_wins_over_environment_and_yaml() {
        let config = resolve(
            &empty(),
            &complete("dotenv", "dotenv.example.com"),
            &complete("env", "env.example.com"),
            &complete("yaml", "yaml.example.com"),
        )
        .unwrap();

        assert_eq!(config.user, "dotenv");
        assert_eq!(config.hosts, ["dotenv.example.com"]);
    }

    #[test]
    fn environment_wins_over_yaml() {
        let config = resolve(
            &empty(),
            &empty(),
            &complete("env", "env.example.com"),
            &complete("yaml", "yaml.example.com"),
        )
        .unwrap();

        assert_eq!(config.user, "env");
        assert_eq!(config.hosts, ["env.example.com"]);
    }

    #[test]
    fn yaml_is_used_when_nothing_else_supplies() {
        let config = resolve(
            &empty(),
            &empty(),
            &empty(),
            &complete("yaml", "yaml.example.com"),
        )
        .unwrap();

        assert_eq!(config.user, "yaml");
        assert_eq!(config.hosts, ["yaml.example.com"]);
    }
}

mod field_granular_merge {
    use super::*;

    #[test]
    fn fields_come_from_different_sources() {
        let cli = PartialConfig {
            user: Some("cli-user".to_string()),
            ..PartialConfig::default()
        };
        let env = PartialConfig {
            token: Some("env-token".to_string()),
            ..PartialConfig::default()
        };
        let yaml = PartialConfig {
            user: Some("yaml-user".to_string()),
            token: Some("yaml-token".to_string()),
            hosts: hosts(&["yaml.example.com"]),
            timeout: Some(3.0),
            ..PartialConfig::default()
        };

        let config = resolve(&cli, &empty(), &env, &yaml).unwrap();

        assert_eq!(config.user, "cli-user");
        assert_eq!(config.token, "env-token");
        assert_eq!(config.hosts, ["yaml.example.com"]);
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn hosts_are_taken_whole_from_one_source() {
        let dotenv = PartialConfig {
            hosts: hosts(&["a.example.com"]),
            ..PartialConfig::default()
        };
        let yaml = PartialConfig {
            hosts: hosts(&["b.example.com", "c.example.com"]),
            ..complete("yaml", "unused.example.com")
        };

        let config = resolve(&empty(), &dotenv, &empty(), &yaml).unwrap();

        assert_eq!(config.hosts, ["a.example.com"]);
    }

    #[test]
    fn duplicate_hosts_are_preserved_in_order() {
        let cli = PartialConfig {
            hosts: hosts(&["b.example.com", "a.example.com", "b.example.com"]),
            ..complete("cli", "unused.example.com")
        };

        let config = resolve(&cli, &empty(), &empty(), &empty()).unwrap();

        assert_eq!(
            config.hosts,
            ["b.example.com", "a.example.com", "b.example.com"]
        );
    }

    #[test]
    fn explicitly_empty_hosts_stop_the_scan() {
        let env = PartialConfig {
            hosts: Some(vec![]),
            ..PartialConfig::default()
        };

        let result = resolve(
            &empty(),
            &empty(),
            &env,
            &complete("yaml", "yaml.example.com"),
        );

        assert!(matches!(result, Err(ConfigError::MissingHosts)));
    }

    #[test]
    fn ip_and_timeout_follow_priority() {
        let dotenv = PartialConfig {
            ip: Some("198.51.100.1".to_string()),
            ..PartialConfig::default()
        };
        let yaml = PartialConfig {
            ip: Some("198.51.100.2".to_string()),
            timeout: Some(7.5),
            ..complete("yaml", "yaml.example.com")
        };

        let config = resolve(&empty(), &dotenv, &empty(), &yaml).unwrap();

        assert_eq!(config.explicit_ip, Some("198.51.100.1".parse().unwrap()));
        assert_eq!(config.timeout, Duration::from_secs_f64(7.5));
    }
}

mod cli_switches {
    use super::*;
    use crate::report::Verbosity;

    fn sources() -> Sources {
        Sources {
            yaml: complete("yaml", "yaml.example.com"),
            ..Sources::default()
        }
    }

    #[test]
    fn detection_is_enabled_by_default() {
        let config = ResolvedConfig::from_raw(&cli(&[]), &sources()).unwrap();

        assert!(config.detect_enabled);
        assert_eq!(config.verbosity, Verbosity::Normal);
    }

    #[test]
    fn no_detect_disables_detection() {
        let config = ResolvedConfig::from_raw(&cli(&["--no-detect"]), &sources()).unwrap();

        assert!(!config.detect_enabled);
    }

    #[test]
    fn verbose_flag_sets_verbosity() {
        let config = ResolvedConfig::from_raw(&cli(&["-v"]), &sources()).unwrap();

        assert_eq!(config.verbosity, Verbosity::Verbose);
    }

    #[test]
    fn quiet_wins_over_verbose() {
        let config = ResolvedConfig::from_raw(&cli(&["-v", "-q"]), &sources()).unwrap();

        assert_eq!(config.verbosity, Verbosity::Quiet);
    }

    #[test]
    fn cli_flags_override_file_sources() {
        let config = ResolvedConfig::from_raw(
            &cli(&["--user", "cli", "--host", "cli.example.com"]),
            &sources(),
        )
        .unwrap();

        assert_eq!(config.user, "cli");
        assert_eq!(config.token, "yaml-token");
        assert_eq!(config.hosts, ["cli.example.com"]);
    }
}
