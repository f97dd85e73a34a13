#[cfg(test)]
mod tests {
    use crate::cli::ScanArgs;
    use crate::config::loading::env_field_name;
    use crate::config::*;
    use crate::error::{CliError, ConfigError};
    use figment::Jail;
    use std::path::{Path, PathBuf};

    fn load(overrides: &ConfigOverrides, config_path: Option<&Path>) -> Result<RadarConfig, String> {
        RadarConfig::load(overrides, config_path).map_err(|e| e.to_string())
    }

    #[test]
    fn test_env_field_name() {
        assert_eq!(env_field_name("MAX_FILES"), "maxFiles");
        assert_eq!(env_field_name("respect_gitignore"), "respectGitignore");
        assert_eq!(env_field_name("ROOT"), "root");
        assert_eq!(env_field_name("_JOBS"), "jobs");
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let config = RadarConfig {
            jobs: Some(2),
            ..RadarConfig::default()
        };
        let json_val = serde_json::to_value(&config).unwrap();
        assert!(json_val.get("maxFiles").is_some());
        assert!(json_val.get("respectGitignore").is_some());
        assert!(json_val.get("max_files").is_none());
        assert_eq!(json_val["jobs"], 2);

        let minimal = serde_json::to_value(RadarConfig::default()).unwrap();
        assert!(minimal.get("jobs").is_none());
        assert!(minimal.get("include").is_none());
    }

    #[test]
    fn test_defaults_without_any_source() {
        Jail::expect_with(|_jail| {
            let config = load(&ConfigOverrides::default(), None)?;
            assert_eq!(config, RadarConfig::default());
            assert_eq!(config.max_files, 5000);
            assert_eq!(config.max_depth, 4);
            assert!(config.respect_gitignore);
            Ok(())
        });
    }

    #[test]
    fn test_layer_priority() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE_NAME,
                r#"
                    include = ["src"]
                    maxFiles = 1000
                    maxDepth = 6
                    jobs = 3
                "#,
            )?;
            jail.set_env("RADAR_MAX_FILES", "2000");
            jail.set_env("RADAR_RESPECT_GITIGNORE", "false");

            let from_file_and_env = load(&ConfigOverrides::default(), None)?;
            assert_eq!(from_file_and_env.include, vec!["src"]);
            assert_eq!(from_file_and_env.max_files, 2000);
            assert_eq!(from_file_and_env.max_depth, 6);
            assert_eq!(from_file_and_env.jobs, Some(3));
            assert!(!from_file_and_env.respect_gitignore);

            let args = ScanArgs {
                max_files: Some(4000),
                jobs: Some(1),
                ..ScanArgs::default()
            };
            let overrides = ConfigOverrides::from_scan_args(&args).with_max_depth(Some(2));
            let with_flags = load(&overrides, None)?;
            assert_eq!(with_flags.max_files, 4000);
            assert_eq!(with_flags.max_depth, 2);
            assert_eq!(with_flags.jobs, Some(1));
            // Unset flags leave file values alone.
            assert_eq!(with_flags.include, vec!["src"]);
            Ok(())
        });
    }

    #[test]
    fn test_config_file_found_under_cli_root() {
        Jail::expect_with(|jail| {
            jail.create_dir("repo")?;
            jail.create_file("repo/radar.toml", "exclude = [\"vendor\"]\n")?;

            let args = ScanArgs {
                root: Some(PathBuf::from("repo")),
                ..ScanArgs::default()
            };
            let config = load(&ConfigOverrides::from_scan_args(&args), None)?;
            assert_eq!(config.root, PathBuf::from("repo"));
            assert_eq!(config.exclude, vec!["vendor"]);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_config_path_must_exist() {
        Jail::expect_with(|_jail| {
            let err = RadarConfig::load(&ConfigOverrides::default(), Some(Path::new("ci.toml")))
                .unwrap_err();
            assert!(matches!(err, CliError::Config(ConfigError::NotFound(_))));
            Ok(())
        });
    }

    #[test]
    fn test_bad_field_type_is_invalid_value() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE_NAME, "maxFiles = \"lots\"\n")?;
            let err = RadarConfig::load(&ConfigOverrides::default(), None).unwrap_err();
            assert!(matches!(err, CliError::Config(ConfigError::InvalidValue { .. })));
            Ok(())
        });
    }

    #[test]
    fn test_no_gitignore_flag_overrides() {
        let args = ScanArgs {
            no_gitignore: true,
            debug: true,
            ..ScanArgs::default()
        };
        let overrides = ConfigOverrides::from_scan_args(&args);
        assert_eq!(overrides.respect_gitignore, Some(false));
        assert_eq!(overrides.debug, Some(true));
        assert!(overrides.include.is_none());

        let json_val = serde_json::to_value(&overrides).unwrap();
        assert_eq!(json_val.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_validation_clamps_with_warnings() {
        let mut config = RadarConfig {
            max_files: 10,
            max_depth: 40,
            ..RadarConfig::default()
        };
        let warnings = config.validate().unwrap();
        assert_eq!(config.max_files, MIN_MAX_FILES);
        assert_eq!(config.max_depth, MAX_MAX_DEPTH);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("maxFiles 10"));
        assert!(warnings[1].contains("maxDepth 40"));

        let mut in_range = RadarConfig::default();
        assert!(in_range.validate().unwrap().is_empty());
        assert_eq!(in_range, RadarConfig::default());

        let mut huge = RadarConfig {
            max_files: 1_000_000,
            max_depth: 0,
            ..RadarConfig::default()
        };
        huge.validate().unwrap();
        assert_eq!(huge.max_files, MAX_MAX_FILES);
        assert_eq!(huge.max_depth, MIN_MAX_DEPTH);
    }

    #[test]
    fn test_validation_rejects() {
        let mut zero_jobs = RadarConfig {
            jobs: Some(0),
            ..RadarConfig::default()
        };
        assert!(zero_jobs.validate().is_err());

        let mut empty_root = RadarConfig {
            root: PathBuf::new(),
            ..RadarConfig::default()
        };
        assert!(matches!(
            empty_root.validate(),
            Err(CliError::Config(ConfigError::MissingField { .. }))
        ));

        let mut empty_glob = RadarConfig {
            exclude: vec![" ".to_string()],
            ..RadarConfig::default()
        };
        assert!(empty_glob.validate().is_err());
    }

    #[test]
    fn test_scan_options() {
        let config = RadarConfig {
            include: vec!["src".to_string()],
            max_files: 300,
            respect_gitignore: false,
            ..RadarConfig::default()
        };
        let options = config.scan_options();
        assert_eq!(options.include, vec!["src"]);
        assert_eq!(options.max_files, 300);
        assert!(!options.respect_gitignore);
        assert!(!options.debug);
    }
}
