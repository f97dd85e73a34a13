use crate::config::{ConfigOverrides, RadarConfig, default_root};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file looked up in the repository root when --config is not given.
pub const CONFIG_FILE_NAME: &str = "radar.toml";

const ENV_PREFIX: &str = "RADAR_";

impl RadarConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    ///
    /// An explicit `config_path` must exist. Without one, `radar.toml` is read
    /// from the root given on the command line (or the working directory) if
    /// present.
    pub fn load(overrides: &ConfigOverrides, config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_file(overrides, config_path)? {
            debug!("Loading config from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        // RADAR_MAX_FILES -> maxFiles, RADAR_RESPECT_GITIGNORE -> respectGitignore
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .lowercase(false)
                .map(|key| env_field_name(key.as_str()).into()),
        );

        figment = figment.merge(Serialized::defaults(overrides));

        figment.extract().map_err(|e| {
            ConfigError::InvalidValue {
                field: "configuration".to_string(),
                value: e.to_string(),
                hint: format!("Check {CONFIG_FILE_NAME} and {ENV_PREFIX}* variables for typos and field types"),
            }
            .into()
        })
    }
}

fn config_file(overrides: &ConfigOverrides, config_path: Option<&Path>) -> Result<Option<PathBuf>> {
    match config_path {
        Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
        Some(path) => Err(ConfigError::NotFound(path.to_path_buf()).into()),
        None => {
            let root = overrides.root.clone().unwrap_or_else(default_root);
            let default_path = root.join(CONFIG_FILE_NAME);
            Ok(default_path.is_file().then_some(default_path))
        }
    }
}

/// Map an environment key with the prefix stripped to its camelCase field name.
pub(crate) fn env_field_name(key: &str) -> String {
    let mut field = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '_' {
            upper_next = !field.is_empty();
        } else if upper_next {
            field.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            field.push(ch.to_ascii_lowercase());
        }
    }
    field
}
