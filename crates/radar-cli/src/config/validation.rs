use crate::config::{
    MAX_MAX_DEPTH, MAX_MAX_FILES, MIN_MAX_DEPTH, MIN_MAX_FILES, RadarConfig,
};
use crate::error::{ConfigError, Result};

impl RadarConfig {
    /// Validate the configuration and clamp numeric settings into range.
    ///
    /// Out-of-range `maxFiles`/`maxDepth` values are clamped rather than
    /// rejected; each clamp produces one warning in the returned list.
    pub fn validate(&mut self) -> Result<Vec<String>> {
        if self.root.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "root".to_string(),
                hint: "Set root to the repository directory, or leave it out to use '.'".to_string(),
            }
            .into());
        }

        if self.jobs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "jobs".to_string(),
                value: "0".to_string(),
                hint: "Use at least one worker thread, or leave jobs unset".to_string(),
            }
            .into());
        }

        for (field, globs) in [("include", &self.include), ("exclude", &self.exclude)] {
            if globs.iter().any(|glob| glob.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: format!("{globs:?}"),
                    hint: "Remove empty glob patterns".to_string(),
                }
                .into());
            }
        }

        let mut warnings = Vec::new();
        warnings.extend(clamp_setting(
            "maxFiles",
            &mut self.max_files,
            MIN_MAX_FILES,
            MAX_MAX_FILES,
        ));
        warnings.extend(clamp_setting(
            "maxDepth",
            &mut self.max_depth,
            MIN_MAX_DEPTH,
            MAX_MAX_DEPTH,
        ));
        Ok(warnings)
    }
}

fn clamp_setting(field: &str, value: &mut usize, min: usize, max: usize) -> Option<String> {
    let clamped = (*value).clamp(min, max);
    if clamped == *value {
        return None;
    }
    let warning = format!("{field} {} is outside {min}..={max}, using {clamped}", *value);
    *value = clamped;
    Some(warning)
}
