//! Config loading, validation, and discovery.

use super::model::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{EnvgenError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(EnvgenError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            EnvgenError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for this run.
    ///
    /// An explicit path must exist. Without one, `.envgen.yaml` in `dir` is
    /// used when present, and built-in defaults otherwise.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let default_path = dir.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            tracing::debug!(path = %default_path.display(), "loading config");
            return Self::load(default_path);
        }

        Ok(Self::default())
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| EnvgenError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `template` and `output` must be non-empty
    /// - `region`, when set, must be non-empty
    /// - `prefetch` entries must be absolute parameter paths (start with `/`)
    pub fn validate(&self) -> Result<()> {
        if self.template.trim().is_empty() {
            return Err(EnvgenError::UserError(
                "config validation failed: template must be non-empty".to_string(),
            ));
        }

        if self.output.trim().is_empty() {
            return Err(EnvgenError::UserError(
                "config validation failed: output must be non-empty".to_string(),
            ));
        }

        if let Some(region) = &self.region
            && region.trim().is_empty()
        {
            return Err(EnvgenError::UserError(
                "config validation failed: region must be non-empty when set".to_string(),
            ));
        }

        for path in &self.prefetch {
            validate_prefetch_path(path).map_err(|e| {
                EnvgenError::UserError(format!("config validation failed: {}", e))
            })?;
        }

        Ok(())
    }
}

/// Check that `path` is an absolute parameter path.
///
/// Shared by the config file and the `--prefetch` flag.
pub fn validate_prefetch_path(path: &str) -> std::result::Result<(), String> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(format!(
            "prefetch paths must start with '/' (found '{}')",
            path
        ))
    }
}
