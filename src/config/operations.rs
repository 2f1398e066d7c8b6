//! Config loading and validation operations.

use super::model::{DecoderConfig, KIND_KEY, SPEC_KEY, VERSION_KEY};
use crate::error::{MfError, Result};
use std::path::Path;

impl DecoderConfig {
    /// Load config from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(DecoderConfig)` - Successfully loaded and validated config
    /// * `Err(MfError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            MfError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file holds no document to deserialize.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: DecoderConfig = serde_yaml::from_str(yaml)
            .map_err(|e| MfError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| MfError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `legacy_marker` must be non-empty and must not shadow `kind`, `version` or `spec`
    /// - `legacy_kind` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.legacy_marker.is_empty() {
            return Err(MfError::UserError(
                "config validation failed: legacy_marker must be non-empty".to_string(),
            ));
        }

        if [KIND_KEY, VERSION_KEY, SPEC_KEY].contains(&self.legacy_marker.as_str()) {
            return Err(MfError::UserError(format!(
                "config validation failed: legacy_marker '{}' collides with a manifest envelope key",
                self.legacy_marker
            )));
        }

        if self.legacy_kind.is_empty() {
            return Err(MfError::UserError(
                "config validation failed: legacy_kind must be non-empty".to_string(),
            ));
        }

        Ok(())
    }
}
