use crate::substitution::SubstitutionSpec;
use crate::{logging, MockError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Mock bindings shipped by the test executor, in activation order.
///
/// The on-disk form is a JSON array of `{"target": ..., "value": ...}`
/// objects. An array is used rather than an object keyed by target because
/// array order is the activation order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct MockConfig {
    pub substitutions: Vec<SubstitutionSpec>,
}

impl MockConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let deserializer = &mut serde_json::Deserializer::from_str(json);
        let config: MockConfig = serde_path_to_error::deserialize(deserializer)
            .map_err(|e| MockError::ConfigError(format!("Failed to parse mock config: {}", e)))?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            MockError::ConfigError(format!("Failed to read mock config {:?}: {}", path, e))
        })?;
        let config = Self::from_json(&content)?;
        logging::log_config_loaded(path, config.substitutions.len());
        Ok(config)
    }
}
