//! Generator configuration.
//!
//! Configuration can be written as YAML or TOML:
//!
//! ```yaml
//! seed: 42
//! locale: Japanese
//! extraction_policy: lenient
//! default_string_length: 30
//! ```
//!
//! Every key is optional.

use intl_core::{ExtractionPolicy, LocaleId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Length of each string produced by `get_problematic_strings`.
pub const DEFAULT_STRING_LENGTH: usize = 30;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading the config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Error parsing TOML
    #[error("Failed to parse TOML: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Settings for an [`IntlStrings`](crate::IntlStrings) instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// RNG seed; a time-based seed is chosen when absent
    pub seed: Option<u64>,
    /// Initial locale; the system locale is used when absent
    pub locale: Option<LocaleId>,
    /// Handling of malformed bundles
    pub extraction_policy: ExtractionPolicy,
    /// Length of generated problematic strings
    pub default_string_length: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            locale: None,
            extraction_policy: ExtractionPolicy::default(),
            default_string_length: DEFAULT_STRING_LENGTH,
        }
    }
}

impl GeneratorConfig {
    /// Load from a file; `.toml` files are parsed as TOML, anything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::from_toml(&content),
            _ => Self::from_yaml(&content),
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_locale(mut self, locale: LocaleId) -> Self {
        self.locale = Some(locale);
        self
    }
}
