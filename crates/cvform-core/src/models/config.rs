//! Configuration structures for validation, extraction and output.

use serde::{Deserialize, Serialize};

/// Main configuration for cvform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CvformConfig {
    /// Form validation configuration.
    pub validation: ValidationConfig,

    /// CV extraction configuration.
    pub extraction: ExtractionConfig,

    /// Report output configuration.
    pub output: OutputConfig,
}

/// Form validation configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Rules layered over the built-in ones. A rule for an existing field
    /// name replaces the built-in rule.
    pub extra_rules: Vec<RuleConfig>,
}

/// A validation rule as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Field name the rule applies to (case-sensitive).
    pub field: String,

    /// Regular expression the whole value must match.
    pub pattern: String,

    /// Message reported when the value does not match.
    pub message: String,
}

/// CV extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum document size in bytes (0 = unlimited).
    pub max_input_bytes: usize,

    /// Accept phone numbers that have no "phone" label.
    pub unlabeled_phone: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: 1024 * 1024,
            unlabeled_phone: true,
        }
    }
}

/// Report output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when none is given on the command line
    /// ("text", "csv" or "json").
    pub default_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
        }
    }
}

impl CvformConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
