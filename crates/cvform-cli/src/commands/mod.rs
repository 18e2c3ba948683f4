//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod extract;
pub mod reformat;
pub mod validate;

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::{debug, warn};

use cvform_core::models::config::CvformConfig;
use cvform_core::models::profile::ExtractionResult;
use cvform_core::report;

/// Output format for extraction results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text report
    Text,
    /// Quoted CSV report
    Csv,
    /// JSON output
    Json,
}

impl OutputFormat {
    /// File extension for reports in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    /// Pick the format: explicit flag, then output file extension, then config.
    pub fn resolve(
        explicit: Option<OutputFormat>,
        output: Option<&Path>,
        config: &CvformConfig,
    ) -> OutputFormat {
        if let Some(format) = explicit {
            return format;
        }

        let from_extension = output
            .and_then(|p| p.extension())
            .and_then(|e| e.to_str())
            .and_then(|e| match e.to_lowercase().as_str() {
                "csv" => Some(OutputFormat::Csv),
                "json" => Some(OutputFormat::Json),
                "txt" => Some(OutputFormat::Text),
                _ => None,
            });

        from_extension.unwrap_or_else(|| {
            OutputFormat::from_str(&config.output.default_format, true).unwrap_or_else(|_| {
                warn!(
                    "Unknown default format '{}' in config, using text",
                    config.output.default_format
                );
                OutputFormat::Text
            })
        })
    }
}

/// Render an extraction result in the given format.
pub fn render_result(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(result.to_plain_report()),
        OutputFormat::Csv => Ok(report::reformat(&result.to_plain_report())),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)? + "\n"),
    }
}

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cvform")
        .join("config.json")
}

/// Load configuration from the given path, the default path, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<CvformConfig> {
    if let Some(path) = config_path {
        debug!("Loading config from {}", path);
        return Ok(CvformConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Loading config from {}", default_path.display());
        Ok(CvformConfig::from_file(&default_path)?)
    } else {
        Ok(CvformConfig::default())
    }
}
