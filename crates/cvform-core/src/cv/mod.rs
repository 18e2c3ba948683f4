//! CV field extraction module.

mod parser;
pub mod rules;

pub use parser::RuleBasedCvParser;

use std::path::Path;

use tracing::warn;

use crate::document::load_document;
use crate::error::ExtractionError;
use crate::models::config::CvformConfig;
use crate::models::profile::ExtractionResult;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for CV field extractors.
pub trait CvExtractor {
    /// Extract structured fields from a CV document.
    fn extract(&self, document: &str) -> Result<ExtractionResult>;
}

/// Extract fields from a CV with the default parser settings.
pub fn extract(document: &str) -> Result<ExtractionResult> {
    RuleBasedCvParser::new().extract(document)
}

/// Load a document from disk and extract its fields.
pub fn extract_file(path: &Path, config: &CvformConfig) -> crate::Result<ExtractionResult> {
    let text = load_document(path)?;

    if text.trim().is_empty() {
        warn!("Document {} contains no text", path.display());
    }

    let result = RuleBasedCvParser::from_config(&config.extraction).extract(&text)?;
    Ok(result)
}
