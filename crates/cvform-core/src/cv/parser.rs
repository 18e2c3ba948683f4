//! Rule-based CV parser assembling the extraction result.

use std::borrow::Cow;
use std::time::Instant;

use tracing::{debug, info};

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::profile::ExtractionResult;

use super::rules::{
    contact::{EmailExtractor, NameExtractor, PhoneExtractor},
    experience::{extract_responsibilities, JobExtractor, YearsExtractor},
    skills::extract_skills,
    FieldExtractor,
};
use super::{CvExtractor, Result};

/// CV parser running the seven extraction rules independently.
pub struct RuleBasedCvParser {
    /// Maximum document size in bytes (0 = unlimited).
    max_input_bytes: usize,
    /// Whether phone numbers without a label are accepted.
    unlabeled_phone: bool,
}

impl RuleBasedCvParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            max_input_bytes: config.max_input_bytes,
            unlabeled_phone: config.unlabeled_phone,
        }
    }

    /// Set the maximum document size (0 = unlimited).
    pub fn with_max_input_bytes(mut self, limit: usize) -> Self {
        self.max_input_bytes = limit;
        self
    }
}

impl Default for RuleBasedCvParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CvExtractor for RuleBasedCvParser {
    fn extract(&self, document: &str) -> Result<ExtractionResult> {
        let start = Instant::now();

        if self.max_input_bytes > 0 && document.len() > self.max_input_bytes {
            return Err(ExtractionError::InputTooLarge {
                size: document.len(),
                limit: self.max_input_bytes,
            });
        }

        info!("Parsing CV from {} characters of text", document.len());

        let text: Cow<'_, str> = if document.contains('\r') {
            Cow::Owned(document.replace("\r\n", "\n"))
        } else {
            Cow::Borrowed(document)
        };

        let mut result = ExtractionResult::default();

        // 1. Name
        if let Some(m) = NameExtractor::new().extract(&text) {
            debug!("Name matched at {:?}: {:?}", m.position, m.source);
            result.name = Some(m.value);
        }

        // 2. Email
        if let Some(m) = EmailExtractor::new().extract(&text) {
            debug!("Email matched at {:?}", m.position);
            result.email = Some(m.value);
        }

        // 3. Phone
        let phone_extractor = PhoneExtractor::new().with_unlabeled(self.unlabeled_phone);
        if let Some(m) = phone_extractor.extract(&text) {
            debug!("Phone matched at {:?}: {:?}", m.position, m.source);
            result.phone = Some(m.value);
        }

        // 4. Skills
        result.skills = extract_skills(&text);

        // 5. Experience duration
        if let Some(m) = YearsExtractor::new().extract(&text) {
            debug!("Experience duration matched at {:?}", m.position);
            result.experience_years = Some(m.value);
        }

        // 6. Job title, company, period
        if let Some(m) = JobExtractor::new().extract(&text) {
            debug!("Job block matched at {:?}", m.position);
            result.job = Some(m.value);
        }

        // 7. Responsibilities
        result.responsibilities = extract_responsibilities(&text);

        debug!(
            "Extracted {} fields in {}us",
            result.field_count(),
            start.elapsed().as_micros()
        );

        Ok(result)
    }
}
