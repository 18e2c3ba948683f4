//! Core library for form validation and CV field extraction.
//!
//! This crate provides:
//! - Field validation for short form values (name, email, phone, postal code)
//! - Rule-based CV/résumé field extraction (contact info, skills, job history)
//! - Report rendering in plain `label: value` and quoted CSV styles
//! - Document loading from text files and text-layer PDFs

pub mod error;
pub mod models;
pub mod validation;
pub mod cv;
pub mod report;
pub mod document;

pub use error::{CvformError, Result};
pub use models::config::CvformConfig;
pub use models::fields::{LabeledField, ValidationOutcome};
pub use models::profile::{ExtractionResult, JobDetails};
pub use validation::{FieldRule, FieldValidator, RuleSet};
pub use cv::{extract_file, CvExtractor, RuleBasedCvParser};
pub use report::{format, reformat, ReportStyle};
pub use document::{load_document, DocumentKind};
