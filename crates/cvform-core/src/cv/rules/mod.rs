//! Rule-based field extractors for CVs.
//!
//! Every rule runs over the full document text on its own; no rule sees
//! another rule's matches.

pub mod contact;
pub mod experience;
pub mod patterns;
pub mod skills;

pub use contact::{extract_email, extract_name, extract_phone, EmailExtractor, NameExtractor, PhoneExtractor};
pub use experience::{
    extract_experience_years, extract_job_details, extract_responsibilities, JobExtractor,
    YearsExtractor,
};
pub use skills::extract_skills;

use regex::Regex;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A matched value with its location in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte range of the match in the source text.
    pub position: (usize, usize),
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, start: usize, end: usize, source: impl Into<String>) -> Self {
        Self {
            value,
            position: (start, end),
            source: source.into(),
        }
    }
}

/// Find the body of a section introduced by `heading`.
///
/// The body starts after the heading and any following whitespace, and runs
/// up to the first `end` match or the end of the text. When `reject` is set,
/// a body containing that character is skipped and the next heading
/// occurrence is tried.
pub(crate) fn section_after<'t>(
    text: &'t str,
    heading: &Regex,
    end: &Regex,
    reject: Option<char>,
) -> Option<&'t str> {
    for heading_match in heading.find_iter(text) {
        let body = text[heading_match.end()..].trim_start();
        let stop = end.find(body).map(|m| m.start()).unwrap_or(body.len());
        let section = &body[..stop];

        if reject.is_some_and(|c| section.contains(c)) {
            continue;
        }
        return Some(section);
    }

    None
}

/// Split a section into trimmed, non-blank lines.
pub(crate) fn section_lines(section: &str) -> Vec<String> {
    section
        .split('\n')
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect()
}
