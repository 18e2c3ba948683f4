//! Name, email and phone extraction.

use super::patterns::{CV_EMAIL, CV_NAME, CV_PHONE_LABELED, CV_PHONE_STANDALONE};
use super::{ExtractionMatch, FieldExtractor};

/// Minimum number of digits for an unlabeled phone number.
const MIN_STANDALONE_DIGITS: usize = 10;

/// Candidate name extractor.
///
/// Prefers a `Name:` label; falls back to the first run of two or more
/// words made only of letters.
pub struct NameExtractor;

impl NameExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NameExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        // Only the leftmost match is considered; a blank label capture
        // falls back to the bare capture of that same match.
        let caps = CV_NAME.captures(text)?;
        name_from_captures(&caps)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        CV_NAME
            .captures_iter(text)
            .filter_map(|caps| name_from_captures(&caps))
            .collect()
    }
}

fn name_from_captures(caps: &regex::Captures<'_>) -> Option<ExtractionMatch<String>> {
    let labeled = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
    let name = if labeled.is_empty() {
        caps.get(2).map(|m| m.as_str().trim()).unwrap_or("")
    } else {
        labeled
    };

    if name.is_empty() {
        return None;
    }

    let full_match = caps.get(0)?;
    Some(ExtractionMatch::new(
        name.to_string(),
        full_match.start(),
        full_match.end(),
        full_match.as_str(),
    ))
}

/// Email address extractor.
pub struct EmailExtractor;

impl EmailExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmailExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for EmailExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        CV_EMAIL
            .find(text)
            .map(|m| ExtractionMatch::new(m.as_str().to_string(), m.start(), m.end(), m.as_str()))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        CV_EMAIL
            .find_iter(text)
            .map(|m| ExtractionMatch::new(m.as_str().to_string(), m.start(), m.end(), m.as_str()))
            .collect()
    }
}

/// Phone number extractor.
pub struct PhoneExtractor {
    allow_unlabeled: bool,
}

impl PhoneExtractor {
    /// Create a new phone extractor.
    pub fn new() -> Self {
        Self {
            allow_unlabeled: true,
        }
    }

    /// Set whether numbers without a "phone" label are accepted.
    pub fn with_unlabeled(mut self, allow: bool) -> Self {
        self.allow_unlabeled = allow;
        self
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        // Labeled numbers come first
        for caps in CV_PHONE_LABELED.captures_iter(text) {
            if let (Some(full_match), Some(number)) = (caps.get(0), caps.get(1)) {
                results.push(ExtractionMatch::new(
                    number.as_str().trim().to_string(),
                    full_match.start(),
                    full_match.end(),
                    full_match.as_str(),
                ));
            }
        }

        if !self.allow_unlabeled {
            return results;
        }

        for m in CV_PHONE_STANDALONE.find_iter(text) {
            let number = m.as_str().trim();

            // Skip if already found with labeled pattern
            if results.iter().any(|r| r.value == number) {
                continue;
            }

            // Year ranges such as "2018 - 2020" share the shape
            let digits = number.chars().filter(|c| c.is_ascii_digit()).count();
            if digits < MIN_STANDALONE_DIGITS {
                continue;
            }

            results.push(ExtractionMatch::new(
                number.to_string(),
                m.start(),
                m.end(),
                m.as_str(),
            ));
        }

        results
    }
}

/// Extract the candidate name from text.
pub fn extract_name(text: &str) -> Option<String> {
    NameExtractor::new().extract(text).map(|m| m.value)
}

/// Extract the first email address from text.
pub fn extract_email(text: &str) -> Option<String> {
    EmailExtractor::new().extract(text).map(|m| m.value)
}

/// Extract the first phone number from text.
pub fn extract_phone(text: &str) -> Option<String> {
    PhoneExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_name_labeled() {
        let text = "Name: Jane Doe\nEmail: jane@x.com";
        assert_eq!(extract_name(text), Some("Jane Doe".to_string()));
    }

    #[test]
    fn test_extract_name_label_on_next_line() {
        assert_eq!(
            extract_name("NAME:\nJohn Smith\n"),
            Some("John Smith".to_string())
        );
    }

    #[test]
    fn test_extract_name_bare_fallback() {
        let text = "Ada Lovelace\nada@engine.org";
        assert_eq!(extract_name(text), Some("Ada Lovelace".to_string()));
    }

    #[test]
    fn test_extract_name_blank_label_gives_up() {
        // The label matches first but captures only whitespace
        assert_eq!(extract_name("Name: \n42"), None);
    }

    #[test]
    fn test_extract_name_none() {
        assert_eq!(extract_name("12345 !!! 678"), None);
    }

    #[test]
    fn test_extract_email() {
        let text = "Contact me at John.Smith-1@Mail.Example.COM or later.";
        assert_eq!(
            extract_email(text),
            Some("John.Smith-1@Mail.Example.COM".to_string())
        );
        assert_eq!(extract_email("no address here"), None);
    }

    #[test]
    fn test_extract_phone_labeled() {
        let text = "Phone: +1 (555) 123-4567\nEmail: a@b.co";
        assert_eq!(extract_phone(text), Some("+1 (555) 123-4567".to_string()));
    }

    #[test]
    fn test_extract_phone_prefers_labeled() {
        let text = "Ref 4455 6677 8899\nphone 555 123 45678";
        assert_eq!(extract_phone(text), Some("555 123 45678".to_string()));
    }

    #[test]
    fn test_extract_phone_standalone() {
        let text = "Jane Doe\n+44 20 7946 0958\n";
        assert_eq!(extract_phone(text), Some("+44 20 7946 0958".to_string()));
    }

    #[test]
    fn test_year_range_is_not_a_phone() {
        let text = "Engineer - Acme\nJan 2018 - 2020";
        assert_eq!(extract_phone(text), None);
    }

    #[test]
    fn test_unlabeled_disabled() {
        let extractor = PhoneExtractor::new().with_unlabeled(false);
        assert!(extractor.extract("+44 20 7946 0958").is_none());
    }

    #[test]
    fn test_phone_with_area_code_in_parentheses() {
        let text = "Jane Doe\nPhone: (555) 123-4567\n";
        assert_eq!(extract_phone(text), Some("(555) 123-4567".to_string()));
        assert_eq!(
            extract_phone("Call (555) 123-4567 after six"),
            Some("(555) 123-4567".to_string())
        );
    }

    #[test]
    fn test_extract_all_names() {
        let names: Vec<String> = NameExtractor::new()
            .extract_all("Name: Jane Doe\nAda Lovelace\n")
            .into_iter()
            .map(|m| m.value)
            .collect();
        assert_eq!(names, vec!["Jane Doe".to_string(), "Ada Lovelace".to_string()]);
    }

    #[test]
    fn test_extract_all_emails() {
        let matches = EmailExtractor::new().extract_all("Work: a@b.co, home: c@d.org");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].value, "a@b.co");
        assert_eq!(matches[1].value, "c@d.org");
        assert_eq!(matches[1].position, (20, 27));
    }
}
