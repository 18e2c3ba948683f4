//! Structured result of CV extraction.

use serde::{Deserialize, Serialize};

use super::fields::LabeledField;

/// First header line of every extraction report.
pub const REPORT_TITLE: &str = "Extracted Information:";

/// Separator line printed under [`REPORT_TITLE`].
pub const REPORT_SEPARATOR: &str = "--------------------";

/// Fields extracted from a CV.
///
/// Slots are declared in report order. A slot is `None` when its rule did
/// not match; absent slots never appear in any rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Candidate name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// First email address in the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// First phone number in the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Lines of the skills section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,

    /// Experience duration, e.g. "5 years of experience".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<String>,

    /// Most prominent job block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<JobDetails>,

    /// Lines of the experience section that are not job headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<Vec<String>>,
}

/// Job title, company and period extracted together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDetails {
    pub title: String,
    pub company: String,
    pub period: String,
}

impl ExtractionResult {
    /// Check if no rule contributed anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.skills.is_none()
            && self.experience_years.is_none()
            && self.job.is_none()
            && self.responsibilities.is_none()
    }

    /// Number of report fields present (job details count as three).
    pub fn field_count(&self) -> usize {
        self.labeled_fields().len() + usize::from(self.responsibilities.is_some())
    }

    /// Flatten the single-valued slots into labeled fields, in report order.
    ///
    /// Responsibilities are a list and are not included; see
    /// [`ExtractionResult::to_plain_report`].
    pub fn labeled_fields(&self) -> Vec<LabeledField> {
        let mut fields = Vec::new();

        if let Some(name) = &self.name {
            fields.push(LabeledField::new("Name", name));
        }
        if let Some(email) = &self.email {
            fields.push(LabeledField::new("Email", email));
        }
        if let Some(phone) = &self.phone {
            fields.push(LabeledField::new("Phone", phone));
        }
        if let Some(skills) = &self.skills {
            fields.push(LabeledField::new("Skills", skills.join(", ")));
        }
        if let Some(years) = &self.experience_years {
            fields.push(LabeledField::new("Experience", years));
        }
        if let Some(job) = &self.job {
            fields.push(LabeledField::new("Job Title", &job.title));
            fields.push(LabeledField::new("Company", &job.company));
            fields.push(LabeledField::new("Period", &job.period));
        }

        fields
    }

    /// Render the human-readable report.
    ///
    /// Always starts with the title and separator lines, followed by one
    /// `label: value` line per present field and a bulleted
    /// responsibilities block.
    pub fn to_plain_report(&self) -> String {
        let mut output = String::new();

        output.push_str(REPORT_TITLE);
        output.push('\n');
        output.push_str(REPORT_SEPARATOR);
        output.push('\n');

        for field in self.labeled_fields() {
            output.push_str(&format!("{}: {}\n", field.label, field.value));
        }

        if let Some(responsibilities) = &self.responsibilities {
            output.push_str("Responsibilities:\n");
            for item in responsibilities {
                output.push_str(&format!("- {}\n", item));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_result_renders_header_only() {
        let result = ExtractionResult::default();
        assert!(result.is_empty());
        assert_eq!(
            result.to_plain_report(),
            "Extracted Information:\n--------------------\n"
        );
    }

    #[test]
    fn test_report_order_is_fixed() {
        let result = ExtractionResult {
            responsibilities: Some(vec!["Built APIs".to_string()]),
            job: Some(JobDetails {
                title: "Engineer".to_string(),
                company: "Acme".to_string(),
                period: "Jan 2020 - Present".to_string(),
            }),
            name: Some("Jane Doe".to_string()),
            skills: Some(vec!["Rust".to_string(), "Go".to_string()]),
            ..Default::default()
        };

        assert_eq!(
            result.to_plain_report(),
            "Extracted Information:\n\
             --------------------\n\
             Name: Jane Doe\n\
             Skills: Rust, Go\n\
             Job Title: Engineer\n\
             Company: Acme\n\
             Period: Jan 2020 - Present\n\
             Responsibilities:\n\
             - Built APIs\n"
        );
        assert_eq!(result.field_count(), 6);
    }
}
