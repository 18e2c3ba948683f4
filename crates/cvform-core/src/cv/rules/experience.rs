//! Experience duration, job details and responsibilities extraction.

use crate::models::profile::JobDetails;

use super::patterns::{
    EXPERIENCE_END, EXPERIENCE_HEADING, JOB_BLOCK, JOB_LABEL_LINE, YEARS_OF_EXPERIENCE,
};
use super::{section_after, ExtractionMatch, FieldExtractor};

/// Experience duration extractor ("5 years of experience", "3 yrs").
pub struct YearsExtractor;

impl YearsExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YearsExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for YearsExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        YEARS_OF_EXPERIENCE
            .find_iter(text)
            .map(|m| ExtractionMatch::new(m.as_str().trim().to_string(), m.start(), m.end(), m.as_str()))
            .collect()
    }
}

/// Job block extractor.
///
/// Matches a `<title> - <company>` line (em dash, en dash or hyphen)
/// followed, possibly after blank lines, by a date range line such as
/// `Jan 2020 - Present` or `March 2018 – June 2021`.
pub struct JobExtractor;

impl JobExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JobExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for JobExtractor {
    type Output = ExtractionMatch<JobDetails>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in JOB_BLOCK.captures_iter(text) {
            let (Some(full_match), Some(title), Some(company), Some(period)) =
                (caps.get(0), caps.get(1), caps.get(2), caps.get(3))
            else {
                continue;
            };

            let details = JobDetails {
                title: title.as_str().trim().to_string(),
                company: company.as_str().trim().to_string(),
                period: period.as_str().trim().to_string(),
            };

            if details.title.is_empty() || details.company.is_empty() {
                continue;
            }

            results.push(ExtractionMatch::new(
                details,
                full_match.start(),
                full_match.end(),
                full_match.as_str(),
            ));
        }

        results
    }
}

/// Extract the experience duration.
pub fn extract_experience_years(text: &str) -> Option<String> {
    YearsExtractor::new().extract(text).map(|m| m.value)
}

/// Extract the first job title, company and period block.
pub fn extract_job_details(text: &str) -> Option<JobDetails> {
    JobExtractor::new().extract(text).map(|m| m.value)
}

/// Extract responsibilities listed under an "Experience" heading.
///
/// The section ends at a blank line, an "Education" heading, or the end
/// of the text. Label lines (Job Title, Company, Period) and the lines of
/// a job block inside the section are dropped since those are reported
/// separately. Returns `None` when nothing survives.
pub fn extract_responsibilities(text: &str) -> Option<Vec<String>> {
    let section = section_after(text, &EXPERIENCE_HEADING, &EXPERIENCE_END, None)?;

    let blocks: Vec<(usize, usize)> = JOB_BLOCK
        .find_iter(section)
        .map(|m| (m.start(), m.end()))
        .collect();

    let mut responsibilities = Vec::new();
    let mut line_start = 0;

    for raw_line in section.split('\n') {
        let line_end = line_start + raw_line.len();
        let in_block = blocks
            .iter()
            .any(|&(start, end)| start < line_end && line_start < end);
        line_start = line_end + 1;

        let line = raw_line.trim();
        if line.is_empty() || in_block || JOB_LABEL_LINE.is_match(line) {
            continue;
        }
        responsibilities.push(line.to_string());
    }

    if responsibilities.is_empty() {
        None
    } else {
        Some(responsibilities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_years() {
        assert_eq!(
            extract_experience_years("Over 7 years of experience in fintech"),
            Some("7 years of experience".to_string())
        );
        assert_eq!(extract_experience_years("3yrs Java"), Some("3yrs".to_string()));
        assert_eq!(extract_experience_years("10 Years"), Some("10 Years".to_string()));
        assert_eq!(extract_experience_years("no numbers"), None);
    }

    #[test]
    fn test_extract_job_details() {
        let text = "Experience\nSenior Engineer — Globex Corp\n\nJan 2019 – Present\nBuilt things";
        let job = extract_job_details(text).unwrap();

        assert_eq!(job.title, "Senior Engineer");
        assert_eq!(job.company, "Globex Corp");
        assert_eq!(job.period, "Jan 2019 – Present");
    }

    #[test]
    fn test_extract_job_details_year_range() {
        let text = "Analyst - Initech\nMarch 2015 - June 2018\n";
        let job = extract_job_details(text).unwrap();

        assert_eq!(job.title, "Analyst");
        assert_eq!(job.company, "Initech");
        assert_eq!(job.period, "March 2015 - June 2018");
    }

    #[test]
    fn test_job_details_need_separator() {
        let text = "Analyst at Initech\nMarch 2015 - June 2018\n";
        assert_eq!(extract_job_details(text), None);
    }

    #[test]
    fn test_extract_responsibilities() {
        let text = "Experience\n\
                    Job Title: Engineer\n\
                    Senior Engineer — Globex Corp\n\
                    Jan 2019 – Present\n\
                    - Led migration to Rust\n\
                    Mentored two interns\n\
                    \n\
                    Education\n\
                    BSc";

        assert_eq!(
            extract_responsibilities(text),
            Some(vec![
                "- Led migration to Rust".to_string(),
                "Mentored two interns".to_string(),
            ])
        );
    }

    #[test]
    fn test_responsibilities_stop_at_education() {
        let text = "Work Experience: Support desk\nEducation\nMIT";
        assert_eq!(
            extract_responsibilities(text),
            Some(vec!["Support desk".to_string()])
        );
    }

    #[test]
    fn test_responsibilities_keep_hyphenated_lines() {
        let text = "Experience\n\
                    Led cross-functional team of five\n\
                    Built real-time billing pipeline\n\
                    Mentored interns";

        assert_eq!(
            extract_responsibilities(text),
            Some(vec![
                "Led cross-functional team of five".to_string(),
                "Built real-time billing pipeline".to_string(),
                "Mentored interns".to_string(),
            ])
        );
    }

    #[test]
    fn test_title_line_without_period_is_kept() {
        let text = "Experience\nBackend Developer – Initech\nWrote event-driven services";
        assert_eq!(
            extract_responsibilities(text),
            Some(vec![
                "Backend Developer – Initech".to_string(),
                "Wrote event-driven services".to_string(),
            ])
        );
    }

    #[test]
    fn test_responsibilities_all_filtered() {
        let text = "Experience\nCompany: Acme\nPeriod: 2020";
        assert_eq!(extract_responsibilities(text), None);
    }
}
