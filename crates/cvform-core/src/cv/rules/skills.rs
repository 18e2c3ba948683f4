//! Skills section extraction.

use super::patterns::{SKILLS_END, SKILLS_HEADING};
use super::{section_after, section_lines};

/// Extract the skills listed under a "Skills" heading.
///
/// The section ends at a blank line, an "Experience" or "Education"
/// heading, or the end of the text. A section containing a period is
/// treated as prose and the next "skills" occurrence is tried instead.
/// Returns `None` when no non-blank line remains.
pub fn extract_skills(text: &str) -> Option<Vec<String>> {
    let section = section_after(text, &SKILLS_HEADING, &SKILLS_END, Some('.'))?;
    let skills = section_lines(section);

    if skills.is_empty() {
        None
    } else {
        Some(skills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_skills_until_blank_line() {
        let text = "Skills\nPython\nGo\n\nExperience\n3 years";
        assert_eq!(
            extract_skills(text),
            Some(vec!["Python".to_string(), "Go".to_string()])
        );
    }

    #[test]
    fn test_extract_skills_until_heading() {
        let text = "SKILLS:\n  Rust, SQL  \n Docker\nEducation\nBSc";
        assert_eq!(
            extract_skills(text),
            Some(vec!["Rust, SQL".to_string(), "Docker".to_string()])
        );
    }

    #[test]
    fn test_extract_skills_skips_prose_mentions() {
        let text = "Strong people skills. Fast learner\nSkills\nKotlin\n";
        assert_eq!(extract_skills(text), Some(vec!["Kotlin".to_string()]));
    }

    #[test]
    fn test_extract_skills_empty_section() {
        assert_eq!(extract_skills("Skills\nExperience\nAcme"), None);
        assert_eq!(extract_skills("No headings at all"), None);
    }
}
