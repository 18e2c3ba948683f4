//! Common regex patterns for CV extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Name: labeled first, bare two-word sequence as fallback
    pub static ref CV_NAME: Regex = Regex::new(
        r"(?i)name:\s*([a-zA-Z \t]+)|([a-zA-Z]+[ \t][a-zA-Z \t]+)"
    ).unwrap();

    // Email anywhere in the text
    pub static ref CV_EMAIL: Regex = Regex::new(
        r"(?i)[\w.-]+@[\w.-]+\.\w+"
    ).unwrap();

    // Phone numbers
    pub static ref CV_PHONE_LABELED: Regex = Regex::new(
        r"(?i)phone:?\s*(\+?\(?\d[\d \t()-]{10,})"
    ).unwrap();

    pub static ref CV_PHONE_STANDALONE: Regex = Regex::new(
        r"\+?\(?\d[\d \t()-]{10,}"
    ).unwrap();

    // Section headings
    pub static ref SKILLS_HEADING: Regex = Regex::new(
        r"(?i)skills:?"
    ).unwrap();

    pub static ref SKILLS_END: Regex = Regex::new(
        r"(?i)\n\n|experience|education"
    ).unwrap();

    pub static ref EXPERIENCE_HEADING: Regex = Regex::new(
        r"(?i)experience:?"
    ).unwrap();

    pub static ref EXPERIENCE_END: Regex = Regex::new(
        r"(?i)\n\n|education"
    ).unwrap();

    // Experience duration, e.g. "5 years of experience", "3 yrs"
    pub static ref YEARS_OF_EXPERIENCE: Regex = Regex::new(
        r"(?i)(\d+)\s*(?:years?|yrs?)(?:\s+of\s+)?(?:experience)?"
    ).unwrap();

    // Job block: "<title> - <company>" line, optional blank lines, date range line
    pub static ref JOB_BLOCK: Regex = Regex::new(
        r"(?i)([\w \t]+)[—–-]([\w \t]+)\r?\n\s*([\w \t]+[ \t]\d{4}[ \t]*[—–-][ \t]*(?:present|[\w \t]*\d{4}))"
    ).unwrap();

    // Label lines already covered by other fields
    pub static ref JOB_LABEL_LINE: Regex = Regex::new(
        r"^(?:Experience|Job Title|Company|Period)"
    ).unwrap();
}
