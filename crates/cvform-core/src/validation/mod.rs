//! Form field validation.
//!
//! Validation rules are data: a [`RuleSet`] maps a field name to a
//! [`FieldRule`] (pattern plus failure message). Fields without a rule are
//! accepted as-is.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::error::RuleError;
use crate::models::config::{CvformConfig, RuleConfig, ValidationConfig};
use crate::models::fields::{LabeledField, ValidationOutcome};

lazy_static! {
    // Form validation (whole-value matches)
    pub static ref FORM_NAME: Regex = Regex::new(
        r"^[a-zA-Z\s]{2,50}$"
    ).unwrap();

    pub static ref FORM_EMAIL: Regex = Regex::new(
        r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"
    ).unwrap();

    pub static ref FORM_PHONE: Regex = Regex::new(
        r"^\+?[\d\s-]{10,15}$"
    ).unwrap();

    pub static ref FORM_POSTAL_CODE: Regex = Regex::new(
        r"^\d{5}(-\d{4})?$"
    ).unwrap();
}

/// Message for empty or whitespace-only values.
pub const EMPTY_FIELD_MESSAGE: &str = "Field cannot be empty";

/// Fields of the form, in entry order.
pub const FORM_FIELDS: [&str; 6] = ["Name", "Email", "Phone", "Password", "Address", "Postal Code"];

/// A validation pattern and the message reported when it fails.
#[derive(Debug, Clone)]
pub struct FieldRule {
    field: String,
    pattern: Regex,
    message: String,
}

impl FieldRule {
    /// Create a rule from a compiled pattern.
    pub fn new(field: impl Into<String>, pattern: Regex, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            pattern,
            message: message.into(),
        }
    }

    /// Compile a rule from a pattern string.
    pub fn compile(field: &str, pattern: &str, message: &str) -> Result<Self, RuleError> {
        if field.trim().is_empty() {
            return Err(RuleError::EmptyField);
        }

        let pattern = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            field: field.to_string(),
            source,
        })?;

        Ok(Self::new(field, pattern, message))
    }

    /// Check a value against the rule.
    pub fn check(&self, value: &str) -> ValidationOutcome {
        if self.pattern.is_match(value) {
            ValidationOutcome::valid()
        } else {
            ValidationOutcome::invalid(&self.message)
        }
    }
}

impl TryFrom<&RuleConfig> for FieldRule {
    type Error = RuleError;

    fn try_from(config: &RuleConfig) -> Result<Self, Self::Error> {
        Self::compile(&config.field, &config.pattern, &config.message)
    }
}

/// Lookup table from field name to rule.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: HashMap<String, FieldRule>,
}

impl RuleSet {
    /// An empty rule set; every non-empty value is valid.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in rules for Name, Email, Phone and Postal Code.
    pub fn builtin() -> Self {
        Self::empty()
            .with_rule(FieldRule::new("Name", FORM_NAME.clone(), "Invalid name format"))
            .with_rule(FieldRule::new("Email", FORM_EMAIL.clone(), "Invalid email format"))
            .with_rule(FieldRule::new("Phone", FORM_PHONE.clone(), "Invalid phone format"))
            .with_rule(FieldRule::new(
                "Postal Code",
                FORM_POSTAL_CODE.clone(),
                "Invalid postal code",
            ))
    }

    /// Built-in rules with configured rules layered on top.
    pub fn from_config(config: &ValidationConfig) -> Result<Self, RuleError> {
        let mut rules = Self::builtin();
        for rule in &config.extra_rules {
            debug!("Adding validation rule for {}", rule.field);
            rules = rules.with_rule(FieldRule::try_from(rule)?);
        }
        Ok(rules)
    }

    /// Add a rule, replacing any existing rule for the same field.
    pub fn with_rule(mut self, rule: FieldRule) -> Self {
        self.rules.insert(rule.field.clone(), rule);
        self
    }

    /// Look up the rule for a field name.
    pub fn get(&self, field: &str) -> Option<&FieldRule> {
        self.rules.get(field)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Field validator backed by a [`RuleSet`].
#[derive(Debug, Clone)]
pub struct FieldValidator {
    rules: RuleSet,
}

impl FieldValidator {
    /// Create a validator with the built-in rules.
    pub fn new() -> Self {
        Self::with_rules(RuleSet::builtin())
    }

    /// Create a validator with the built-in and configured rules.
    pub fn from_config(config: &CvformConfig) -> crate::Result<Self> {
        Ok(Self::with_rules(RuleSet::from_config(&config.validation)?))
    }

    /// Create a validator with a custom rule set.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validate a single value.
    ///
    /// Empty values always fail. Trailing colons on the field name are
    /// ignored, so form labels such as `"Email:"` resolve to `"Email"`.
    pub fn validate(&self, field_name: &str, value: &str) -> ValidationOutcome {
        if value.trim().is_empty() {
            return ValidationOutcome::invalid(EMPTY_FIELD_MESSAGE);
        }

        match self.rules.get(field_name.trim_end_matches(':')) {
            Some(rule) => rule.check(value),
            None => ValidationOutcome::valid(),
        }
    }

    /// Validate every field, in input order.
    pub fn validate_all<'a, I>(&self, fields: I) -> Vec<(LabeledField, ValidationOutcome)>
    where
        I: IntoIterator<Item = &'a LabeledField>,
    {
        fields
            .into_iter()
            .map(|field| (field.clone(), self.validate(&field.label, &field.value)))
            .collect()
    }
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a value with the built-in rules.
pub fn validate(field_name: &str, value: &str) -> ValidationOutcome {
    FieldValidator::new().validate(field_name, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_always_fails() {
        for field in FORM_FIELDS.iter().chain(["Anything"].iter()) {
            for value in ["", "   ", "\t\n"] {
                assert_eq!(
                    validate(field, value),
                    ValidationOutcome::invalid(EMPTY_FIELD_MESSAGE)
                );
            }
        }
    }

    #[test]
    fn test_name() {
        assert!(validate("Name", "John Smith").is_valid);
        assert!(!validate("Name", "J0hn").is_valid);
        assert!(!validate("Name", "J").is_valid);
        assert!(!validate("Name", &"a".repeat(51)).is_valid);
        assert_eq!(validate("Name", "J0hn").message, "Invalid name format");
    }

    #[test]
    fn test_email() {
        assert!(validate("Email", "a@b.co").is_valid);
        assert!(validate("Email", "first.last+tag@mail.example.org").is_valid);
        assert!(!validate("Email", "not-an-email").is_valid);
        assert!(!validate("Email", "a@b.c").is_valid);
    }

    #[test]
    fn test_phone() {
        assert!(validate("Phone", "+1 555-123-4567").is_valid);
        assert!(validate("Phone", "0123456789").is_valid);
        assert!(!validate("Phone", "12345").is_valid);
        assert!(!validate("Phone", "(555) 123-4567").is_valid);
        assert_eq!(validate("Phone", "12345").message, "Invalid phone format");
    }

    #[test]
    fn test_postal_code() {
        assert!(validate("Postal Code", "12345").is_valid);
        assert!(validate("Postal Code", "12345-6789").is_valid);
        assert!(!validate("Postal Code", "1234").is_valid);
        assert!(!validate("Postal Code", "12345-678").is_valid);
    }

    #[test]
    fn test_unknown_field_passes() {
        assert_eq!(validate("Password", "x"), ValidationOutcome::valid());
        assert_eq!(validate("name", "J0hn"), ValidationOutcome::valid());
    }

    #[test]
    fn test_empty_rule_set_accepts_any_value() {
        let rules = RuleSet::empty();
        assert!(rules.is_empty());
        assert!(!RuleSet::builtin().is_empty());

        let validator = FieldValidator::with_rules(rules);
        assert!(validator.validate("Email", "not-an-email").is_valid);
        assert!(!validator.validate("Email", " ").is_valid);
    }

    #[test]
    fn test_label_colon_is_ignored() {
        assert!(!validate("Postal Code:", "abc").is_valid);
    }

    #[test]
    fn test_validate_all_reports_every_field() {
        let fields = vec![
            LabeledField::new("Name", "J0hn"),
            LabeledField::new("Email", ""),
            LabeledField::new("Phone", "+1 555-123-4567"),
        ];

        let outcomes: Vec<ValidationOutcome> = FieldValidator::new()
            .validate_all(&fields)
            .into_iter()
            .map(|(_, outcome)| outcome)
            .collect();

        assert_eq!(
            outcomes,
            vec![
                ValidationOutcome::invalid("Invalid name format"),
                ValidationOutcome::invalid(EMPTY_FIELD_MESSAGE),
                ValidationOutcome::valid(),
            ]
        );
    }

    #[test]
    fn test_config_rules() {
        let config = ValidationConfig {
            extra_rules: vec![
                RuleConfig {
                    field: "Address".to_string(),
                    pattern: r"^\d+ .+$".to_string(),
                    message: "Address must start with a number".to_string(),
                },
                RuleConfig {
                    field: "Postal Code".to_string(),
                    pattern: r"^\d{2}-\d{3}$".to_string(),
                    message: "Invalid Polish postal code".to_string(),
                },
            ],
        };

        let validator = FieldValidator::with_rules(RuleSet::from_config(&config).unwrap());
        assert_eq!(validator.rules().len(), 5);
        assert!(validator.validate("Address", "10 Downing St").is_valid);
        assert_eq!(
            validator.validate("Address", "Downing St").message,
            "Address must start with a number"
        );
        assert!(validator.validate("Postal Code", "00-950").is_valid);
        assert!(!validator.validate("Postal Code", "12345").is_valid);
    }

    #[test]
    fn test_bad_config_pattern() {
        let rule = RuleConfig {
            field: "Address".to_string(),
            pattern: "(".to_string(),
            message: "x".to_string(),
        };
        assert!(matches!(
            FieldRule::try_from(&rule),
            Err(RuleError::InvalidPattern { .. })
        ));
        assert!(matches!(
            FieldRule::compile(" ", ".*", "x"),
            Err(RuleError::EmptyField)
        ));
    }
}
