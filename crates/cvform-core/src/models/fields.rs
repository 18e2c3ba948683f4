//! Labeled fields and validation outcomes.

use serde::{Deserialize, Serialize};

/// A `(label, value)` pair, the unit of every report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledField {
    /// Field label, e.g. "Email".
    pub label: String,
    /// Field value as entered or extracted.
    pub value: String,
}

impl LabeledField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl<L: Into<String>, V: Into<String>> From<(L, V)> for LabeledField {
    fn from((label, value): (L, V)) -> Self {
        Self::new(label, value)
    }
}

/// Result of validating a single field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Whether the value passed validation.
    pub is_valid: bool,
    /// Empty for valid values, otherwise the diagnostic.
    pub message: String,
}

impl ValidationOutcome {
    /// A passing outcome.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    /// A failing outcome with the given diagnostic.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}
