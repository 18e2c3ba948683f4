//! Validate command - check form field values.

use std::fs;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use console::style;
use tracing::{debug, info};

use cvform_core::models::fields::LabeledField;
use cvform_core::report::{format, ReportStyle};
use cvform_core::validation::{FieldValidator, FORM_FIELDS};

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Full name
    #[arg(long)]
    name: Option<String>,

    /// Email address
    #[arg(long)]
    email: Option<String>,

    /// Phone number
    #[arg(long)]
    phone: Option<String>,

    /// Password
    #[arg(long)]
    password: Option<String>,

    /// Street address
    #[arg(long)]
    address: Option<String>,

    /// Postal code
    #[arg(long)]
    postal_code: Option<String>,

    /// Additional field as LABEL=VALUE (repeatable)
    #[arg(long = "field", value_name = "LABEL=VALUE", value_parser = parse_field)]
    fields: Vec<LabeledField>,

    /// Check every form field, treating missing ones as empty
    #[arg(long)]
    all: bool,

    /// Save the non-empty fields to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Format of the saved file
    #[arg(short, long, value_enum, default_value = "txt")]
    format: SaveFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SaveFormat {
    /// `label: value` lines
    Txt,
    /// Quoted CSV lines
    Csv,
}

impl From<SaveFormat> for ReportStyle {
    fn from(format: SaveFormat) -> Self {
        match format {
            SaveFormat::Txt => ReportStyle::Plain,
            SaveFormat::Csv => ReportStyle::Csv,
        }
    }
}

fn parse_field(s: &str) -> Result<LabeledField, String> {
    let (label, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected LABEL=VALUE, got '{}'", s))?;

    if label.trim().is_empty() {
        return Err("field label cannot be empty".to_string());
    }

    Ok(LabeledField::new(label.trim(), value))
}

impl ValidateArgs {
    /// Collect the fields to check: form fields in entry order, then extras.
    fn collect_fields(&self) -> Vec<LabeledField> {
        let form_values = [
            &self.name,
            &self.email,
            &self.phone,
            &self.password,
            &self.address,
            &self.postal_code,
        ];

        let mut fields: Vec<LabeledField> = FORM_FIELDS
            .iter()
            .zip(form_values)
            .filter_map(|(label, value)| match value {
                Some(value) => Some(LabeledField::new(*label, value.as_str())),
                None if self.all => Some(LabeledField::new(*label, "")),
                None => None,
            })
            .collect();

        fields.extend(self.fields.iter().cloned());
        fields
    }
}

pub async fn run(args: ValidateArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let validator = FieldValidator::from_config(&config)?;

    let fields = args.collect_fields();
    if fields.is_empty() {
        anyhow::bail!("No fields given. Use --name, --email, ... or --field LABEL=VALUE");
    }

    info!("Validating {} fields", fields.len());

    // Save first; saving does not depend on validity
    if let Some(output_path) = &args.output {
        let filled: Vec<LabeledField> = fields
            .iter()
            .filter(|f| !f.value.trim().is_empty())
            .cloned()
            .collect();

        let report_style = ReportStyle::from(args.format);
        let output_path = if output_path.extension().is_none() {
            output_path.with_extension(report_style.extension())
        } else {
            output_path.clone()
        };

        fs::write(&output_path, format(&filled, report_style))?;
        println!(
            "{} Saved {} fields to {}",
            style("✓").green(),
            filled.len(),
            output_path.display()
        );
    }

    let outcomes = validator.validate_all(&fields);
    let mut failed = 0;

    for (field, outcome) in &outcomes {
        if outcome.is_valid {
            println!("  {} {}", style("✓").green(), field.label);
        } else {
            failed += 1;
            println!(
                "  {} {}: {}",
                style("✗").red(),
                field.label,
                outcome.message
            );
        }
    }

    debug!("{} of {} fields failed", failed, outcomes.len());

    if failed > 0 {
        anyhow::bail!("{} of {} fields failed validation", failed, outcomes.len());
    }

    println!("{} All fields are valid!", style("✓").green());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("Postal Code=12345").unwrap(),
            LabeledField::new("Postal Code", "12345")
        );
        assert_eq!(
            parse_field("Note=a=b").unwrap(),
            LabeledField::new("Note", "a=b")
        );
        assert!(parse_field("no separator").is_err());
        assert!(parse_field(" =x").is_err());
    }
}
