//! Report rendering in plain `label: value` and quoted CSV styles.

use serde::{Deserialize, Serialize};

use crate::models::fields::LabeledField;

/// Output encoding of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStyle {
    /// `label: value` per line.
    Plain,
    /// `"label","value"` per line.
    Csv,
}

impl ReportStyle {
    /// File extension used when saving a report in this style.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Plain => "txt",
            Self::Csv => "csv",
        }
    }
}

/// Render labeled fields, one line per field, in input order.
pub fn format(fields: &[LabeledField], style: ReportStyle) -> String {
    match style {
        ReportStyle::Plain => fields
            .iter()
            .map(|field| format!("{}: {}\n", field.label, field.value))
            .collect(),
        ReportStyle::Csv => {
            let records: Vec<Vec<&str>> = fields
                .iter()
                .map(|field| vec![field.label.as_str(), field.value.as_str()])
                .collect();
            write_csv(&records)
        }
    }
}

/// Convert a plain-style report to CSV.
///
/// Each non-empty line is split on its first colon into a trimmed label
/// and value. Lines without a colon become a single quoted field.
pub fn reformat(plain_text: &str) -> String {
    let records: Vec<Vec<&str>> = plain_text
        .split(['\r', '\n'])
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once(':') {
            Some((label, value)) => vec![label.trim(), value.trim()],
            None => vec![line],
        })
        .collect();

    write_csv(&records)
}

/// Write records with every field quoted.
fn write_csv(records: &[Vec<&str>]) -> String {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(vec![]);

    for record in records {
        // Writing into a Vec cannot fail
        wtr.write_record(record).expect("in-memory CSV write");
    }

    let data = wtr.into_inner().expect("in-memory CSV flush");
    String::from_utf8(data).expect("CSV output of UTF-8 input is UTF-8")
}
