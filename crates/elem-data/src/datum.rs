//! Immutable physical quantity with units and provenance.

use crate::units::{self, UnitError};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::fmt;

const RULE_WIDTH: usize = 40;

/// One literature value: label, units, decimal value, and where it came from.
///
/// The value is held as a [`Decimal`] so that significant figures published in
/// the source survive storage and unit conversion. Fields are private; a
/// `Datum` never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Datum {
    label: String,
    units: String,
    value: Decimal,
    comment: Option<String>,
    doi: Option<String>,
}

impl Datum {
    pub fn new(label: impl Into<String>, units: impl Into<String>, value: Decimal) -> Self {
        Self {
            label: label.into(),
            units: units.into(),
            value,
            comment: None,
            doi: None,
        }
    }

    /// Attach a free-text comment (uncertainty note, alias rationale, ...).
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Attach the DOI of the publication the value was taken from.
    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(doi.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn doi(&self) -> Option<&str> {
        self.doi.as_deref()
    }

    /// Value rescaled into `units`.
    ///
    /// Stays in decimal arithmetic; the only rounding is the conversion ratio's
    /// own (at most one decimal division, see [`units::conversion_factor`]).
    pub fn to_units(&self, units: &str) -> Result<Decimal, UnitError> {
        units::convert(self.value, &self.units, units)
    }

    /// Value rescaled into `units` and narrowed to `f64`.
    pub fn to_f64_units(&self, units: &str) -> Result<f64, UnitError> {
        let value = self.to_units(units)?;
        // Decimal always fits in f64's range
        Ok(value.to_f64().unwrap_or(f64::NAN))
    }

    /// A new datum expressed in `units`, keeping label and provenance.
    pub fn converted(&self, units: &str) -> Result<Datum, UnitError> {
        let canonical = units::lookup_unit(units)?.name;
        Ok(Datum {
            label: self.label.clone(),
            units: canonical.to_string(),
            value: self.to_units(units)?,
            comment: self.comment.clone(),
            doi: self.doi.clone(),
        })
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "{:^width$}",
            format!("Datum {}", self.label),
            width = RULE_WIDTH
        )?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Data:     {}", self.value)?;
        writeln!(f, "Units:    [{}]", self.units)?;
        writeln!(f, "doi:      {}", self.doi.as_deref().unwrap_or("None"))?;
        writeln!(f, "Comment:  {}", self.comment.as_deref().unwrap_or(""))?;
        write!(f, "{rule}")
    }
}

/// Aligned listing of many datums, sorted by key.
///
/// Each line reads `"<key>" => <value, 12 decimals> [<units>]`, followed by the
/// comment when one is present. Output is deterministic for a given input set.
pub fn print_variables<'a, I>(vars: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a Datum)>,
{
    let mut entries: Vec<(&str, &Datum)> = vars.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut text = vec![
        String::new(),
        "  Variable Map:".to_string(),
        format!("  {}", "-".repeat(76)),
    ];

    if entries.is_empty() {
        text.push("  (none)".to_string());
        return text.join("\n");
    }

    let key_width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0) + 2;
    for (key, datum) in entries {
        let quoted = format!("\"{key}\"");
        let value = format!("{:.12}", datum.value);
        let mut line = format!(
            "  {quoted:<key_width$} => {value:>20} [{}]",
            datum.units
        );
        if let Some(comment) = &datum.comment {
            line.push_str("  ");
            line.push_str(comment);
        }
        text.push(line);
    }
    text.push(String::new());
    text.join("\n")
}
