//! Covalent radii datasets.
//!
//! A [`CovalentRadii`] table owns every radius of one literature context as a
//! [`Datum`] keyed by label. Labels are either a plain symbol (`"N"`) or a
//! symbol with a hybridization/spin-state suffix (`"C_sp3"`, `"Fe_highspin"`).
//! Elements published only in specialized form get a generic alias bound to
//! their largest variant, so `get("C")` always answers.
//!
//! # Example
//!
//! ```
//! use elem_data::{covalent_radii, RadiusOptions};
//!
//! let table = covalent_radii();
//! let r_bohr = table.get("C").unwrap();
//! let r_ang = table.get_in("C", "angstrom").unwrap();
//! assert!((r_ang - 0.76).abs() < 1e-12);
//! assert!(r_bohr > r_ang);
//!
//! // Elements outside the dataset fall back to a caller-supplied value.
//! let opts = RadiusOptions::default().with_missing(4.0);
//! assert_eq!(table.lookup("Bk", &opts).unwrap().value(), Some(4.0));
//! ```

use crate::alvarez_2008::ALVAREZ_2008;
use crate::datum::{Datum, print_variables};
use crate::error::{DataError, DataResult};
use crate::periodic_table::{AtomRef, periodic_table};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const DATA_KIND: &str = "covalent radius";
const MISSING_COMMENT: &str = "Default value for missing data";

static COVALENT_RADII: OnceLock<CovalentRadii> = OnceLock::new();

/// Process-wide ALVAREZ2008 table, built on first use.
pub fn covalent_radii() -> &'static CovalentRadii {
    COVALENT_RADII.get_or_init(|| {
        CovalentRadii::new(RadiiContext::Alvarez2008)
            .expect("Failed to load bundled ALVAREZ2008 radii. This is a library bug.")
    })
}

/// Static description of one literature dataset.
#[derive(Debug)]
pub(crate) struct RadiiSource {
    pub title: &'static str,
    pub date: &'static str,
    pub doi: &'static str,
    pub units: &'static str,
    /// (label, value in `units`, comment)
    pub entries: &'static [(&'static str, &'static str, &'static str)],
}

/// Registered covalent radii contexts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RadiiContext {
    /// Alvarez, Dalton Trans. 2008
    #[default]
    Alvarez2008,
}

impl RadiiContext {
    pub const ALL: [RadiiContext; 1] = [RadiiContext::Alvarez2008];

    pub fn name(&self) -> &'static str {
        match self {
            RadiiContext::Alvarez2008 => "ALVAREZ2008",
        }
    }

    pub(crate) fn source(&self) -> &'static RadiiSource {
        match self {
            RadiiContext::Alvarez2008 => &ALVAREZ_2008,
        }
    }

    fn supported_names() -> String {
        Self::ALL.iter().map(|c| format!("'{}', ", c.name())).collect()
    }
}

impl fmt::Display for RadiiContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RadiiContext {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DataError::UnsupportedContext {
                context: s.to_string(),
                supported: Self::supported_names(),
            })
    }
}

/// Options for [`CovalentRadii::lookup`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadiusOptions {
    /// Units of a scalar result (default "bohr"). Ignored for structured results.
    pub units: String,
    /// Scalar returned when the atom is valid but has no entry, taken as
    /// already being in `units`. Ignored for structured results.
    pub missing: Option<f64>,
    /// Return the stored [`Datum`] (native units) instead of a scalar.
    pub return_tuple: bool,
}

impl Default for RadiusOptions {
    fn default() -> Self {
        Self {
            units: "bohr".to_string(),
            missing: None,
            return_tuple: false,
        }
    }
}

impl RadiusOptions {
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    pub fn with_missing(mut self, missing: f64) -> Self {
        self.missing = Some(missing);
        self
    }

    pub fn structured(mut self) -> Self {
        self.return_tuple = true;
        self
    }
}

/// Result of a lookup: a converted scalar or the stored datum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'t> {
    Value(f64),
    Datum(&'t Datum),
}

impl<'t> Lookup<'t> {
    pub fn value(&self) -> Option<f64> {
        match self {
            Lookup::Value(v) => Some(*v),
            Lookup::Datum(_) => None,
        }
    }

    pub fn datum(&self) -> Option<&'t Datum> {
        match self {
            Lookup::Value(_) => None,
            Lookup::Datum(d) => Some(*d),
        }
    }
}

/// One slot of the atomic-number-ordered export.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FixedArrayEntry {
    pub atomic_number: u8,
    pub symbol: &'static str,
    pub value: FixedValue,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FixedValue {
    /// Taken from the table, native units
    Tabulated(Datum),
    /// Caller default, native units
    Default(f64),
}

impl FixedArrayEntry {
    /// Value in the table's native units.
    pub fn value_f64(&self) -> f64 {
        match &self.value {
            FixedValue::Tabulated(d) => d.value().to_f64().unwrap_or(f64::NAN),
            FixedValue::Default(v) => *v,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self.value, FixedValue::Default(_))
    }
}

/// Covalent radii of one literature context.
#[derive(Debug, Clone)]
pub struct CovalentRadii {
    context: RadiiContext,
    title: &'static str,
    doi: &'static str,
    native_units: &'static str,
    year: i32,
    radii: BTreeMap<String, Datum>,
}

impl CovalentRadii {
    /// Load the context's source data and add generic aliases.
    pub fn new(context: RadiiContext) -> DataResult<Self> {
        let source = context.source();
        let mut radii = BTreeMap::new();

        for &(label, value, comment) in source.entries {
            check_label_prefix(label)?;
            let value =
                Decimal::from_str_exact(value).map_err(|_| DataError::MalformedSource {
                    label: label.to_string(),
                    value: value.to_string(),
                })?;
            let datum = Datum::new(label, source.units, value)
                .with_comment(comment)
                .with_doi(source.doi);
            radii.insert(label.to_string(), datum);
        }

        let aliases = generic_aliases(&radii, source);
        let alias_count = aliases.len();
        for alias in aliases {
            radii.insert(alias.label().to_string(), alias);
        }

        let year = source
            .date
            .get(..4)
            .and_then(|y| y.parse().ok())
            .ok_or_else(|| DataError::MalformedSource {
                label: "date".to_string(),
                value: source.date.to_string(),
            })?;

        tracing::debug!(
            context = context.name(),
            entries = radii.len(),
            aliases = alias_count,
            "covalent radii loaded"
        );

        Ok(Self {
            context,
            title: source.title,
            doi: source.doi,
            native_units: source.units,
            year,
            radii,
        })
    }

    /// Load a context by its registered name, e.g. `"ALVAREZ2008"`.
    pub fn from_context_name(name: &str) -> DataResult<Self> {
        Self::new(name.parse()?)
    }

    pub fn context(&self) -> RadiiContext {
        self.context
    }

    pub fn name(&self) -> &'static str {
        self.context.name()
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn doi(&self) -> &'static str {
        self.doi
    }

    pub fn native_units(&self) -> &'static str {
        self.native_units
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn len(&self) -> usize {
        self.radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// Whether `label` is an exact key of the table.
    pub fn contains(&self, label: &str) -> bool {
        self.radii.contains_key(label)
    }

    /// Entries sorted by label.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Datum)> {
        self.radii.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Full lookup honoring all [`RadiusOptions`].
    ///
    /// Exact labels such as `"C_sp3"` are used as given; anything else goes
    /// through the periodic table, so `"d"`, `6` and `"carbon"` all work.
    ///
    /// # Errors
    ///
    /// - [`DataError::NotAnElement`] if `atom` is neither a label nor an element.
    /// - [`DataError::DataUnavailable`] if the element has no entry and no
    ///   `missing` value applies (structured lookups never use `missing`).
    /// - [`DataError::Unit`] if `options.units` cannot express a length.
    pub fn lookup<'a>(
        &self,
        atom: impl Into<AtomRef<'a>>,
        options: &RadiusOptions,
    ) -> DataResult<Lookup<'_>> {
        let atom = atom.into();
        let identifier = match atom {
            AtomRef::Label(label) if self.radii.contains_key(label) => label,
            _ => periodic_table().to_symbol(atom)?,
        };

        match self.radii.get(identifier) {
            Some(datum) if options.return_tuple => Ok(Lookup::Datum(datum)),
            Some(datum) => Ok(Lookup::Value(datum.to_f64_units(&options.units)?)),
            None => match options.missing {
                Some(missing) if !options.return_tuple => {
                    tracing::trace!(atom = identifier, missing, "covalent radius fallback");
                    Ok(Lookup::Value(missing))
                }
                _ => Err(DataError::DataUnavailable {
                    data: DATA_KIND,
                    atom: identifier.to_string(),
                }),
            },
        }
    }

    /// Radius in bohr; largest variant for elements with several.
    pub fn get<'a>(&self, atom: impl Into<AtomRef<'a>>) -> DataResult<f64> {
        self.get_in(atom, "bohr")
    }

    /// Radius in `units`.
    pub fn get_in<'a>(&self, atom: impl Into<AtomRef<'a>>, units: &str) -> DataResult<f64> {
        let options = RadiusOptions::default().with_units(units);
        self.scalar(atom, &options)
    }

    /// Radius in `units`, or `missing` when the dataset lacks the element.
    pub fn get_or<'a>(
        &self,
        atom: impl Into<AtomRef<'a>>,
        units: &str,
        missing: f64,
    ) -> DataResult<f64> {
        let options = RadiusOptions::default()
            .with_units(units)
            .with_missing(missing);
        self.scalar(atom, &options)
    }

    /// Stored datum in native units.
    pub fn get_datum<'a>(&self, atom: impl Into<AtomRef<'a>>) -> DataResult<&Datum> {
        let options = RadiusOptions::default().structured();
        match self.lookup(atom, &options)? {
            Lookup::Datum(d) => Ok(d),
            Lookup::Value(_) => unreachable!("structured lookup returns a datum"),
        }
    }

    fn scalar<'a>(&self, atom: impl Into<AtomRef<'a>>, options: &RadiusOptions) -> DataResult<f64> {
        match self.lookup(atom, options)? {
            Lookup::Value(v) => Ok(v),
            Lookup::Datum(_) => unreachable!("scalar lookup returns a value"),
        }
    }

    /// Sorted, aligned dump of every entry.
    pub fn string_representation(&self) -> String {
        print_variables(self.iter())
    }

    /// One entry per element, atomic numbers 1 through 118 in order.
    ///
    /// Elements without data get `missing`, interpreted in native units.
    pub fn export_fixed_array(&self, missing: f64) -> Vec<FixedArrayEntry> {
        periodic_table()
            .elements()
            .iter()
            .map(|e| FixedArrayEntry {
                atomic_number: e.atomic_number(),
                symbol: e.symbol(),
                value: match self.radii.get(e.symbol()) {
                    Some(d) => FixedValue::Tabulated(d.clone()),
                    None => FixedValue::Default(missing),
                },
            })
            .collect()
    }

    /// Native-unit values of [`Self::export_fixed_array`].
    pub fn export_values(&self, missing: f64) -> Vec<f64> {
        self.export_fixed_array(missing)
            .iter()
            .map(FixedArrayEntry::value_f64)
            .collect()
    }

    /// C source text declaring `const double covalent_radii[]`.
    ///
    /// Slot 0 holds a placeholder so the array can be indexed by atomic number.
    /// Tabulated values keep their published decimal text; defaults print with
    /// two decimals.
    pub fn c_header(&self, missing: f64) -> String {
        let mut text: Vec<String> = [
            "#ifndef _elem_covrad_h_",
            "#define _elem_covrad_h_",
            "",
            "/* This file is autogenerated from the elem-data crate */",
            "",
            "const double covalent_radii[] = {",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        text.push(self.default_line(missing, "X"));
        for entry in self.export_fixed_array(missing) {
            match &entry.value {
                FixedValue::Tabulated(d) => text.push(format!(
                    "{},  /*- [{}] {} {} -*/",
                    d.value(),
                    d.units(),
                    d.label(),
                    d.comment().unwrap_or("")
                )),
                FixedValue::Default(v) => text.push(self.default_line(*v, entry.symbol)),
            }
        }

        text.push("};".to_string());
        text.push("#endif /* header guard */".to_string());
        text.push(String::new());
        text.join("\n")
    }

    fn default_line(&self, value: f64, label: &str) -> String {
        format!(
            "{value:.2},  /*- [{}] {label} {MISSING_COMMENT} -*/",
            self.native_units
        )
    }
}

impl fmt::Display for CovalentRadii {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CovalentRadii(context='{}')", self.context.name())
    }
}

/// Split "Fe_highspin" into ("Fe", Some("highspin")).
fn split_label(label: &str) -> (&str, Option<&str>) {
    match label.split_once('_') {
        Some((symbol, variant)) => (symbol, Some(variant)),
        None => (label, None),
    }
}

fn check_label_prefix(label: &str) -> DataResult<()> {
    let (symbol, _) = split_label(label);
    match periodic_table().to_symbol(symbol) {
        Ok(canonical) if canonical == symbol => Ok(()),
        _ => Err(DataError::NotAnElement {
            atom: label.to_string(),
        }),
    }
}

fn describe_variant(variant: &str) -> String {
    match variant {
        "highspin" => "high-spin".to_string(),
        "lowspin" => "low-spin".to_string(),
        other => other.to_string(),
    }
}

/// Generic entries for elements published only as several specialized variants.
/// Aliases carry no DOI.
fn generic_aliases(radii: &BTreeMap<String, Datum>, source: &RadiiSource) -> Vec<Datum> {
    let mut variants: BTreeMap<&str, Vec<(&str, &Datum)>> = BTreeMap::new();
    for (label, datum) in radii {
        if let (symbol, Some(variant)) = split_label(label) {
            variants.entry(symbol).or_default().push((variant, datum));
        }
    }

    variants
        .into_iter()
        .filter(|(symbol, group)| group.len() > 1 && !radii.contains_key(*symbol))
        .filter_map(|(symbol, group)| {
            let degree = if group.len() == 2 { "Larger" } else { "Largest" };
            let (variant, largest) = group.into_iter().max_by_key(|(_, d)| d.value())?;
            Some(
                Datum::new(symbol, source.units, largest.value())
                    .with_comment(format!(
                        "{degree} ({}) chosen for generic atom",
                        describe_variant(variant)
                    )),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> &'static CovalentRadii {
        covalent_radii()
    }

    #[test]
    fn metadata() {
        let t = table();
        assert_eq!(t.name(), "ALVAREZ2008");
        assert_eq!(t.doi(), "10.1039/B801115J");
        assert_eq!(t.native_units(), "angstrom");
        assert_eq!(t.year(), 2008);
        assert_eq!(t.to_string(), "CovalentRadii(context='ALVAREZ2008')");
    }

    #[test]
    fn source_entries_plus_four_aliases() {
        assert_eq!(ALVAREZ_2008.entries.len(), 101);
        assert_eq!(table().len(), 105);
    }

    #[test]
    fn aliases_pick_largest_variant() {
        let t = table();
        for (generic, specific, comment) in [
            ("C", "C_sp3", "Largest (sp3) chosen for generic atom"),
            ("Mn", "Mn_highspin", "Larger (high-spin) chosen for generic atom"),
            ("Fe", "Fe_highspin", "Larger (high-spin) chosen for generic atom"),
            ("Co", "Co_highspin", "Larger (high-spin) chosen for generic atom"),
        ] {
            let g = t.get_datum(generic).unwrap();
            let s = t.get_datum(specific).unwrap();
            assert_eq!(g.value(), s.value(), "{generic}");
            assert_eq!(g.label(), generic);
            assert_eq!(g.comment(), Some(comment));
            assert_eq!(g.doi(), None);
            assert_eq!(s.doi(), Some("10.1039/B801115J"));
        }
    }

    #[test]
    fn every_label_prefix_is_an_element() {
        for (label, _) in table().iter() {
            assert!(check_label_prefix(label).is_ok(), "{label}");
        }
    }

    #[test]
    fn context_parsing() {
        assert_eq!("ALVAREZ2008".parse::<RadiiContext>().unwrap(), RadiiContext::Alvarez2008);
        assert_eq!(" alvarez2008 ".parse::<RadiiContext>().unwrap(), RadiiContext::Alvarez2008);
        let err = "CORDERO".parse::<RadiiContext>().unwrap_err();
        assert!(err.to_string().contains("{'ALVAREZ2008', }"));
    }

    #[test]
    fn unsupported_context_is_fatal() {
        let err = CovalentRadii::from_context_name("BONDI1964").unwrap_err();
        assert!(matches!(err, DataError::UnsupportedContext { ref context, .. } if context == "BONDI1964"));
    }

    #[test]
    fn split_label_forms() {
        assert_eq!(split_label("Fe_highspin"), ("Fe", Some("highspin")));
        assert_eq!(split_label("N"), ("N", None));
    }

    #[test]
    fn options_builder() {
        let opts = RadiusOptions::default()
            .with_units("angstrom")
            .with_missing(2.0)
            .structured();
        assert_eq!(opts.units, "angstrom");
        assert_eq!(opts.missing, Some(2.0));
        assert!(opts.return_tuple);
    }

    #[test]
    fn lookup_accessors() {
        let t = table();
        let v = t.lookup("N", &RadiusOptions::default()).unwrap();
        assert!(v.value().is_some() && v.datum().is_none());
        let d = t.lookup("N", &RadiusOptions::default().structured()).unwrap();
        assert_eq!(d.datum().map(Datum::label), Some("N"));
    }
}
