//! Periodic Table Index: one identifier-resolution policy for every dataset.
//!
//! Accepted identifiers:
//! - atomic numbers `1..=118`
//! - element symbols in any case (`"fe"`, `"FE"` → `"Fe"`)
//! - English element names in any case (`"iron"`)
//! - nuclide labels with the mass number suffixed (`"He4"`, `"c13"`) or
//!   prefixed (`"13C"`, `"2H"`), plus `"D"` and `"T"`
//!
//! Symbols are capitalized before matching, so `"CO"` names cobalt, not carbon
//! monoxide.

use crate::elements::{ELEMENTS, NUCLIDE_ALIASES, NUCLIDES};
use crate::error::{DataError, DataResult};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::OnceLock;

/// Highest atomic number in the table.
pub const MAX_ATOMIC_NUMBER: u8 = 118;

/// Largest mass number accepted in a nuclide label.
pub const MAX_MASS_NUMBER: u16 = 300;

static PERIODIC_TABLE: OnceLock<PeriodicTable> = OnceLock::new();

/// Process-wide periodic table, built on first use.
pub fn periodic_table() -> &'static PeriodicTable {
    PERIODIC_TABLE.get_or_init(PeriodicTable::new)
}

/// Anything a caller may use to name an atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomRef<'a> {
    Number(i64),
    Label(&'a str),
}

impl fmt::Display for AtomRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtomRef::Number(z) => write!(f, "{z}"),
            AtomRef::Label(label) => f.write_str(label),
        }
    }
}

impl<'a> From<&'a str> for AtomRef<'a> {
    fn from(label: &'a str) -> Self {
        AtomRef::Label(label)
    }
}

impl<'a> From<&'a String> for AtomRef<'a> {
    fn from(label: &'a String) -> Self {
        AtomRef::Label(label.as_str())
    }
}

macro_rules! atom_ref_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for AtomRef<'_> {
                fn from(z: $t) -> Self {
                    AtomRef::Number(z as i64)
                }
            }
        )*
    };
}

atom_ref_from_int!(u8, u16, u32, i32, i64, usize);

/// Canonical record for one element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementRecord {
    symbol: &'static str,
    name: &'static str,
    atomic_number: u8,
    standard_weight: f64,
    nuclides: BTreeMap<u16, f64>,
    most_abundant: Option<u16>,
}

impl ElementRecord {
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn atomic_number(&self) -> u8 {
        self.atomic_number
    }

    /// Standard atomic weight [u].
    pub fn standard_weight(&self) -> f64 {
        self.standard_weight
    }

    /// Mass [u] of the nuclide with mass number `a`, if tabulated.
    pub fn nuclide_mass(&self, a: u16) -> Option<f64> {
        self.nuclides.get(&a).copied()
    }

    /// Tabulated nuclides as (mass number, mass [u]), lightest first.
    pub fn nuclides(&self) -> impl Iterator<Item = (u16, f64)> + '_ {
        self.nuclides.iter().map(|(a, m)| (*a, *m))
    }

    pub fn most_abundant_mass_number(&self) -> Option<u16> {
        self.most_abundant
    }

    /// Mass used when no nuclide is named: most abundant nuclide if known,
    /// otherwise the standard atomic weight.
    pub fn representative_mass(&self) -> f64 {
        self.most_abundant
            .and_then(|a| self.nuclide_mass(a))
            .unwrap_or(self.standard_weight)
    }
}

/// Outcome of resolving an identifier: which element, and which nuclide if named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub atomic_number: u8,
    pub mass_number: Option<u16>,
}

/// Symbol/number/name/nuclide index over the bundled element data.
#[derive(Debug)]
pub struct PeriodicTable {
    elements: Vec<ElementRecord>,
    by_symbol: HashMap<&'static str, u8>,
    by_name: HashMap<String, u8>,
}

impl Default for PeriodicTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PeriodicTable {
    pub fn new() -> Self {
        let mut elements: Vec<ElementRecord> = ELEMENTS
            .iter()
            .zip(1..=MAX_ATOMIC_NUMBER)
            .map(|(&(symbol, name, weight), z)| ElementRecord {
                symbol,
                name,
                atomic_number: z,
                standard_weight: weight,
                nuclides: BTreeMap::new(),
                most_abundant: None,
            })
            .collect();

        for nuclide in &NUCLIDES {
            let record = &mut elements[usize::from(nuclide.z) - 1];
            record.nuclides.insert(nuclide.a, nuclide.mass);
            if nuclide.most_abundant {
                record.most_abundant = Some(nuclide.a);
            }
        }

        let by_symbol = elements
            .iter()
            .map(|e| (e.symbol, e.atomic_number))
            .collect();
        let by_name = elements
            .iter()
            .map(|e| (e.name.to_lowercase(), e.atomic_number))
            .collect();

        tracing::debug!(
            elements = elements.len(),
            nuclides = NUCLIDES.len(),
            "periodic table loaded"
        );

        Self {
            elements,
            by_symbol,
            by_name,
        }
    }

    /// Records in atomic-number order.
    pub fn elements(&self) -> &[ElementRecord] {
        &self.elements
    }

    /// Canonical symbols in atomic-number order.
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.elements.iter().map(|e| e.symbol)
    }

    /// Record for atomic number `z`, if in range.
    pub fn by_atomic_number(&self, z: u8) -> Option<&ElementRecord> {
        usize::from(z)
            .checked_sub(1)
            .and_then(|idx| self.elements.get(idx))
    }

    /// Resolve any accepted identifier to element and optional nuclide.
    pub fn resolve<'a>(&self, atom: impl Into<AtomRef<'a>>) -> DataResult<Resolved> {
        let atom = atom.into();
        let not_an_element = || DataError::NotAnElement {
            atom: atom.to_string(),
        };

        match atom {
            AtomRef::Number(z) => u8::try_from(z)
                .ok()
                .filter(|z| (1..=MAX_ATOMIC_NUMBER).contains(z))
                .map(|z| Resolved {
                    atomic_number: z,
                    mass_number: None,
                })
                .ok_or_else(not_an_element),
            AtomRef::Label(label) => self.resolve_label(label).ok_or_else(not_an_element),
        }
    }

    fn resolve_label(&self, label: &str) -> Option<Resolved> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }

        let key = capitalize(label);
        if let Some(&z) = self.by_symbol.get(key.as_str()) {
            return Some(Resolved {
                atomic_number: z,
                mass_number: None,
            });
        }

        if let Some(&(_, z, a)) = NUCLIDE_ALIASES.iter().find(|(alias, _, _)| *alias == key) {
            return Some(Resolved {
                atomic_number: z,
                mass_number: Some(a),
            });
        }

        if let Some(&z) = self.by_name.get(&label.to_lowercase()) {
            return Some(Resolved {
                atomic_number: z,
                mass_number: None,
            });
        }

        self.resolve_nuclide(label)
    }

    /// "C13" / "13C" style labels. Any mass number in `Z..=MAX_MASS_NUMBER`
    /// names the element; the nuclide mass table only matters for `to_mass`.
    fn resolve_nuclide(&self, label: &str) -> Option<Resolved> {
        let (symbol, digits) = if label.starts_with(|c: char| c.is_ascii_digit()) {
            let split = label.find(|c: char| !c.is_ascii_digit())?;
            let (digits, symbol) = label.split_at(split);
            (symbol, digits)
        } else {
            let split = label.find(|c: char| c.is_ascii_digit())?;
            label.split_at(split)
        };

        if symbol.is_empty() || !symbol.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let a: u16 = digits.parse().ok()?;
        let &z = self.by_symbol.get(capitalize(symbol).as_str())?;
        if !(u16::from(z)..=MAX_MASS_NUMBER).contains(&a) {
            return None;
        }
        Some(Resolved {
            atomic_number: z,
            mass_number: Some(a),
        })
    }

    /// Canonical element symbol for `atom`.
    pub fn to_symbol<'a>(&self, atom: impl Into<AtomRef<'a>>) -> DataResult<&'static str> {
        Ok(self.to_element(atom)?.symbol)
    }

    pub fn to_atomic_number<'a>(&self, atom: impl Into<AtomRef<'a>>) -> DataResult<u8> {
        Ok(self.resolve(atom)?.atomic_number)
    }

    pub fn to_name<'a>(&self, atom: impl Into<AtomRef<'a>>) -> DataResult<&'static str> {
        Ok(self.to_element(atom)?.name)
    }

    /// Full record of the element `atom` belongs to.
    pub fn to_element<'a>(&self, atom: impl Into<AtomRef<'a>>) -> DataResult<&ElementRecord> {
        let atom = atom.into();
        let resolved = self.resolve(atom)?;
        self.by_atomic_number(resolved.atomic_number)
            .ok_or_else(|| DataError::NotAnElement {
                atom: atom.to_string(),
            })
    }

    /// Mass [u]: the named nuclide's mass, else the element's representative
    /// mass. An untabulated nuclide falls back to the standard atomic weight.
    pub fn to_mass<'a>(&self, atom: impl Into<AtomRef<'a>>) -> DataResult<f64> {
        let atom = atom.into();
        let resolved = self.resolve(atom)?;
        let record = self
            .by_atomic_number(resolved.atomic_number)
            .ok_or_else(|| DataError::NotAnElement {
                atom: atom.to_string(),
            })?;
        Ok(match resolved.mass_number {
            Some(a) => record.nuclide_mass(a).unwrap_or(record.standard_weight),
            None => record.representative_mass(),
        })
    }
}

/// "fE" → "Fe"
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn symbols_names_and_numbers_are_unique() {
        let pt = periodic_table();
        let mut symbols = HashSet::new();
        let mut names = HashSet::new();
        for (idx, e) in pt.elements().iter().enumerate() {
            assert_eq!(usize::from(e.atomic_number()), idx + 1);
            assert!(symbols.insert(e.symbol()), "duplicate symbol {}", e.symbol());
            assert!(names.insert(e.name()), "duplicate name {}", e.name());
        }
        assert_eq!(symbols.len(), usize::from(MAX_ATOMIC_NUMBER));
    }

    #[test]
    fn symbols_are_canonically_cased() {
        for symbol in periodic_table().symbols() {
            assert_eq!(capitalize(symbol), symbol);
        }
    }

    #[test]
    fn nuclide_table_is_consistent() {
        let mut seen = HashSet::new();
        for nuclide in &NUCLIDES {
            assert!(seen.insert((nuclide.z, nuclide.a)));
            assert!(nuclide.a >= u16::from(nuclide.z));
            assert!((nuclide.mass - f64::from(nuclide.a)).abs() < 0.1);
        }
        for e in periodic_table().elements() {
            if e.nuclides().next().is_some() {
                assert!(
                    e.most_abundant_mass_number().is_some(),
                    "{} lacks a most abundant nuclide",
                    e.symbol()
                );
            }
        }
    }

    #[test]
    fn resolve_by_number() {
        let pt = periodic_table();
        assert_eq!(pt.to_symbol(1).unwrap(), "H");
        assert_eq!(pt.to_symbol(26_u8).unwrap(), "Fe");
        assert_eq!(pt.to_symbol(118_usize).unwrap(), "Og");
        assert!(matches!(pt.to_symbol(0), Err(DataError::NotAnElement { .. })));
        assert!(matches!(pt.to_symbol(119), Err(DataError::NotAnElement { .. })));
        assert!(matches!(pt.to_symbol(-6), Err(DataError::NotAnElement { .. })));
    }

    #[test]
    fn resolve_symbol_any_case() {
        let pt = periodic_table();
        assert_eq!(pt.to_symbol("fe").unwrap(), "Fe");
        assert_eq!(pt.to_symbol("FE").unwrap(), "Fe");
        assert_eq!(pt.to_symbol("hE").unwrap(), "He");
        assert_eq!(pt.to_symbol("CO").unwrap(), "Co");
    }

    #[test]
    fn resolve_names() {
        let pt = periodic_table();
        assert_eq!(pt.to_symbol("carbon").unwrap(), "C");
        assert_eq!(pt.to_symbol("OGANESSON").unwrap(), "Og");
        assert_eq!(pt.to_name("W").unwrap(), "Tungsten");
    }

    #[test]
    fn resolve_nuclides() {
        let pt = periodic_table();
        assert_eq!(pt.to_symbol("D").unwrap(), "H");
        assert_eq!(pt.to_symbol("t").unwrap(), "H");
        assert_eq!(pt.to_symbol("He4").unwrap(), "He");
        assert_eq!(pt.to_symbol("hE4").unwrap(), "He");
        assert_eq!(pt.to_symbol("13C").unwrap(), "C");
        assert_eq!(
            pt.resolve("C13").unwrap(),
            Resolved {
                atomic_number: 6,
                mass_number: Some(13)
            }
        );
    }

    #[test]
    fn untabulated_nuclides_name_their_element() {
        let pt = periodic_table();
        assert_eq!(pt.to_symbol("Fe56").unwrap(), "Fe");
        assert_eq!(pt.to_symbol("238U").unwrap(), "U");
        assert_eq!(
            pt.resolve("u238").unwrap(),
            Resolved {
                atomic_number: 92,
                mass_number: Some(238)
            }
        );
        assert_eq!(pt.to_mass("Fe56").unwrap(), 55.845);
        assert_eq!(pt.to_mass("He7").unwrap(), 4.002602);
    }

    #[test]
    fn implausible_mass_numbers_are_rejected() {
        let pt = periodic_table();
        for atom in ["Fe3", "U91", "C0", "H301", "C13x"] {
            assert!(
                matches!(pt.to_symbol(atom), Err(DataError::NotAnElement { .. })),
                "{atom} resolved"
            );
        }
    }

    #[test]
    fn placeholder_symbols_are_not_elements() {
        let pt = periodic_table();
        for atom in ["Uuo", "Uup", "Xx", "", "C_sp3", "12"] {
            let err = pt.to_symbol(atom).unwrap_err();
            assert_eq!(
                err,
                DataError::NotAnElement {
                    atom: atom.to_string()
                }
            );
        }
    }

    #[test]
    fn masses() {
        let pt = periodic_table();
        assert_eq!(pt.to_mass("C").unwrap(), 12.0);
        assert_eq!(pt.to_mass("D").unwrap(), 2.014_101_778_12);
        assert_eq!(pt.to_mass("H").unwrap(), 1.007_825_032_23);
        assert_eq!(pt.to_mass("Fe").unwrap(), 55.845);
        assert_eq!(pt.to_element("O").unwrap().standard_weight(), 15.999);
    }
}
