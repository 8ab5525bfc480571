//! Decimal unit-conversion table.
//!
//! Every unit belongs to one [`Dimension`] and carries an exact decimal scale
//! relative to the dimension's base unit (angstrom, amu, hartree). Scales are
//! kept as a numerator/denominator pair so that a conversion performs at most
//! one division, and none at all when both units are exact multiples of the
//! base.
//!
//! Lookup is case-insensitive and ignores surrounding whitespace, so `"Bohr"`,
//! `" bohr "` and `"a0"` all name the same unit.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::fmt;
use thiserror::Error;

/// Physical dimension a unit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Base: angstrom
    Length,
    /// Base: unified atomic mass unit
    Mass,
    /// Base: hartree
    Energy,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => write!(f, "length"),
            Self::Mass => write!(f, "mass"),
            Self::Energy => write!(f, "energy"),
        }
    }
}

/// Error in unit lookup or conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// Unit not present in the conversion table
    #[error("Unknown unit '{unit}'")]
    UnknownUnit { unit: String },

    /// Both units are known but measure different things
    #[error("Cannot convert '{from}' ({from_dim}) to '{to}' ({to_dim})")]
    IncompatibleUnits {
        from: String,
        from_dim: Dimension,
        to: String,
        to_dim: Dimension,
    },

    /// Converted value does not fit in a decimal
    #[error("Converting {value} from '{from}' to '{to}' overflows")]
    Overflow {
        value: Decimal,
        from: String,
        to: String,
    },
}

/// How one unit relates to its dimension's base unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scale {
    /// 1 unit = (mantissa, scale) base units
    Times(i64, u32),
    /// 1 base unit = (mantissa, scale) units
    Per(i64, u32),
}

/// One entry of the unit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitDef {
    pub name: &'static str,
    pub dimension: Dimension,
    pub aliases: &'static [&'static str],
    scale: Scale,
}

impl UnitDef {
    /// Scale as (numerator, denominator): 1 unit = numerator / denominator base units.
    fn ratio(&self) -> (Decimal, Decimal) {
        match self.scale {
            Scale::Times(m, s) => (Decimal::new(m, s), Decimal::ONE),
            Scale::Per(m, s) => (Decimal::ONE, Decimal::new(m, s)),
        }
    }

    fn matches(&self, key: &str) -> bool {
        self.name == key || self.aliases.iter().any(|alias| *alias == key)
    }
}

const UNIT_TABLE: [UnitDef; 13] = [
    // Length (base: angstrom; bohr from CODATA 2018)
    UnitDef {
        name: "angstrom",
        dimension: Dimension::Length,
        aliases: &["a", "å", "ang", "angstroms"],
        scale: Scale::Times(1, 0),
    },
    UnitDef {
        name: "bohr",
        dimension: Dimension::Length,
        aliases: &["a0", "au_length", "bohr_radius"],
        scale: Scale::Times(529_177_210_903, 12),
    },
    UnitDef {
        name: "nanometer",
        dimension: Dimension::Length,
        aliases: &["nm"],
        scale: Scale::Times(10, 0),
    },
    UnitDef {
        name: "picometer",
        dimension: Dimension::Length,
        aliases: &["pm"],
        scale: Scale::Times(1, 2),
    },
    UnitDef {
        name: "meter",
        dimension: Dimension::Length,
        aliases: &["m"],
        scale: Scale::Times(10_000_000_000, 0),
    },
    // Mass (base: amu)
    UnitDef {
        name: "amu",
        dimension: Dimension::Mass,
        aliases: &["u", "da", "dalton"],
        scale: Scale::Times(1, 0),
    },
    UnitDef {
        name: "electron_mass",
        dimension: Dimension::Mass,
        aliases: &["me", "m_e"],
        scale: Scale::Per(1_822_888_486_209, 9),
    },
    // Energy (base: hartree)
    UnitDef {
        name: "hartree",
        dimension: Dimension::Energy,
        aliases: &["eh", "au_energy"],
        scale: Scale::Times(1, 0),
    },
    UnitDef {
        name: "ev",
        dimension: Dimension::Energy,
        aliases: &["electron_volt"],
        scale: Scale::Per(27_211_386_245_988, 12),
    },
    UnitDef {
        name: "kcal/mol",
        dimension: Dimension::Energy,
        aliases: &["kcal mol^-1", "kcal_per_mol"],
        scale: Scale::Per(6_275_094_740_631, 10),
    },
    UnitDef {
        name: "kj/mol",
        dimension: Dimension::Energy,
        aliases: &["kj mol^-1", "kj_per_mol"],
        scale: Scale::Per(26_254_996_394_799, 10),
    },
    UnitDef {
        name: "cm^-1",
        dimension: Dimension::Energy,
        aliases: &["wavenumber", "1/cm"],
        scale: Scale::Per(2_194_746_313_632, 7),
    },
    UnitDef {
        name: "millihartree",
        dimension: Dimension::Energy,
        aliases: &["meh", "mhartree"],
        scale: Scale::Times(1, 3),
    },
];

/// All units known to the conversion table.
pub fn unit_table() -> &'static [UnitDef] {
    &UNIT_TABLE
}

/// Resolve a unit name or alias to its table entry.
pub fn lookup_unit(unit: &str) -> Result<&'static UnitDef, UnitError> {
    let key = unit.trim().to_lowercase();
    UNIT_TABLE
        .iter()
        .find(|def| def.matches(&key))
        .ok_or_else(|| UnitError::UnknownUnit {
            unit: unit.to_string(),
        })
}

/// Multiplicative factor taking a value in `from` units to `to` units.
pub fn conversion_factor(from: &str, to: &str) -> Result<Decimal, UnitError> {
    let from_def = lookup_unit(from)?;
    let to_def = lookup_unit(to)?;

    if from_def.dimension != to_def.dimension {
        return Err(UnitError::IncompatibleUnits {
            from: from.to_string(),
            from_dim: from_def.dimension,
            to: to.to_string(),
            to_dim: to_def.dimension,
        });
    }
    if from_def.name == to_def.name {
        return Ok(Decimal::ONE);
    }

    let (from_num, from_den) = from_def.ratio();
    let (to_num, to_den) = to_def.ratio();
    let numerator = from_num * to_den;
    let denominator = from_den * to_num;
    if denominator == Decimal::ONE {
        Ok(numerator.normalize())
    } else {
        Ok((numerator / denominator).normalize())
    }
}

/// [`conversion_factor`] narrowed to `f64`, for float-valued callers.
pub fn conversion_factor_f64(from: &str, to: &str) -> Result<f64, UnitError> {
    Ok(conversion_factor(from, to)?.to_f64().unwrap_or(f64::NAN))
}

/// Convert `value` from `from` units to `to` units.
pub fn convert(value: Decimal, from: &str, to: &str) -> Result<Decimal, UnitError> {
    value
        .checked_mul(conversion_factor(from, to)?)
        .ok_or_else(|| UnitError::Overflow {
            value,
            from: from.to_string(),
            to: to.to_string(),
        })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const LENGTHS: [&str; 5] = ["angstrom", "bohr", "nm", "pm", "m"];

    proptest! {
        #[test]
        fn length_round_trip_is_within_decimal_precision(
            mantissa in 1_i64..10_000_000,
            from in 0_usize..LENGTHS.len(),
            to in 0_usize..LENGTHS.len(),
        ) {
            let value = Decimal::new(mantissa, 4);
            let there = convert(value, LENGTHS[from], LENGTHS[to]).unwrap();
            let back = convert(there, LENGTHS[to], LENGTHS[from]).unwrap();
            let tol = value * Decimal::new(1, 20);
            prop_assert!((back - value).abs() <= tol, "{} -> {} -> {}", value, there, back);
        }
    }
}
