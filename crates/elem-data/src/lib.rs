//! elem-data: periodic table and reference datasets for the elemental crates.
//!
//! Provides:
//! - Periodic table index (symbols, names, atomic numbers, nuclides, masses)
//! - `Datum`: immutable decimal quantity with units and provenance
//! - Unit table for length, mass and energy conversion
//! - Covalent radii (ALVAREZ2008) with generic aliases and fixed-array export
//!
//! # Architecture
//!
//! Every dataset resolves atom identifiers through the shared [`PeriodicTable`],
//! so `"fe"`, `26`, `"iron"` and `"Fe56"`-style nuclide labels behave the same
//! everywhere. Tables are immutable after construction and the process-wide
//! instances ([`periodic_table`], [`covalent_radii`]) are built lazily, once.
//!
//! # Example
//!
//! ```
//! use elem_data::{covalent_radii, periodic_table};
//!
//! assert_eq!(periodic_table().to_symbol("iron").unwrap(), "Fe");
//!
//! let r = covalent_radii().get_in("Fe", "angstrom").unwrap();
//! assert!((r - 1.52).abs() < 1e-12);
//! ```

mod alvarez_2008;
pub mod covalent_radii;
pub mod datum;
mod elements;
pub mod error;
pub mod periodic_table;
pub mod units;

// Re-exports for ergonomics
pub use covalent_radii::{
    CovalentRadii, FixedArrayEntry, FixedValue, Lookup, RadiiContext, RadiusOptions,
    covalent_radii,
};
pub use datum::{Datum, print_variables};
pub use error::{DataError, DataResult};
pub use periodic_table::{
    AtomRef, ElementRecord, MAX_ATOMIC_NUMBER, MAX_MASS_NUMBER, PeriodicTable, Resolved,
    periodic_table,
};
pub use units::{
    Dimension, UnitDef, UnitError, conversion_factor, conversion_factor_f64, convert, lookup_unit,
};
