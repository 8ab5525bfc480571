//! elem-molecule: validated molecule records on top of elem-data.
//!
//! Provides:
//! - `MoleculeBuilder` (symbol resolution, geometry/connectivity/multiplicity checks)
//! - `Molecule` with derived properties: formula, center of mass, nuclear
//!   repulsion, inertia tensor, principal-axis orientation
//! - Connectivity guessing from covalent radii
//!
//! # Example
//!
//! ```
//! use elem_molecule::{DEFAULT_BOND_THRESHOLD, Molecule};
//!
//! let water = Molecule::builder()
//!     .symbols(["O", "H", "H"])
//!     .geometry_flat(vec![0.0, 0.0, -0.124, 0.0, -1.431, 0.985, 0.0, 1.431, 0.985])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(water.molecular_formula(), "H2O");
//! assert_eq!(water.guess_connectivity(DEFAULT_BOND_THRESHOLD).unwrap().len(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod formula;
pub mod molecule;

pub use builder::MoleculeBuilder;
pub use error::{MoleculeError, MoleculeResult};
pub use molecule::{Bond, DEFAULT_BOND_THRESHOLD, Identifiers, MAX_BOND_ORDER, Molecule};
