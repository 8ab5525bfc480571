//! Molecule validation errors.

use elem_core::ElemError;
use elem_data::{DataError, UnitError};
use thiserror::Error;

pub type MoleculeResult<T> = Result<T, MoleculeError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MoleculeError {
    #[error("Molecule has no atoms")]
    Empty,

    #[error("Length mismatch for {what}: expected {expected}, got {got}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Flat geometry has {len} values, not a multiple of 3")]
    RaggedGeometry { len: usize },

    #[error("Invalid mass {mass} for atom {index}")]
    InvalidMass { index: usize, mass: f64 },

    #[error("Atoms {i} and {j} are only {distance} bohr apart")]
    CoincidentAtoms { i: usize, j: usize, distance: f64 },

    #[error("Bond ({i}, {j}) references an atom outside 0..{natoms}")]
    BondOutOfRange { i: usize, j: usize, natoms: usize },

    #[error("Bond ({i}, {i}) connects an atom to itself")]
    SelfBond { i: usize },

    #[error("Bond ({i}, {j}) listed more than once")]
    DuplicateBond { i: usize, j: usize },

    #[error("Bond order {order} for ({i}, {j}) outside 0..=5")]
    InvalidBondOrder { i: usize, j: usize, order: f64 },

    #[error("Molecular charge {charge} leaves {nelectrons} electrons")]
    NegativeElectrons { charge: f64, nelectrons: f64 },

    #[error("Multiplicity must be at least 1")]
    ZeroMultiplicity,

    #[error("Multiplicity {multiplicity} inconsistent with {nelectrons} electrons")]
    InconsistentMultiplicity { multiplicity: u32, nelectrons: f64 },

    #[error(transparent)]
    Core(#[from] ElemError),

    #[error(transparent)]
    Data(#[from] DataError),
}

impl From<UnitError> for MoleculeError {
    fn from(err: UnitError) -> Self {
        MoleculeError::Data(DataError::Unit(err))
    }
}

impl From<MoleculeError> for ElemError {
    fn from(err: MoleculeError) -> Self {
        match err {
            MoleculeError::Core(e) => e,
            other => ElemError::Data {
                message: other.to_string(),
            },
        }
    }
}
