//! Reference-data lookup errors.

use crate::units::UnitError;
use elem_core::ElemError;
use thiserror::Error;

/// Result type for reference-data operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors raised by the periodic table, datasets and unit conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// Identifier does not name any element, nuclide or dataset label.
    #[error("Atom identifier ({atom}) not recognized as element or nuclide")]
    NotAnElement { atom: String },

    /// Identifier is a valid element but the dataset has no entry for it.
    #[error("Data ({data}) not available for atom ({atom})")]
    DataUnavailable { data: &'static str, atom: String },

    /// Dataset context name not in the registry.
    #[error("Context set as '{context}', only contexts {{{supported}}} are currently supported")]
    UnsupportedContext { context: String, supported: String },

    /// Bundled source value failed to parse as a decimal.
    #[error("Malformed source value '{value}' for {label}")]
    MalformedSource { label: String, value: String },

    #[error(transparent)]
    Unit(#[from] UnitError),
}

impl From<DataError> for ElemError {
    fn from(err: DataError) -> Self {
        ElemError::Data {
            message: err.to_string(),
        }
    }
}
