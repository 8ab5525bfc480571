//! elem-core: shared foundation for the elemental reference-data crates.
//!
//! Contains:
//! - units (uom SI types + atomic-scale constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{ElemError, ElemResult};
pub use numeric::*;
pub use units::*;
