use crate::ElemError;

/// Floating point type used for geometry and derived quantities.
pub type Real = f64;

/// Absolute/relative tolerance pair for comparing derived quantities.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Tolerances suited to geometry in bohr (sub-femtometre agreement).
    pub const GEOMETRY: Tolerances = Tolerances {
        abs: 1e-8,
        rel: 1e-10,
    };
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, ElemError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ElemError::NonFinite { what, value: v })
    }
}

/// Check every value of a slice, reporting the first non-finite entry.
pub fn ensure_all_finite(values: &[Real], what: &'static str) -> Result<(), ElemError> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(&value) => Err(ElemError::NonFinite { what, value }),
        None => Ok(()),
    }
}
