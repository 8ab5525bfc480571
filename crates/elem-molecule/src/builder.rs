//! Validated construction of [`Molecule`].

use crate::error::{MoleculeError, MoleculeResult};
use crate::molecule::{Bond, Identifiers, MAX_BOND_ORDER, MIN_SEPARATION, Molecule, electron_count};
use elem_core::{ensure_all_finite, ensure_finite};
use elem_data::{conversion_factor_f64, periodic_table};
use nalgebra::Vector3;
use std::collections::HashSet;

/// Collects raw molecule fields; [`MoleculeBuilder::build`] validates them.
///
/// Geometry is given in bohr unless [`MoleculeBuilder::geometry_units`] says
/// otherwise. Symbols may be any identifier the periodic table accepts, so
/// `"D"` yields a hydrogen atom carrying the deuterium mass.
///
/// With the `serde` feature this is also the wire shape of a [`Molecule`]:
/// flat geometry, connectivity as `[i, j, order]` triples.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MoleculeBuilder {
    name: Option<String>,
    symbols: Vec<String>,
    geometry: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    geometry_units: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    masses: Option<Vec<f64>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    real: Option<Vec<bool>>,
    molecular_charge: f64,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    molecular_multiplicity: Option<u32>,
    connectivity: Vec<Bond>,
    identifiers: Identifiers,
    fix_com: bool,
    fix_orientation: bool,
}

impl MoleculeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults to the Hill formula.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// One row per atom.
    pub fn geometry(mut self, rows: impl IntoIterator<Item = Vector3<f64>>) -> Self {
        self.geometry = rows
            .into_iter()
            .flat_map(|r| [r.x, r.y, r.z])
            .collect();
        self
    }

    /// `[x0, y0, z0, x1, ...]`
    pub fn geometry_flat(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.geometry = values.into();
        self
    }

    /// Any length unit of the unit table; converted to bohr on build.
    pub fn geometry_units(mut self, units: impl Into<String>) -> Self {
        self.geometry_units = Some(units.into());
        self
    }

    /// Atomic masses [u]; defaults come from the periodic table.
    pub fn masses(mut self, masses: impl Into<Vec<f64>>) -> Self {
        self.masses = Some(masses.into());
        self
    }

    /// `false` marks a ghost atom.
    pub fn real(mut self, real: impl Into<Vec<bool>>) -> Self {
        self.real = Some(real.into());
        self
    }

    pub fn molecular_charge(mut self, charge: f64) -> Self {
        self.molecular_charge = charge;
        self
    }

    /// Defaults to 1 for an even electron count and 2 for an odd one.
    pub fn molecular_multiplicity(mut self, multiplicity: u32) -> Self {
        self.molecular_multiplicity = Some(multiplicity);
        self
    }

    pub fn connectivity(mut self, bonds: impl Into<Vec<Bond>>) -> Self {
        self.connectivity = bonds.into();
        self
    }

    pub fn identifiers(mut self, identifiers: Identifiers) -> Self {
        self.identifiers = identifiers;
        self
    }

    pub fn fix_com(mut self, fix: bool) -> Self {
        self.fix_com = fix;
        self
    }

    pub fn fix_orientation(mut self, fix: bool) -> Self {
        self.fix_orientation = fix;
        self
    }

    /// Validate every field and produce the molecule.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: unknown symbols, malformed or
    /// non-finite geometry, length mismatches, non-positive masses, atoms
    /// closer than 0.1 bohr, bad connectivity, or a multiplicity that cannot
    /// match the electron count.
    pub fn build(self) -> MoleculeResult<Molecule> {
        if self.symbols.is_empty() {
            return Err(MoleculeError::Empty);
        }
        let natoms = self.symbols.len();
        let pt = periodic_table();

        let mut symbols = Vec::with_capacity(natoms);
        let mut atomic_numbers = Vec::with_capacity(natoms);
        let mut default_masses = Vec::with_capacity(natoms);
        for label in &self.symbols {
            let element = pt.to_element(label)?;
            symbols.push(element.symbol());
            atomic_numbers.push(element.atomic_number());
            default_masses.push(pt.to_mass(label)?);
        }

        let geometry = self.rows(natoms)?;

        let masses = match self.masses {
            Some(masses) => {
                check_len("masses", natoms, masses.len())?;
                if let Some((index, &mass)) = masses
                    .iter()
                    .enumerate()
                    .find(|(_, m)| !(m.is_finite() && **m > 0.0))
                {
                    return Err(MoleculeError::InvalidMass { index, mass });
                }
                masses
            }
            None => default_masses,
        };

        let real = match self.real {
            Some(real) => {
                check_len("real", natoms, real.len())?;
                real
            }
            None => vec![true; natoms],
        };

        let charge = ensure_finite(self.molecular_charge, "molecular_charge")?;
        validate_connectivity(&self.connectivity, natoms)?;
        check_separation(&geometry)?;

        let nelectrons = electron_count(&atomic_numbers, &real, charge);
        if nelectrons < 0.0 {
            return Err(MoleculeError::NegativeElectrons { charge, nelectrons });
        }
        let multiplicity = resolve_multiplicity(self.molecular_multiplicity, nelectrons)?;

        let mut molecule = Molecule {
            name: String::new(),
            symbols,
            atomic_numbers,
            geometry,
            masses,
            real,
            molecular_charge: charge,
            molecular_multiplicity: multiplicity,
            connectivity: self.connectivity,
            identifiers: self.identifiers,
            fix_com: self.fix_com,
            fix_orientation: self.fix_orientation,
        };
        molecule.name = match self.name {
            Some(name) => name,
            None => molecule.molecular_formula(),
        };

        tracing::debug!(
            name = %molecule.name,
            natoms,
            multiplicity,
            "molecule built"
        );
        Ok(molecule)
    }

    /// Flat geometry as bohr rows.
    fn rows(&self, natoms: usize) -> MoleculeResult<Vec<Vector3<f64>>> {
        let len = self.geometry.len();
        if len % 3 != 0 {
            return Err(MoleculeError::RaggedGeometry { len });
        }
        check_len("geometry rows", natoms, len / 3)?;
        ensure_all_finite(&self.geometry, "geometry")?;

        let scale = match self.geometry_units.as_deref() {
            Some(units) => conversion_factor_f64(units, "bohr")?,
            None => 1.0,
        };
        Ok(self
            .geometry
            .chunks_exact(3)
            .map(|c| Vector3::new(c[0], c[1], c[2]) * scale)
            .collect())
    }
}

impl TryFrom<MoleculeBuilder> for Molecule {
    type Error = MoleculeError;

    fn try_from(builder: MoleculeBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

impl From<Molecule> for MoleculeBuilder {
    fn from(molecule: Molecule) -> Self {
        Self {
            geometry: molecule.geometry_flat(),
            name: Some(molecule.name),
            symbols: molecule.symbols.iter().map(|s| s.to_string()).collect(),
            geometry_units: None,
            masses: Some(molecule.masses),
            real: Some(molecule.real),
            molecular_charge: molecule.molecular_charge,
            molecular_multiplicity: Some(molecule.molecular_multiplicity),
            connectivity: molecule.connectivity,
            identifiers: molecule.identifiers,
            fix_com: molecule.fix_com,
            fix_orientation: molecule.fix_orientation,
        }
    }
}

fn check_len(what: &'static str, expected: usize, got: usize) -> MoleculeResult<()> {
    if expected == got {
        Ok(())
    } else {
        Err(MoleculeError::LengthMismatch {
            what,
            expected,
            got,
        })
    }
}

fn validate_connectivity(bonds: &[Bond], natoms: usize) -> MoleculeResult<()> {
    let mut seen = HashSet::new();
    for &(i, j, order) in bonds {
        if i >= natoms || j >= natoms {
            return Err(MoleculeError::BondOutOfRange { i, j, natoms });
        }
        if i == j {
            return Err(MoleculeError::SelfBond { i });
        }
        if !(order.is_finite() && (0.0..=MAX_BOND_ORDER).contains(&order)) {
            return Err(MoleculeError::InvalidBondOrder { i, j, order });
        }
        if !seen.insert((i.min(j), i.max(j))) {
            return Err(MoleculeError::DuplicateBond { i, j });
        }
    }
    Ok(())
}

fn check_separation(geometry: &[Vector3<f64>]) -> MoleculeResult<()> {
    for (i, a) in geometry.iter().enumerate() {
        for (j, b) in geometry.iter().enumerate().skip(i + 1) {
            let distance = (a - b).norm();
            if distance < MIN_SEPARATION {
                return Err(MoleculeError::CoincidentAtoms { i, j, distance });
            }
        }
    }
    Ok(())
}

/// Parity is only enforced for integral electron counts.
fn resolve_multiplicity(requested: Option<u32>, nelectrons: f64) -> MoleculeResult<u32> {
    let integral = nelectrons.fract() == 0.0;
    let even = integral && (nelectrons as i64) % 2 == 0;

    match requested {
        Some(0) => Err(MoleculeError::ZeroMultiplicity),
        Some(multiplicity) if integral => {
            let unpaired = f64::from(multiplicity - 1);
            let parity_ok = ((multiplicity - 1) % 2 == 0) == even;
            if parity_ok && unpaired <= nelectrons {
                Ok(multiplicity)
            } else {
                Err(MoleculeError::InconsistentMultiplicity {
                    multiplicity,
                    nelectrons,
                })
            }
        }
        Some(multiplicity) => Ok(multiplicity),
        None if integral && !even => Ok(2),
        None => Ok(1),
    }
}
