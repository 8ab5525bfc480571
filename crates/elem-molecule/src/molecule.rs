//! Molecule record and derived geometric properties.
//!
//! Coordinates are stored in bohr and masses in u. Ghost atoms (`real ==
//! false`) keep their position and symbol but carry no nucleus or electrons,
//! so they are skipped by every mass- or charge-weighted property.

use crate::builder::MoleculeBuilder;
use crate::error::MoleculeResult;
use crate::formula::{alphabetical_formula, element_counts, hill_formula};
use elem_core::{ElemError, Energy, Length, Mass, Tolerances, amu, bohr, hartree, nearly_equal};
use elem_data::{DataError, conversion_factor_f64, covalent_radii};
use nalgebra::{Matrix3, SymmetricEigen, Vector3};
use std::fmt;

/// `(i, j, bond_order)`
pub type Bond = (usize, usize, f64);

pub const MAX_BOND_ORDER: f64 = 5.0;

/// Scale on the sum of covalent radii below which two atoms count as bonded.
pub const DEFAULT_BOND_THRESHOLD: f64 = 1.2;

/// Closest allowed approach of two atoms [bohr].
pub(crate) const MIN_SEPARATION: f64 = 0.1;

/// Line-notation identifiers attached to a molecule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Identifiers {
    pub inchikey: Option<String>,
    pub standard_inchi: Option<String>,
    pub canonical_smiles: Option<String>,
    pub canonical_isomeric_smiles: Option<String>,
    pub canonical_explicit_hydrogen_smiles: Option<String>,
    pub canonical_isomeric_explicit_hydrogen_smiles: Option<String>,
    pub canonical_isomeric_explicit_hydrogen_mapped_smiles: Option<String>,
}

impl Identifiers {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Validated molecular system. Build with [`Molecule::builder`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "MoleculeBuilder", into = "MoleculeBuilder")
)]
pub struct Molecule {
    pub(crate) name: String,
    pub(crate) symbols: Vec<&'static str>,
    pub(crate) atomic_numbers: Vec<u8>,
    pub(crate) geometry: Vec<Vector3<f64>>,
    pub(crate) masses: Vec<f64>,
    pub(crate) real: Vec<bool>,
    pub(crate) molecular_charge: f64,
    pub(crate) molecular_multiplicity: u32,
    pub(crate) connectivity: Vec<Bond>,
    pub(crate) identifiers: Identifiers,
    pub(crate) fix_com: bool,
    pub(crate) fix_orientation: bool,
}

pub(crate) fn electron_count(atomic_numbers: &[u8], real: &[bool], charge: f64) -> f64 {
    let protons: u32 = atomic_numbers
        .iter()
        .zip(real)
        .filter(|(_, real)| **real)
        .map(|(z, _)| u32::from(*z))
        .sum();
    f64::from(protons) - charge
}

impl Molecule {
    pub fn builder() -> MoleculeBuilder {
        MoleculeBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn natoms(&self) -> usize {
        self.symbols.len()
    }

    /// Canonical element symbols.
    pub fn symbols(&self) -> &[&'static str] {
        &self.symbols
    }

    pub fn atomic_numbers(&self) -> &[u8] {
        &self.atomic_numbers
    }

    /// Positions [bohr].
    pub fn geometry(&self) -> &[Vector3<f64>] {
        &self.geometry
    }

    /// Masses [u].
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    pub fn real(&self) -> &[bool] {
        &self.real
    }

    pub fn molecular_charge(&self) -> f64 {
        self.molecular_charge
    }

    pub fn molecular_multiplicity(&self) -> u32 {
        self.molecular_multiplicity
    }

    pub fn connectivity(&self) -> &[Bond] {
        &self.connectivity
    }

    pub fn identifiers(&self) -> &Identifiers {
        &self.identifiers
    }

    pub fn fix_com(&self) -> bool {
        self.fix_com
    }

    pub fn fix_orientation(&self) -> bool {
        self.fix_orientation
    }

    fn real_atoms(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.natoms()).filter(|&i| self.real[i])
    }

    /// Nuclear charge of the real atoms minus the molecular charge.
    pub fn nelectrons(&self) -> f64 {
        electron_count(&self.atomic_numbers, &self.real, self.molecular_charge)
    }

    /// Hill-order formula of the real atoms, e.g. "C4H10".
    pub fn molecular_formula(&self) -> String {
        hill_formula(&element_counts(self.real_atoms().map(|i| self.symbols[i])))
    }

    pub fn molecular_formula_alphabetical(&self) -> String {
        alphabetical_formula(&element_counts(self.real_atoms().map(|i| self.symbols[i])))
    }

    /// Sum of real-atom masses [u].
    pub fn total_mass(&self) -> f64 {
        self.real_atoms().map(|i| self.masses[i]).sum()
    }

    /// [`Self::total_mass`] as a typed quantity.
    pub fn mass(&self) -> Mass {
        amu(self.total_mass())
    }

    /// Mass-weighted centroid of the real atoms [bohr]; origin if there are none.
    pub fn center_of_mass(&self) -> Vector3<f64> {
        let total = self.total_mass();
        if total == 0.0 {
            return Vector3::zeros();
        }
        let weighted: Vector3<f64> = self
            .real_atoms()
            .map(|i| self.geometry[i] * self.masses[i])
            .sum();
        weighted / total
    }

    /// Point-charge repulsion of the real nuclei [hartree].
    pub fn nuclear_repulsion_energy(&self) -> f64 {
        let atoms: Vec<usize> = self.real_atoms().collect();
        let mut energy = 0.0;
        for (k, &i) in atoms.iter().enumerate() {
            for &j in &atoms[k + 1..] {
                let zz = f64::from(self.atomic_numbers[i]) * f64::from(self.atomic_numbers[j]);
                energy += zz / (self.geometry[i] - self.geometry[j]).norm();
            }
        }
        energy
    }

    /// [`Self::nuclear_repulsion_energy`] as a typed quantity.
    pub fn nuclear_repulsion(&self) -> Energy {
        hartree(self.nuclear_repulsion_energy())
    }

    /// Moment of inertia tensor about the center of mass [u bohr^2].
    pub fn inertia_tensor(&self) -> Matrix3<f64> {
        let com = self.center_of_mass();
        self.real_atoms().fold(Matrix3::zeros(), |tensor, i| {
            let r = self.geometry[i] - com;
            tensor + (Matrix3::identity() * r.norm_squared() - r * r.transpose()) * self.masses[i]
        })
    }

    /// Principal moments, ascending [u bohr^2].
    pub fn principal_moments(&self) -> Vector3<f64> {
        self.principal_axes().0
    }

    /// Ascending moments and a right-handed rotation whose columns are the
    /// matching axes. Each axis is signed so its first significant component
    /// is positive.
    fn principal_axes(&self) -> (Vector3<f64>, Matrix3<f64>) {
        let eigen = SymmetricEigen::new(self.inertia_tensor());
        let mut order = [0, 1, 2];
        order.sort_by(|&a, &b| eigen.eigenvalues[a].total_cmp(&eigen.eigenvalues[b]));

        let moments = Vector3::from_fn(|k, _| eigen.eigenvalues[order[k]]);
        let mut axes = Matrix3::from_fn(|r, c| eigen.eigenvectors[(r, order[c])]);

        for mut axis in axes.column_iter_mut() {
            let pivot = axis
                .iter()
                .copied()
                .find(|x| !nearly_equal(*x, 0.0, Tolerances::GEOMETRY))
                .unwrap_or(1.0);
            if pivot < 0.0 {
                axis.neg_mut();
            }
        }
        if axes.determinant() < 0.0 {
            axes.column_mut(2).neg_mut();
        }
        (moments, axes)
    }

    /// Distance between atoms `i` and `j`.
    pub fn distance(&self, i: usize, j: usize) -> MoleculeResult<Length> {
        let natoms = self.natoms();
        for index in [i, j] {
            if index >= natoms {
                return Err(ElemError::IndexOob {
                    what: "atom",
                    index,
                    len: natoms,
                }
                .into());
            }
        }
        Ok(bohr((self.geometry[i] - self.geometry[j]).norm()))
    }

    /// Copy translated so the center of mass sits at the origin.
    pub fn to_com_frame(&self) -> Molecule {
        let com = self.center_of_mass();
        Molecule {
            geometry: self.geometry.iter().map(|x| x - com).collect(),
            ..self.clone()
        }
    }

    /// Copy in the standard frame: center of mass at the origin and principal
    /// axes along x, y, z (smallest moment on x). `fix_com` suppresses the
    /// translation and `fix_orientation` the rotation.
    pub fn orient(&self) -> Molecule {
        if self.fix_com && self.fix_orientation {
            return self.clone();
        }

        let com = self.center_of_mass();
        let rotation = if self.fix_orientation {
            Matrix3::identity()
        } else {
            self.principal_axes().1.transpose()
        };
        let origin = if self.fix_com { com } else { Vector3::zeros() };

        Molecule {
            geometry: self
                .geometry
                .iter()
                .map(|x| rotation * (x - com) + origin)
                .collect(),
            ..self.clone()
        }
    }

    /// `[x0, y0, z0, x1, ...]` in bohr.
    pub fn geometry_flat(&self) -> Vec<f64> {
        self.geometry.iter().flat_map(|r| [r.x, r.y, r.z]).collect()
    }

    /// Positions in any length unit of the unit table.
    pub fn geometry_in(&self, units: &str) -> MoleculeResult<Vec<Vector3<f64>>> {
        let factor = conversion_factor_f64("bohr", units)?;
        Ok(self.geometry.iter().map(|r| r * factor).collect())
    }

    /// Bonds implied by covalent radii: real atoms closer than `threshold`
    /// times the sum of their radii. Bond orders are reported as 1. Ghost
    /// atoms and elements without a tabulated radius never bond.
    ///
    /// # Errors
    ///
    /// `threshold` must be positive and finite.
    pub fn guess_connectivity(&self, threshold: f64) -> MoleculeResult<Vec<Bond>> {
        if !(threshold.is_finite() && threshold > 0.0) {
            return Err(ElemError::InvalidArg {
                what: "bond threshold must be positive and finite",
            }
            .into());
        }

        let table = covalent_radii();
        let mut radii = Vec::with_capacity(self.natoms());
        for (symbol, &real) in self.symbols.iter().zip(&self.real) {
            if !real {
                radii.push(None);
                continue;
            }
            let radius = match table.get(*symbol) {
                Ok(r) => Some(r),
                Err(DataError::DataUnavailable { .. }) => {
                    tracing::trace!(atom = *symbol, "no covalent radius, atom left unbonded");
                    None
                }
                Err(e) => return Err(e.into()),
            };
            radii.push(radius);
        }

        let mut bonds = Vec::new();
        for i in 0..self.natoms() {
            let Some(ri) = radii[i] else { continue };
            for j in i + 1..self.natoms() {
                let Some(rj) = radii[j] else { continue };
                let d = (self.geometry[i] - self.geometry[j]).norm();
                if d < threshold * (ri + rj) {
                    bonds.push((i, j, 1.0));
                }
            }
        }
        tracing::trace!(bonds = bonds.len(), threshold, "connectivity guessed");
        Ok(bonds)
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Molecule(name='{}', formula='{}', natoms={})",
            self.name,
            self.molecular_formula(),
            self.natoms()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoleculeError;
    use elem_core::{in_amu, in_bohr, in_hartree};

    fn h2() -> Molecule {
        Molecule::builder()
            .symbols(["H", "H"])
            .geometry_flat(vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.4])
            .build()
            .unwrap()
    }

    fn water() -> Molecule {
        Molecule::builder()
            .symbols(["O", "H", "H"])
            .geometry_flat(vec![0.0, 0.0, -0.124, 0.0, -1.431, 0.985, 0.0, 1.431, 0.985])
            .build()
            .unwrap()
    }

    #[test]
    fn h2_repulsion_and_distance() {
        let mol = h2();
        assert!((mol.nuclear_repulsion_energy() - 1.0 / 1.4).abs() < 1e-14);
        assert!(nearly_equal(
            in_hartree(mol.nuclear_repulsion()),
            1.0 / 1.4,
            Tolerances::default()
        ));
        assert!((in_bohr(mol.distance(0, 1).unwrap()) - 1.4).abs() < 1e-12);
        assert_eq!(mol.nelectrons(), 2.0);
    }

    #[test]
    fn distance_index_out_of_range() {
        let err = h2().distance(0, 2).unwrap_err();
        assert_eq!(
            err,
            MoleculeError::Core(ElemError::IndexOob {
                what: "atom",
                index: 2,
                len: 2
            })
        );
    }

    #[test]
    fn ghost_atoms_are_excluded() {
        let mol = Molecule::builder()
            .symbols(["He", "He"])
            .geometry_flat(vec![0.0, 0.0, 0.0, 0.0, 0.0, 5.0])
            .real(vec![true, false])
            .build()
            .unwrap();
        assert_eq!(mol.nuclear_repulsion_energy(), 0.0);
        assert_eq!(mol.nelectrons(), 2.0);
        assert_eq!(mol.molecular_formula(), "He");
        assert_eq!(mol.center_of_mass(), Vector3::zeros());
    }

    #[test]
    fn center_of_mass_of_h2_is_midpoint() {
        let com = h2().center_of_mass();
        assert!((com - Vector3::new(0.0, 0.0, 0.7)).norm() < 1e-14);
    }

    #[test]
    fn com_frame_moves_center_to_origin() {
        let shifted = water().to_com_frame();
        assert!(shifted.center_of_mass().norm() < 1e-12);
    }

    #[test]
    fn linear_molecule_has_zero_smallest_moment() {
        let moments = h2().principal_moments();
        assert!(moments[0].abs() < 1e-12);
        assert!(nearly_equal(moments[1], moments[2], Tolerances::default()));
        let expected = 2.0 * 1.007_825_032_23 * 0.7 * 0.7;
        assert!((moments[2] - expected).abs() < 1e-10);
    }

    #[test]
    fn orient_aligns_principal_axes() {
        let oriented = water().orient();
        assert!(oriented.center_of_mass().norm() < 1e-10);
        let tensor = oriented.inertia_tensor();
        for r in 0..3 {
            for c in 0..3 {
                if r != c {
                    assert!(tensor[(r, c)].abs() < 1e-8, "off-diagonal {r},{c}");
                }
            }
        }
        assert!(tensor[(0, 0)] <= tensor[(1, 1)] && tensor[(1, 1)] <= tensor[(2, 2)]);
    }

    #[test]
    fn orient_respects_fix_flags() {
        let fixed = Molecule::builder()
            .symbols(["O", "H", "H"])
            .geometry_flat(vec![0.0, 0.0, -0.124, 0.0, -1.431, 0.985, 0.0, 1.431, 0.985])
            .fix_com(true)
            .fix_orientation(true)
            .build()
            .unwrap();
        assert_eq!(fixed.orient(), fixed);

        let com_fixed = Molecule { fix_orientation: false, ..fixed.clone() };
        let oriented = com_fixed.orient();
        assert!((oriented.center_of_mass() - fixed.center_of_mass()).norm() < 1e-10);
    }

    #[test]
    fn geometry_in_other_units() {
        let rows = h2().geometry_in("angstrom").unwrap();
        assert!((rows[1].z - 1.4 * 0.529_177_210_903).abs() < 1e-12);
        assert!(h2().geometry_in("ev").is_err());
    }

    #[test]
    fn guessed_connectivity_of_water() {
        let bonds = water().guess_connectivity(DEFAULT_BOND_THRESHOLD).unwrap();
        assert_eq!(bonds, vec![(0, 1, 1.0), (0, 2, 1.0)]);
        assert!(water().guess_connectivity(0.0).is_err());
    }

    #[test]
    fn guessed_connectivity_skips_ghosts_and_unlisted_elements() {
        let ghost = Molecule {
            real: vec![true, true, false],
            ..water()
        };
        assert_eq!(
            ghost.guess_connectivity(DEFAULT_BOND_THRESHOLD).unwrap(),
            vec![(0, 1, 1.0)]
        );

        let with_bk = Molecule::builder()
            .symbols(["O", "H", "Bk"])
            .geometry_flat(vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.8, 0.0, 0.0, -3.0])
            .build()
            .unwrap();
        assert_eq!(
            with_bk.guess_connectivity(DEFAULT_BOND_THRESHOLD).unwrap(),
            vec![(0, 1, 1.0)]
        );
    }

    #[test]
    fn typed_mass_of_water() {
        let expected = 15.994_914_619_57 + 2.0 * 1.007_825_032_23;
        assert!((water().total_mass() - expected).abs() < 1e-9);
        assert!(nearly_equal(in_amu(water().mass()), expected, Tolerances::default()));
    }

    #[test]
    fn display_names_formula() {
        assert_eq!(water().to_string(), "Molecule(name='H2O', formula='H2O', natoms=3)");
    }

    #[test]
    fn empty_identifiers() {
        assert!(Identifiers::default().is_empty());
        let ids = Identifiers {
            canonical_smiles: Some("O".into()),
            ..Identifiers::default()
        };
        assert!(!ids.is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn chain(n: usize, spacing: f64) -> Molecule {
        let flat: Vec<f64> = (0..n).flat_map(|i| [0.0, 0.0, i as f64 * spacing]).collect();
        Molecule::builder()
            .symbols(vec!["C"; n])
            .geometry_flat(flat)
            .build()
            .unwrap()
    }

    proptest! {
        #[test]
        fn repulsion_is_translation_invariant(
            n in 2_usize..6,
            spacing in 0.5_f64..5.0,
            dx in -10.0_f64..10.0,
            dy in -10.0_f64..10.0,
        ) {
            let mol = chain(n, spacing);
            let moved = Molecule {
                geometry: mol.geometry().iter().map(|r| r + Vector3::new(dx, dy, 0.0)).collect(),
                ..mol.clone()
            };
            let a = mol.nuclear_repulsion_energy();
            let b = moved.nuclear_repulsion_energy();
            prop_assert!((a - b).abs() <= 1e-9 * a.abs());
        }

        #[test]
        fn orient_preserves_moments_and_distances(
            n in 2_usize..6,
            spacing in 0.5_f64..5.0,
        ) {
            let mol = chain(n, spacing);
            let oriented = mol.orient();
            let before = mol.principal_moments();
            let after = oriented.principal_moments();
            prop_assert!((before - after).norm() <= 1e-8 * before.norm().max(1.0));
            let d0 = (mol.geometry()[0] - mol.geometry()[n - 1]).norm();
            let d1 = (oriented.geometry()[0] - oriented.geometry()[n - 1]).norm();
            prop_assert!((d0 - d1).abs() < 1e-9);
        }
    }
}
