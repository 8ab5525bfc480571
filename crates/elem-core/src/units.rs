// elem-core/src/units.rs

use uom::si::f64::{Energy as UomEnergy, Length as UomLength, Mass as UomMass};

// Public canonical unit types (SI, f64)
pub type Energy = UomEnergy;
pub type Length = UomLength;
pub type Mass = UomMass;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

/// Length given in bohr (atomic unit of length).
#[inline]
pub fn bohr(v: f64) -> Length {
    m(v * constants::BOHR_RADIUS_M)
}

/// Mass given in unified atomic mass units.
#[inline]
pub fn amu(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v * constants::AMU_KG)
}

/// Energy given in hartree.
#[inline]
pub fn hartree(v: f64) -> Energy {
    use uom::si::energy::joule;
    Energy::new::<joule>(v * constants::HARTREE_J)
}

/// Read a length back out in bohr.
#[inline]
pub fn in_bohr(l: Length) -> f64 {
    use uom::si::length::meter;
    l.get::<meter>() / constants::BOHR_RADIUS_M
}

/// Read a mass back out in unified atomic mass units.
#[inline]
pub fn in_amu(mass: Mass) -> f64 {
    use uom::si::mass::kilogram;
    mass.get::<kilogram>() / constants::AMU_KG
}

/// Read an energy back out in hartree.
#[inline]
pub fn in_hartree(e: Energy) -> f64 {
    use uom::si::energy::joule;
    e.get::<joule>() / constants::HARTREE_J
}

/// CODATA 2018 values needed to bridge atomic units and SI.
pub mod constants {
    pub const BOHR_RADIUS_M: f64 = 0.529_177_210_903e-10;
    pub const BOHR_RADIUS_ANGSTROM: f64 = 0.529_177_210_903;
    pub const AMU_KG: f64 = 1.660_539_066_60e-27;
    pub const HARTREE_J: f64 = 4.359_744_722_207_1e-18;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    #[test]
    fn bohr_and_angstrom_agree() {
        use uom::si::length::angstrom as angstrom_unit;
        let a0 = bohr(1.0);
        assert!(nearly_equal(
            a0.get::<angstrom_unit>(),
            constants::BOHR_RADIUS_ANGSTROM,
            Tolerances::default()
        ));
    }

    #[test]
    fn atomic_unit_round_trips() {
        let tol = Tolerances::default();
        assert!(nearly_equal(in_bohr(bohr(2.5)), 2.5, tol));
        assert!(nearly_equal(in_bohr(m(1e-10)), 1.0 / constants::BOHR_RADIUS_ANGSTROM, tol));
        assert!(nearly_equal(in_amu(amu(12.0)), 12.0, tol));
        assert!(nearly_equal(in_hartree(hartree(-76.0)), -76.0, tol));
    }
}
