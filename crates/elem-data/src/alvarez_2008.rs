//! Covalent radii of Alvarez et al., "Covalent radii revisited",
//! Dalton Trans. (2008) 2832-2838.
//!
//! Values in angstrom, hydrogen through curium. Carbon is given per
//! hybridization and manganese, iron and cobalt per spin state; those elements
//! have no plain-symbol entry here.

use crate::covalent_radii::RadiiSource;

pub(crate) const ALVAREZ_2008: RadiiSource = RadiiSource {
    title: "Covalent radii revisited",
    date: "2008-05-12",
    doi: "10.1039/B801115J",
    units: "angstrom",
    entries: &[
        ("H", "0.31", "uncertainty 0.05"),
        ("He", "0.28", "no uncertainty reported"),
        ("Li", "1.28", "uncertainty 0.07"),
        ("Be", "0.96", "uncertainty 0.03"),
        ("B", "0.84", "uncertainty 0.03"),
        ("C_sp3", "0.76", "uncertainty 0.01"),
        ("C_sp2", "0.73", "uncertainty 0.02"),
        ("C_sp", "0.69", "uncertainty 0.01"),
        ("N", "0.71", "uncertainty 0.01"),
        ("O", "0.66", "uncertainty 0.02"),
        ("F", "0.57", "uncertainty 0.03"),
        ("Ne", "0.58", "no uncertainty reported"),
        ("Na", "1.66", "uncertainty 0.09"),
        ("Mg", "1.41", "uncertainty 0.07"),
        ("Al", "1.21", "uncertainty 0.04"),
        ("Si", "1.11", "uncertainty 0.02"),
        ("P", "1.07", "uncertainty 0.03"),
        ("S", "1.05", "uncertainty 0.03"),
        ("Cl", "1.02", "uncertainty 0.04"),
        ("Ar", "1.06", "uncertainty 0.10"),
        ("K", "2.03", "uncertainty 0.12"),
        ("Ca", "1.76", "uncertainty 0.10"),
        ("Sc", "1.70", "uncertainty 0.07"),
        ("Ti", "1.60", "uncertainty 0.08"),
        ("V", "1.53", "uncertainty 0.08"),
        ("Cr", "1.39", "uncertainty 0.05"),
        ("Mn_lowspin", "1.39", "uncertainty 0.05"),
        ("Mn_highspin", "1.61", "uncertainty 0.08"),
        ("Fe_lowspin", "1.32", "uncertainty 0.03"),
        ("Fe_highspin", "1.52", "uncertainty 0.06"),
        ("Co_lowspin", "1.26", "uncertainty 0.03"),
        ("Co_highspin", "1.50", "uncertainty 0.07"),
        ("Ni", "1.24", "uncertainty 0.04"),
        ("Cu", "1.32", "uncertainty 0.04"),
        ("Zn", "1.22", "uncertainty 0.04"),
        ("Ga", "1.22", "uncertainty 0.03"),
        ("Ge", "1.20", "uncertainty 0.04"),
        ("As", "1.19", "uncertainty 0.04"),
        ("Se", "1.20", "uncertainty 0.04"),
        ("Br", "1.20", "uncertainty 0.03"),
        ("Kr", "1.16", "uncertainty 0.04"),
        ("Rb", "2.20", "uncertainty 0.09"),
        ("Sr", "1.95", "uncertainty 0.10"),
        ("Y", "1.90", "uncertainty 0.07"),
        ("Zr", "1.75", "uncertainty 0.07"),
        ("Nb", "1.64", "uncertainty 0.06"),
        ("Mo", "1.54", "uncertainty 0.05"),
        ("Tc", "1.47", "uncertainty 0.07"),
        ("Ru", "1.46", "uncertainty 0.07"),
        ("Rh", "1.42", "uncertainty 0.07"),
        ("Pd", "1.39", "uncertainty 0.06"),
        ("Ag", "1.45", "uncertainty 0.05"),
        ("Cd", "1.44", "uncertainty 0.09"),
        ("In", "1.42", "uncertainty 0.05"),
        ("Sn", "1.39", "uncertainty 0.04"),
        ("Sb", "1.39", "uncertainty 0.05"),
        ("Te", "1.38", "uncertainty 0.04"),
        ("I", "1.39", "uncertainty 0.03"),
        ("Xe", "1.40", "uncertainty 0.09"),
        ("Cs", "2.44", "uncertainty 0.11"),
        ("Ba", "2.15", "uncertainty 0.11"),
        ("La", "2.07", "uncertainty 0.08"),
        ("Ce", "2.04", "uncertainty 0.09"),
        ("Pr", "2.03", "uncertainty 0.07"),
        ("Nd", "2.01", "uncertainty 0.06"),
        ("Pm", "1.99", "no uncertainty reported"),
        ("Sm", "1.98", "uncertainty 0.08"),
        ("Eu", "1.98", "uncertainty 0.06"),
        ("Gd", "1.96", "uncertainty 0.06"),
        ("Tb", "1.94", "uncertainty 0.05"),
        ("Dy", "1.92", "uncertainty 0.07"),
        ("Ho", "1.92", "uncertainty 0.07"),
        ("Er", "1.89", "uncertainty 0.06"),
        ("Tm", "1.90", "uncertainty 0.10"),
        ("Yb", "1.87", "uncertainty 0.08"),
        ("Lu", "1.87", "uncertainty 0.08"),
        ("Hf", "1.75", "uncertainty 0.10"),
        ("Ta", "1.70", "uncertainty 0.08"),
        ("W", "1.62", "uncertainty 0.07"),
        ("Re", "1.51", "uncertainty 0.07"),
        ("Os", "1.44", "uncertainty 0.04"),
        ("Ir", "1.41", "uncertainty 0.06"),
        ("Pt", "1.36", "uncertainty 0.05"),
        ("Au", "1.36", "uncertainty 0.06"),
        ("Hg", "1.32", "uncertainty 0.05"),
        ("Tl", "1.45", "uncertainty 0.07"),
        ("Pb", "1.46", "uncertainty 0.05"),
        ("Bi", "1.48", "uncertainty 0.04"),
        ("Po", "1.40", "uncertainty 0.04"),
        ("At", "1.50", "no uncertainty reported"),
        ("Rn", "1.50", "no uncertainty reported"),
        ("Fr", "2.60", "no uncertainty reported"),
        ("Ra", "2.21", "uncertainty 0.02"),
        ("Ac", "2.15", "no uncertainty reported"),
        ("Th", "2.06", "uncertainty 0.06"),
        ("Pa", "2.00", "no uncertainty reported"),
        ("U", "1.96", "uncertainty 0.07"),
        ("Np", "1.90", "uncertainty 0.01"),
        ("Pu", "1.87", "uncertainty 0.01"),
        ("Am", "1.80", "uncertainty 0.06"),
        ("Cm", "1.69", "uncertainty 0.03"),
    ],
};
