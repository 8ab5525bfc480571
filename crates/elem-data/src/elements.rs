//! Bundled periodic-table source data.
//!
//! Standard atomic weights follow the IUPAC conventional values; for elements
//! without a stable isotope the mass number of the longest-lived isotope is
//! listed. Nuclide masses are from the 2016 Atomic Mass Evaluation and cover
//! every stable nuclide (plus tritium and carbon-14) for hydrogen through argon.

/// (symbol, name, standard atomic weight), indexed by atomic number - 1.
pub(crate) const ELEMENTS: [(&str, &str, f64); 118] = [
    ("H", "Hydrogen", 1.008),
    ("He", "Helium", 4.002602),
    ("Li", "Lithium", 6.94),
    ("Be", "Beryllium", 9.0121831),
    ("B", "Boron", 10.81),
    ("C", "Carbon", 12.011),
    ("N", "Nitrogen", 14.007),
    ("O", "Oxygen", 15.999),
    ("F", "Fluorine", 18.998403163),
    ("Ne", "Neon", 20.1797),
    ("Na", "Sodium", 22.98976928),
    ("Mg", "Magnesium", 24.305),
    ("Al", "Aluminium", 26.9815385),
    ("Si", "Silicon", 28.085),
    ("P", "Phosphorus", 30.973761998),
    ("S", "Sulfur", 32.06),
    ("Cl", "Chlorine", 35.45),
    ("Ar", "Argon", 39.948),
    ("K", "Potassium", 39.0983),
    ("Ca", "Calcium", 40.078),
    ("Sc", "Scandium", 44.955908),
    ("Ti", "Titanium", 47.867),
    ("V", "Vanadium", 50.9415),
    ("Cr", "Chromium", 51.9961),
    ("Mn", "Manganese", 54.938044),
    ("Fe", "Iron", 55.845),
    ("Co", "Cobalt", 58.933194),
    ("Ni", "Nickel", 58.6934),
    ("Cu", "Copper", 63.546),
    ("Zn", "Zinc", 65.38),
    ("Ga", "Gallium", 69.723),
    ("Ge", "Germanium", 72.630),
    ("As", "Arsenic", 74.921595),
    ("Se", "Selenium", 78.971),
    ("Br", "Bromine", 79.904),
    ("Kr", "Krypton", 83.798),
    ("Rb", "Rubidium", 85.4678),
    ("Sr", "Strontium", 87.62),
    ("Y", "Yttrium", 88.90584),
    ("Zr", "Zirconium", 91.224),
    ("Nb", "Niobium", 92.90637),
    ("Mo", "Molybdenum", 95.95),
    ("Tc", "Technetium", 98.0),
    ("Ru", "Ruthenium", 101.07),
    ("Rh", "Rhodium", 102.90550),
    ("Pd", "Palladium", 106.42),
    ("Ag", "Silver", 107.8682),
    ("Cd", "Cadmium", 112.414),
    ("In", "Indium", 114.818),
    ("Sn", "Tin", 118.710),
    ("Sb", "Antimony", 121.760),
    ("Te", "Tellurium", 127.60),
    ("I", "Iodine", 126.90447),
    ("Xe", "Xenon", 131.293),
    ("Cs", "Caesium", 132.90545196),
    ("Ba", "Barium", 137.327),
    ("La", "Lanthanum", 138.90547),
    ("Ce", "Cerium", 140.116),
    ("Pr", "Praseodymium", 140.90766),
    ("Nd", "Neodymium", 144.242),
    ("Pm", "Promethium", 145.0),
    ("Sm", "Samarium", 150.36),
    ("Eu", "Europium", 151.964),
    ("Gd", "Gadolinium", 157.25),
    ("Tb", "Terbium", 158.92535),
    ("Dy", "Dysprosium", 162.500),
    ("Ho", "Holmium", 164.93033),
    ("Er", "Erbium", 167.259),
    ("Tm", "Thulium", 168.93422),
    ("Yb", "Ytterbium", 173.045),
    ("Lu", "Lutetium", 174.9668),
    ("Hf", "Hafnium", 178.49),
    ("Ta", "Tantalum", 180.94788),
    ("W", "Tungsten", 183.84),
    ("Re", "Rhenium", 186.207),
    ("Os", "Osmium", 190.23),
    ("Ir", "Iridium", 192.217),
    ("Pt", "Platinum", 195.084),
    ("Au", "Gold", 196.966569),
    ("Hg", "Mercury", 200.592),
    ("Tl", "Thallium", 204.38),
    ("Pb", "Lead", 207.2),
    ("Bi", "Bismuth", 208.98040),
    ("Po", "Polonium", 209.0),
    ("At", "Astatine", 210.0),
    ("Rn", "Radon", 222.0),
    ("Fr", "Francium", 223.0),
    ("Ra", "Radium", 226.0),
    ("Ac", "Actinium", 227.0),
    ("Th", "Thorium", 232.0377),
    ("Pa", "Protactinium", 231.03588),
    ("U", "Uranium", 238.02891),
    ("Np", "Neptunium", 237.0),
    ("Pu", "Plutonium", 244.0),
    ("Am", "Americium", 243.0),
    ("Cm", "Curium", 247.0),
    ("Bk", "Berkelium", 247.0),
    ("Cf", "Californium", 251.0),
    ("Es", "Einsteinium", 252.0),
    ("Fm", "Fermium", 257.0),
    ("Md", "Mendelevium", 258.0),
    ("No", "Nobelium", 259.0),
    ("Lr", "Lawrencium", 266.0),
    ("Rf", "Rutherfordium", 267.0),
    ("Db", "Dubnium", 268.0),
    ("Sg", "Seaborgium", 269.0),
    ("Bh", "Bohrium", 270.0),
    ("Hs", "Hassium", 269.0),
    ("Mt", "Meitnerium", 278.0),
    ("Ds", "Darmstadtium", 281.0),
    ("Rg", "Roentgenium", 282.0),
    ("Cn", "Copernicium", 285.0),
    ("Nh", "Nihonium", 286.0),
    ("Fl", "Flerovium", 289.0),
    ("Mc", "Moscovium", 290.0),
    ("Lv", "Livermorium", 293.0),
    ("Ts", "Tennessine", 294.0),
    ("Og", "Oganesson", 294.0),
];

/// One nuclide: atomic number, mass number, atomic mass [u], most abundant for its element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NuclideData {
    pub z: u8,
    pub a: u16,
    pub mass: f64,
    pub most_abundant: bool,
}

const fn nuc(z: u8, a: u16, mass: f64, most_abundant: bool) -> NuclideData {
    NuclideData {
        z,
        a,
        mass,
        most_abundant,
    }
}

pub(crate) const NUCLIDES: [NuclideData; 40] = [
    nuc(1, 1, 1.007_825_032_23, true),
    nuc(1, 2, 2.014_101_778_12, false),
    nuc(1, 3, 3.016_049_277_9, false),
    nuc(2, 3, 3.016_029_320_1, false),
    nuc(2, 4, 4.002_603_254_13, true),
    nuc(3, 6, 6.015_122_887_4, false),
    nuc(3, 7, 7.016_003_436_6, true),
    nuc(4, 9, 9.012_183_065, true),
    nuc(5, 10, 10.012_936_95, false),
    nuc(5, 11, 11.009_305_36, true),
    nuc(6, 12, 12.0, true),
    nuc(6, 13, 13.003_354_835_07, false),
    nuc(6, 14, 14.003_241_988_4, false),
    nuc(7, 14, 14.003_074_004_43, true),
    nuc(7, 15, 15.000_108_898_88, false),
    nuc(8, 16, 15.994_914_619_57, true),
    nuc(8, 17, 16.999_131_756_50, false),
    nuc(8, 18, 17.999_159_612_86, false),
    nuc(9, 19, 18.998_403_162_73, true),
    nuc(10, 20, 19.992_440_176_2, true),
    nuc(10, 21, 20.993_846_685, false),
    nuc(10, 22, 21.991_385_114, false),
    nuc(11, 23, 22.989_769_282_0, true),
    nuc(12, 24, 23.985_041_697, true),
    nuc(12, 25, 24.985_836_976, false),
    nuc(12, 26, 25.982_592_968, false),
    nuc(13, 27, 26.981_538_53, true),
    nuc(14, 28, 27.976_926_534_65, true),
    nuc(14, 29, 28.976_494_664_90, false),
    nuc(14, 30, 29.973_770_136, false),
    nuc(15, 31, 30.973_761_998_42, true),
    nuc(16, 32, 31.972_071_174_4, true),
    nuc(16, 33, 32.971_458_909_8, false),
    nuc(16, 34, 33.967_867_004, false),
    nuc(16, 36, 35.967_080_71, false),
    nuc(17, 35, 34.968_852_682, true),
    nuc(17, 37, 36.965_902_602, false),
    nuc(18, 36, 35.967_545_105, false),
    nuc(18, 38, 37.962_732_11, false),
    nuc(18, 40, 39.962_383_123_7, true),
];

/// Special single-letter nuclide names: (label, atomic number, mass number).
pub(crate) const NUCLIDE_ALIASES: [(&str, u8, u16); 2] = [("D", 1, 2), ("T", 1, 3)];
