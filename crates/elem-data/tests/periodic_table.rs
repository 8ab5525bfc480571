//! Periodic table identifier resolution, shared by every dataset.

use elem_data::{DataError, PeriodicTable, Resolved, periodic_table};

#[test]
fn every_accepted_form_reaches_the_same_element() {
    let pt = periodic_table();
    for atom in ["Fe", "fe", "FE", "iron", "IRON"] {
        assert_eq!(pt.to_atomic_number(atom).unwrap(), 26, "{atom}");
    }
    assert_eq!(pt.to_atomic_number(26).unwrap(), 26);
    assert_eq!(pt.to_atomic_number(&"Iron".to_string()).unwrap(), 26);
}

#[test]
fn symbol_name_number_are_consistent() {
    let pt = periodic_table();
    for e in pt.elements() {
        assert_eq!(pt.to_symbol(e.name()).unwrap(), e.symbol());
        assert_eq!(pt.to_symbol(e.atomic_number()).unwrap(), e.symbol());
        assert_eq!(pt.to_name(e.symbol()).unwrap(), e.name());
    }
}

#[test]
fn nuclide_labels() {
    let pt = periodic_table();
    assert_eq!(
        pt.resolve("2H").unwrap(),
        Resolved {
            atomic_number: 1,
            mass_number: Some(2)
        }
    );
    assert_eq!(pt.to_mass("T").unwrap(), pt.to_mass("H3").unwrap());
    assert_eq!(pt.to_mass("O18").unwrap(), 17.999_159_612_86);
    assert!(pt.to_mass("Cl37").unwrap() > pt.to_mass("Cl").unwrap());
}

#[test]
fn heavy_elements_use_standard_weight() {
    let pt = periodic_table();
    assert_eq!(pt.to_mass("U").unwrap(), 238.02891);
    assert_eq!(pt.to_mass(118).unwrap(), 294.0);
}

#[test]
fn rejects_non_elements() {
    let pt = periodic_table();
    for atom in ["Uuo", "Q", "carbonium", "C-13", " "] {
        assert!(
            matches!(pt.to_symbol(atom), Err(DataError::NotAnElement { .. })),
            "{atom}"
        );
    }
}

#[test]
fn fresh_table_matches_singleton() {
    let fresh = PeriodicTable::new();
    assert_eq!(fresh.elements(), periodic_table().elements());
}
