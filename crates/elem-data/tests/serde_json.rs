//! JSON shape of the serializable data types (requires `--features serde`).
#![cfg(feature = "serde")]

use elem_data::{Datum, RadiiContext, RadiusOptions, covalent_radii};

#[test]
fn radius_options_roundtrip() {
    let opts = RadiusOptions::default().with_units("angstrom").with_missing(1.5);
    let json = serde_json::to_string(&opts).unwrap();
    let back: RadiusOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, opts);
}

#[test]
fn datum_roundtrip_keeps_decimal_text() {
    let datum = covalent_radii().get_datum("H").unwrap().clone();
    let json = serde_json::to_string(&datum).unwrap();
    assert!(json.contains("\"label\":\"H\""));
    let back: Datum = serde_json::from_str(&json).unwrap();
    assert_eq!(back, datum);
    assert_eq!(back.value().to_string(), "0.31");
}

#[test]
fn context_serializes_as_variant_name() {
    let json = serde_json::to_string(&RadiiContext::Alvarez2008).unwrap();
    assert_eq!(json, "\"Alvarez2008\"");
}

#[test]
fn export_serializes() {
    let export = covalent_radii().export_fixed_array(2.0);
    let json = serde_json::to_value(&export).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 118);
    assert_eq!(entries[0]["symbol"], "H");
    assert_eq!(entries[117]["value"]["Default"], 2.0);
}
