//! Fish species reference table.
//!
//! The species file is a JSON object mapping DNR species codes to common
//! and scientific names, e.g. `{"WAE": {"name": "Walleye",
//! "scientific_name": "Sander vitreus"}}`. Codes that appear in survey
//! data but not in the table are displayed as `Species <code>`.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of the species reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishSpecies {
    /// Common name, e.g. "Walleye"
    pub name: String,
    /// Scientific name, e.g. "Sander vitreus"
    pub scientific_name: String,
}

/// Species code → names, keyed by the DNR three-letter code.
pub type SpeciesTable = HashMap<String, FishSpecies>;

/// Parses the species reference JSON.
pub fn parse_species_json(json: &str) -> Result<SpeciesTable> {
    let table: SpeciesTable = serde_json::from_str(json)?;
    Ok(table)
}

/// Display label for a species code: `"Walleye (WAE)"`, falling back to
/// `"Species XYZ"` for codes missing from the table.
pub fn species_label(table: &SpeciesTable, code: &str) -> String {
    match table.get(code) {
        Some(species) => format!("{} ({})", species.name, code),
        None => format!("Species {}", code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = r#"{
        "WAE": {"name": "Walleye", "scientific_name": "Sander vitreus"},
        "NOP": {"name": "Northern Pike", "scientific_name": "Esox lucius"}
    }"#;

    #[test]
    fn test_parse_species_json() {
        let table = parse_species_json(SAMPLE_JSON).expect("sample JSON should parse");
        assert_eq!(table.len(), 2);
        assert_eq!(table["WAE"].name, "Walleye");
        assert_eq!(table["NOP"].scientific_name, "Esox lucius");
    }

    #[test]
    fn test_species_label_fallback() {
        let table = parse_species_json(SAMPLE_JSON).unwrap();
        assert_eq!(species_label(&table, "WAE"), "Walleye (WAE)");
        assert_eq!(species_label(&table, "XYZ"), "Species XYZ");
    }

    #[test]
    fn test_parse_species_json_rejects_malformed() {
        assert!(parse_species_json("not json").is_err());
    }
}
