// Static location catalog: map locations and their known name spellings.
//
// Loaded once at startup from a JSON file and never mutated afterwards, so
// the catalog is shared across requests behind an `Arc` with no locking.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A map location with its canonical English name, map coordinates, and the
/// spellings it can be found under (translations, abbreviations, common
/// misspellings). The canonical name is always one of the spellings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub spellings: Vec<String>,
}

/// Errors that make the catalog unusable. All of these are fatal at startup;
/// a running process never sees them.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("location id {0} has an empty name")]
    EmptyName(i64),
    #[error("location '{0}' has an empty spelling")]
    EmptySpelling(String),
    #[error("duplicate location id {0}")]
    DuplicateId(i64),
}

/// The read-only catalog of locations, kept in file order.
#[derive(Debug, Clone)]
pub struct Catalog {
    locations: Vec<Location>,
}

impl Catalog {
    /// Load and validate the catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json(&contents)
    }

    /// Parse and validate a catalog from a JSON document (an array of
    /// locations).
    pub fn from_json(json: &str) -> Result<Catalog, CatalogError> {
        let mut locations: Vec<Location> = serde_json::from_str(json)?;

        let mut seen_ids = std::collections::HashSet::new();
        for location in &mut locations {
            if location.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(location.id));
            }
            if !seen_ids.insert(location.id) {
                return Err(CatalogError::DuplicateId(location.id));
            }
            if location.spellings.iter().any(|s| s.trim().is_empty()) {
                return Err(CatalogError::EmptySpelling(location.name.clone()));
            }
            // The canonical name must be searchable like any other alias.
            if !location.spellings.iter().any(|s| s == &location.name) {
                location.spellings.insert(0, location.name.clone());
            }
        }

        Ok(Catalog { locations })
    }

    /// All locations in catalog (file insertion) order.
    pub fn all_locations(&self) -> &[Location] {
        &self.locations
    }

    /// The spellings of a single location, if it exists.
    pub fn spellings_of(&self, location_id: i64) -> Option<&[String]> {
        self.locations
            .iter()
            .find(|l| l.id == location_id)
            .map(|l| l.spellings.as_slice())
    }

    /// Every (spelling, owning location) pair, in catalog order. This is the
    /// corpus the candidate filter scans.
    pub fn spelling_entries(&self) -> impl Iterator<Item = (&str, &Location)> {
        self.locations
            .iter()
            .flat_map(|l| l.spellings.iter().map(move |s| (s.as_str(), l)))
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn spelling_count(&self) -> usize {
        self.locations.iter().map(|l| l.spellings.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"[
            {"id": 1, "name": "Chernogorsk", "latitude": 4.2, "longitude": 9.8,
             "spellings": ["Chernogorsk", "Cherno", "Черногорск"]},
            {"id": 2, "name": "Elektrozavodsk", "latitude": 8.1, "longitude": 13.9,
             "spellings": ["Elektro"]}
        ]"#
    }

    #[test]
    fn test_load_keeps_file_order() {
        let catalog = Catalog::from_json(sample_json()).unwrap();
        let names: Vec<&str> = catalog.all_locations().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Chernogorsk", "Elektrozavodsk"]);
    }

    #[test]
    fn test_canonical_name_inserted_as_spelling() {
        let catalog = Catalog::from_json(sample_json()).unwrap();
        // "Elektrozavodsk" was missing from its own spellings and gets added.
        let spellings = catalog.spellings_of(2).unwrap();
        assert_eq!(spellings, &["Elektrozavodsk", "Elektro"]);
        // Already-present canonical names are not duplicated.
        let spellings = catalog.spellings_of(1).unwrap();
        assert_eq!(spellings.len(), 3);
    }

    #[test]
    fn test_spellings_of_unknown_id_is_none() {
        let catalog = Catalog::from_json(sample_json()).unwrap();
        assert!(catalog.spellings_of(99).is_none());
    }

    #[test]
    fn test_spelling_entries_cover_all_aliases() {
        let catalog = Catalog::from_json(sample_json()).unwrap();
        assert_eq!(catalog.spelling_entries().count(), catalog.spelling_count());
        assert_eq!(catalog.spelling_count(), 5);
    }

    #[test]
    fn test_empty_name_rejected() {
        let json = r#"[{"id": 1, "name": "  ", "latitude": 0, "longitude": 0, "spellings": []}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::EmptyName(1))
        ));
    }

    #[test]
    fn test_empty_spelling_rejected() {
        let json = r#"[{"id": 1, "name": "Berezino", "latitude": 0, "longitude": 0,
                        "spellings": ["Berezino", ""]}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::EmptySpelling(_))
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"[
            {"id": 1, "name": "A", "latitude": 0, "longitude": 0, "spellings": []},
            {"id": 1, "name": "B", "latitude": 0, "longitude": 0, "spellings": []}
        ]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
