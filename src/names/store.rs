//! Ordered palette storage
//!
//! The store is a plain ordered sequence of color records. It does no
//! matching work; it only owns the data and loads/saves the JSON
//! interchange format (an array of `[hex, category, name]` triples).

use std::path::Path;

use log::info;

use super::{ColorRecord, DEFAULT_COLORS};
use crate::{MatchError, Result};

/// Ordered, read-only collection of named colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteStore {
    records: Vec<ColorRecord>,
}

impl Default for PaletteStore {
    /// Store populated with the built-in color table
    fn default() -> Self {
        Self {
            records: DEFAULT_COLORS.to_vec(),
        }
    }
}

impl PaletteStore {
    /// Create a store from an ordered list of records
    ///
    /// An empty list is accepted here; the matcher rejects it at construction.
    pub fn new(records: Vec<ColorRecord>) -> Self {
        Self { records }
    }

    /// All records in insertion order
    pub fn records(&self) -> &[ColorRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.category()) {
                seen.push(record.category());
            }
        }
        seen
    }

    /// Parse a palette from its JSON interchange form
    ///
    /// # Errors
    ///
    /// Returns `MatchError::ConfigError` for malformed JSON and
    /// `MatchError::InvalidPaletteEntry` naming the first entry whose hex
    /// is not six hex digits.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Vec<(String, String, String)> = serde_json::from_str(json)
            .map_err(|e| MatchError::config("invalid palette JSON", e))?;

        let records = raw
            .into_iter()
            .enumerate()
            .map(|(index, (hex, category, name))| {
                ColorRecord::new(hex, category, name).map_err(|e| e.at_entry(index))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { records })
    }

    /// Load a palette from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MatchError::config(format!("cannot read palette {}", path.display()), e)
        })?;
        let store = Self::from_json_str(&content)?;
        info!(
            "loaded {} palette records from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// Save the palette to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records)
            .map_err(|e| MatchError::config("cannot serialize palette", e))?;
        std::fs::write(path, json).map_err(|e| {
            MatchError::config(format!("cannot write palette {}", path.display()), e)
        })
    }
}

impl From<Vec<ColorRecord>> for PaletteStore {
    fn from(records: Vec<ColorRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<ColorRecord> for PaletteStore {
    fn from_iter<I: IntoIterator<Item = ColorRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_colors() -> PaletteStore {
        PaletteStore::new(vec![
            ColorRecord::new("FFFFFF", "Blanc", "Blanc clair").unwrap(),
            ColorRecord::new("000000", "Noir", "Noir foncé").unwrap(),
        ])
    }

    #[test]
    fn test_default_uses_builtin_table() {
        let store = PaletteStore::default();
        assert_eq!(store.len(), DEFAULT_COLORS.len());
        assert_eq!(store.records()[0].name(), "Aubergine");
    }

    #[test]
    fn test_records_keep_insertion_order() {
        let store = two_colors();
        let names: Vec<&str> = store.records().iter().map(|r| r.name()).collect();
        assert_eq!(names, ["Blanc clair", "Noir foncé"]);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let store = PaletteStore::default();
        let categories = store.categories();
        assert_eq!(categories.first(), Some(&"Violet"));
        assert_eq!(categories.len(), 11);
    }

    #[test]
    fn test_from_json_str() {
        let store = PaletteStore::from_json_str(
            r#"[["ffffff", "Blanc", "Blanc clair"], ["000000", "Noir", "Noir foncé"]]"#,
        )
        .unwrap();
        assert_eq!(store, two_colors());
    }

    #[test]
    fn test_from_json_str_reports_bad_entry_index() {
        let err = PaletteStore::from_json_str(r##"[["FFFFFF","Blanc","a"],["#00000","Noir","b"]]"##)
            .unwrap_err();
        match err {
            MatchError::InvalidPaletteEntry { index, hex } => {
                assert_eq!(index, 1);
                assert_eq!(hex, "#00000");
            }
            other => panic!("Expected InvalidPaletteEntry, got: {:?}", other),
        }
    }

    #[test]
    fn test_from_json_str_malformed() {
        let err = PaletteStore::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, MatchError::ConfigError { .. }));
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.json");

        two_colors().to_json_file(&path).unwrap();
        let loaded = PaletteStore::from_json_file(&path).unwrap();
        assert_eq!(loaded, two_colors());
    }

    #[test]
    fn test_missing_file() {
        let err = PaletteStore::from_json_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, MatchError::ConfigError { .. }));
    }
}
