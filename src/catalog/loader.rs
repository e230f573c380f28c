//! # Catalog Loading
//!
//! The catalog ships compiled into the binary as a JSON document
//! (`data/interviews.json`). A replacement definition can be loaded from a
//! file with the same shape.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::catalog::record::InterviewRecord;

const BUILTIN_DEFINITION: &str = include_str!("../../data/interviews.json");

/// Errors raised while building a [`Catalog`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two records share the same identifier.
    #[error("duplicate interview id '{id}'")]
    DuplicateId { id: String },
    /// The definition is not valid JSON for a list of records.
    #[error("invalid catalog definition: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered, immutable-after-startup sequence of interview records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<InterviewRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate identifiers.
    pub fn new(records: Vec<InterviewRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: record.id.clone(),
                });
            }
        }
        Ok(Self { records })
    }

    /// The definition embedded in the program.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_DEFINITION)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<InterviewRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Load a catalog definition from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        let catalog = Self::from_json(&contents)
            .with_context(|| format!("Failed to load catalog file: {}", path.display()))?;
        Ok(catalog)
    }

    pub fn records(&self) -> &[InterviewRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InterviewRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&InterviewRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Attach fetched raw text to a record. Returns `false` for unknown ids.
    pub fn attach_raw_content(&mut self, id: &str, raw: String) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.raw_content = Some(raw);
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a InterviewRecord;
    type IntoIter = std::slice::Iter<'a, InterviewRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(id: &str, company: &str) -> InterviewRecord {
        InterviewRecord {
            id: id.to_string(),
            company: company.to_string(),
            role: "Engineer".to_string(),
            experience: "1 year".to_string(),
            date: "June 2024".to_string(),
            file: None,
            notes: None,
            questions: Vec::new(),
            raw_content: None,
        }
    }

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        assert_eq!(catalog.len(), 2);

        let exl = &catalog.records()[0];
        assert_eq!(exl.company, "EXL");
        assert_eq!(exl.role, "AWS Data Engineer");
        assert_eq!(exl.questions.len(), 9);
        assert_eq!(exl.file.as_deref(), Some("E/exl_aws_dataengineer_5y_oct_25.txt"));
        assert_eq!(exl.notes(), Some("The interview focused more on spark."));

        let sapient = &catalog.records()[1];
        assert_eq!(sapient.company, "Publicis Sapient");
        assert_eq!(sapient.questions.len(), 8);
        assert_eq!(sapient.notes(), None);
    }

    #[test]
    fn test_builtin_question_order_preserved() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let first = &catalog.records()[0].questions;
        assert_eq!(first[0].question, "How do you connect spark with aws");
        assert_eq!(first[8].question, "Lifecycle of a SQL query");
        assert_eq!(first[4].approach, None);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![record("same", "A"), record("same", "B")]);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateId { ref id }) if id == "same"
        ));
    }

    #[test]
    fn test_from_path_missing_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let err = Catalog::from_path(&temp_dir.path().join("missing.json"))
            .expect_err("missing file should fail");
        assert!(err.to_string().contains("Failed to read catalog file"));
    }

    #[test]
    fn test_from_path_roundtrip() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("catalog.json");
        let json = serde_json::to_string(&vec![record("one", "Acme")]).expect("serialize");
        fs::write(&path, json).expect("write");

        let catalog = Catalog::from_path(&path).expect("load");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("one").map(|r| r.company.as_str()), Some("Acme"));
    }

    #[test]
    fn test_attach_raw_content() {
        let mut catalog = Catalog::new(vec![record("one", "Acme")]).expect("catalog");
        assert!(catalog.attach_raw_content("one", "raw".to_string()));
        assert!(!catalog.attach_raw_content("missing", "raw".to_string()));
        assert_eq!(
            catalog.get("one").and_then(|r| r.raw_content.as_deref()),
            Some("raw")
        );
    }
}
