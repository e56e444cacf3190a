use std::collections::HashMap;

use serde::Deserialize;

use crate::error::ClassifyError;

/// A manually curated correction for one record identifier.
#[derive(Debug, Clone, Deserialize)]
pub struct Override {
    pub name: String,
    #[serde(default)]
    pub address: String,
}

/// Immutable id → override mapping, loaded once at startup.
///
/// Overrides take precedence over every heuristic: a row whose id appears
/// here resolves to the curated name/address verbatim. Entries are produced
/// by reviewing a previous run's to-search listing.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: HashMap<String, Override>,
}

#[derive(Debug, Deserialize)]
struct OverrideFile {
    #[serde(default)]
    overrides: HashMap<String, Override>,
}

impl OverrideTable {
    /// An empty table; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_toml(input: &str) -> Result<Self, ClassifyError> {
        let file: OverrideFile =
            toml::from_str(input).map_err(|e| ClassifyError::OverrideParse(e.to_string()))?;
        let table = Self {
            entries: file.overrides,
        };
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<(), ClassifyError> {
        for (id, entry) in &self.entries {
            if entry.name.trim().is_empty() {
                return Err(ClassifyError::OverrideValidation(format!(
                    "override for id '{id}' has an empty name"
                )));
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Override> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
