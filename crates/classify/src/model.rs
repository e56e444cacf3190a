use std::collections::HashMap;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A single row from the venue spreadsheet.
///
/// Field access never fails: a column absent from the row reads as `""`.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct VenueRecord {
    pub fields: HashMap<String, String>,
}

impl VenueRecord {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Value of `column`, or `""` if the row has no such column.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        self.fields.insert(column.to_string(), value.into());
    }

    pub fn id(&self) -> &str {
        self.get("id")
    }
}

/// Parsed input: header order plus records in file order.
#[derive(Debug, Clone)]
pub struct RecordSet {
    pub headers: Vec<String>,
    pub records: Vec<VenueRecord>,
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Outcome of classifying one record. Every record yields exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Online-only venue, excluded from the working set.
    Ignored,
    /// Bare street address with no discoverable venue name; deferred for
    /// manual lookup.
    NeedsSearch,
    /// Venue name and street address extracted.
    Resolved { name: String, address: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Working,
    Ignored,
    ToSearch,
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Working => write!(f, "working"),
            Self::Ignored => write!(f, "ignored"),
            Self::ToSearch => write!(f, "to_search"),
        }
    }
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ProcessSummary {
    pub total: usize,
    pub resolved: usize,
    pub ignored: usize,
    pub needs_search: usize,
    pub bucket_counts: HashMap<String, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessMeta {
    pub engine_version: String,
    pub run_at: String,
}

/// Full result of a processing run: records routed into the three buckets,
/// working rows carrying their rewritten `name`/`address`.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessOutput {
    pub meta: ProcessMeta,
    pub summary: ProcessSummary,
    pub working: Vec<VenueRecord>,
    pub ignored: Vec<VenueRecord>,
    pub to_search: Vec<VenueRecord>,
}
