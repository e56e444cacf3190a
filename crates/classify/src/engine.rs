use std::collections::HashMap;

use crate::classify::classify;
use crate::error::ClassifyError;
use crate::model::{Classification, ProcessMeta, ProcessOutput, RecordSet, VenueRecord};
use crate::overrides::OverrideTable;
use crate::report::compute_summary;

/// Parse header-rowed CSV text into a `RecordSet`.
///
/// Every column becomes a field; `id`, `address` and `postcode` are
/// conventional, not enforced: a record missing any of them classifies
/// with empty-string values rather than erroring.
pub fn load_records(csv_data: &str) -> Result<RecordSet, ClassifyError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ClassifyError::Csv(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ClassifyError::Csv(e.to_string()))?;
        let mut fields = HashMap::new();
        for (i, h) in headers.iter().enumerate() {
            fields.insert(h.clone(), record.get(i).unwrap_or("").to_string());
        }
        records.push(VenueRecord::new(fields));
    }

    Ok(RecordSet { headers, records })
}

/// Classify every record into exactly one bucket, in input order.
///
/// Resolved rows get their `name`/`address` fields rewritten; ignored and
/// to-search rows pass through untouched. The summary counts always sum to
/// the input row count.
pub fn run(record_set: &RecordSet, overrides: &OverrideTable) -> ProcessOutput {
    let mut working = Vec::new();
    let mut ignored = Vec::new();
    let mut to_search = Vec::new();

    for record in &record_set.records {
        match classify(record, overrides) {
            Classification::Ignored => ignored.push(record.clone()),
            Classification::NeedsSearch => to_search.push(record.clone()),
            Classification::Resolved { name, address } => {
                let mut record = record.clone();
                record.set("name", name);
                record.set("address", address);
                working.push(record);
            }
        }
    }

    let summary = compute_summary(&working, &ignored, &to_search);

    ProcessOutput {
        meta: ProcessMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        working,
        ignored,
        to_search,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
