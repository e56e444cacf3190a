//! `vscrub process` — split addresses and route rows into output buckets.

use std::path::{Path, PathBuf};

use venuescrub_classify::engine::{load_records, run};
use venuescrub_classify::model::{ProcessOutput, RecordSet, VenueRecord};
use venuescrub_classify::report::search_listing;
use venuescrub_io::Table;

use crate::{load_overrides, CliError};

pub fn cmd_process(
    input: PathBuf,
    overrides: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    json: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let (record_set, output) = load_and_run(&input, overrides.as_deref())?;

    let out_dir = match out_dir {
        Some(dir) => dir,
        None => input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf(),
    };
    std::fs::create_dir_all(&out_dir)
        .map_err(|e| CliError::io(format!("{}: {}", out_dir.display(), e)))?;

    let headers = output_headers(&record_set.headers);

    // All three files are always written, header-only when a bucket is
    // empty, so downstream steps never probe for existence.
    let buckets: [(&str, &[VenueRecord]); 3] = [
        ("venues_wip.csv", &output.working),
        ("venues_ignored.csv", &output.ignored),
        ("venues_to_search.csv", &output.to_search),
    ];
    for (file_name, records) in buckets {
        let path = out_dir.join(file_name);
        write_bucket(records, &headers, &path)?;
        if !quiet && !json {
            println!("written {} rows to {}", records.len(), path.display());
        }
    }

    if json {
        print_json(&output)
    } else {
        print_report(&output);
        Ok(())
    }
}

/// Read the input CSV, load the override table, run the engine.
/// Shared with `vscrub analyze`.
pub fn load_and_run(
    input: &Path,
    overrides: Option<&Path>,
) -> Result<(RecordSet, ProcessOutput), CliError> {
    let csv_data = venuescrub_io::csv::read_file_as_utf8(input)
        .map_err(|e| CliError::io(format!("{}: {}", input.display(), e)))?;
    let record_set = load_records(&csv_data).map_err(|e| CliError::parse(e.to_string()))?;
    let overrides = load_overrides(overrides)?;
    let output = run(&record_set, &overrides);
    Ok((record_set, output))
}

/// Output schema: `name` first, then every original input column. An input
/// that already carries a `name` column keeps it in place instead of
/// getting a duplicate.
fn output_headers(input_headers: &[String]) -> Vec<String> {
    let mut headers = Vec::with_capacity(input_headers.len() + 1);
    if !input_headers.iter().any(|h| h == "name") {
        headers.push("name".to_string());
    }
    headers.extend(input_headers.iter().cloned());
    headers
}

fn write_bucket(
    records: &[VenueRecord],
    headers: &[String],
    path: &Path,
) -> Result<(), CliError> {
    let mut table = Table::new(headers.to_vec());
    for record in records {
        table
            .rows
            .push(headers.iter().map(|h| record.get(h).to_string()).collect());
    }
    venuescrub_io::csv::export(&table, path)
        .map_err(|e| CliError::io(format!("{}: {}", path.display(), e)))
}

/// Human report: total and per-bucket counts, then the to-search listing
/// for manual review.
pub fn print_report(output: &ProcessOutput) {
    let s = &output.summary;
    println!(
        "{} rows — {} resolved, {} ignored (online), {} to search",
        s.total, s.resolved, s.ignored, s.needs_search
    );

    if !output.to_search.is_empty() {
        println!();
        println!("rows to search:");
        for line in search_listing(&output.to_search) {
            println!("  {line}");
        }
    }
}

pub fn print_json(output: &ProcessOutput) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(output)
        .map_err(|e| CliError::parse(format!("JSON serialization error: {e}")))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_headers_prepends_name() {
        let headers = vec!["id".to_string(), "address".to_string()];
        assert_eq!(output_headers(&headers), vec!["name", "id", "address"]);
    }

    #[test]
    fn output_headers_reuses_existing_name_column() {
        let headers = vec!["id".to_string(), "name".to_string(), "address".to_string()];
        assert_eq!(output_headers(&headers), vec!["id", "name", "address"]);
    }
}
