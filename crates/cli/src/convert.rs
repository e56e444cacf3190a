//! `vscrub convert` — convert a tabular file between CSV and JSON.
//!
//! CSV rows become a JSON array of row objects, one object per row with
//! keys in column order; the reverse direction takes column order from the
//! objects' key order. Field values and row order survive a round trip.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use venuescrub_io::{csv, json, Table};

use crate::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Json,
}

pub fn cmd_convert(
    input: PathBuf,
    from: Option<Format>,
    to: Format,
    output: Option<PathBuf>,
    delimiter: Option<char>,
) -> Result<(), CliError> {
    let input_format = match from {
        Some(f) => f, // --from overrides extension
        None => infer_format(&input)?,
    };

    let table = read_table(&input, input_format, delimiter)?;
    let out_delimiter = delimiter.map(|c| c as u8).unwrap_or(b',');

    match output {
        Some(path) => match to {
            Format::Csv => csv::export_with_delimiter(&table, &path, out_delimiter)
                .map_err(|e| CliError::io(format!("{}: {}", path.display(), e)))?,
            Format::Json => json::export(&table, &path)
                .map_err(|e| CliError::io(format!("{}: {}", path.display(), e)))?,
        },
        None => {
            let text = match to {
                Format::Csv => csv::export_to_string(&table, out_delimiter),
                Format::Json => json::export_to_string(&table),
            }
            .map_err(CliError::io)?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", text.trim_end_matches('\n'))
                .map_err(|e| CliError::io(e.to_string()))?;
        }
    }

    Ok(())
}

fn infer_format(path: &Path) -> Result<Format, CliError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match ext.as_deref() {
        Some("csv") | Some("tsv") => Ok(Format::Csv),
        Some("json") => Ok(Format::Json),
        _ => Err(CliError::args(format!(
            "cannot infer format from extension {:?}",
            ext.as_deref().unwrap_or("(none)")
        ))
        .with_hint("use --from with one of: csv, json")),
    }
}

fn read_table(
    path: &Path,
    format: Format,
    delimiter: Option<char>,
) -> Result<Table, CliError> {
    match format {
        Format::Csv => {
            let result = match delimiter {
                Some(c) => csv::import_with_delimiter(path, c as u8),
                None => csv::import(path), // sniffed
            };
            result.map_err(|e| CliError::parse(format!("{}: {}", path.display(), e)))
        }
        Format::Json => {
            json::import(path).map_err(|e| CliError::parse(format!("{}: {}", path.display(), e)))
        }
    }
}
