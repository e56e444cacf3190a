// CSV import/export

use std::io::Read;
use std::path::Path;

use crate::Table;

pub fn import(path: &Path) -> Result<Table, String> {
    let content = read_file_as_utf8(path)?;
    let delimiter = sniff_delimiter(&content);
    import_from_string(&content, delimiter)
}

pub fn import_with_delimiter(path: &Path, delimiter: u8) -> Result<Table, String> {
    let content = read_file_as_utf8(path)?;
    import_from_string(&content, delimiter)
}

/// Detect the most likely field delimiter by checking consistency across the
/// first few lines.
///
/// For each candidate (tab, semicolon, comma, pipe), count fields per line.
/// The delimiter that produces the most consistent field count (>1 field)
/// wins.
pub fn sniff_delimiter(content: &str) -> u8 {
    let candidates: &[u8] = &[b'\t', b';', b',', b'|'];
    let sample_lines: Vec<&str> = content.lines().take(10).collect();

    if sample_lines.is_empty() {
        return b',';
    }

    let mut best = b',';
    let mut best_score = 0u64;

    for &delim in candidates {
        let counts: Vec<usize> = sample_lines
            .iter()
            .map(|line| {
                csv::ReaderBuilder::new()
                    .delimiter(delim)
                    .has_headers(false)
                    .flexible(true)
                    .from_reader(line.as_bytes())
                    .records()
                    .next()
                    .and_then(|r| r.ok())
                    .map(|r| r.len())
                    .unwrap_or(1)
            })
            .collect();

        // Must produce >1 field on the first line to be viable
        if counts.first().copied().unwrap_or(0) <= 1 {
            continue;
        }

        // Score: (number of lines with same field count as line 1) * field_count
        // Higher field count breaks ties — more columns = more likely real delimiter
        let target = counts[0];
        let consistent = counts.iter().filter(|&&c| c == target).count() as u64;
        let score = consistent * target as u64;

        if score > best_score {
            best_score = score;
            best = delim;
        }
    }

    best
}

/// Read file and convert to UTF-8 if needed (handles Windows-1252, Latin-1, etc.)
pub fn read_file_as_utf8(path: &Path) -> Result<String, String> {
    let mut file = std::fs::File::open(path).map_err(|e| e.to_string())?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|e| e.to_string())?;

    // Try UTF-8 first; on failure, recover the buffer from the error
    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            // Fall back to Windows-1252 (common for Excel-exported CSVs)
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

pub fn import_from_string(content: &str, delimiter: u8) -> Result<Table, String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| e.to_string())?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut table = Table::new(headers);
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| format!("line {}: {}", row_idx + 2, e))?;
        table
            .rows
            .push(record.iter().map(|f| f.to_string()).collect());
    }

    Ok(table)
}

pub fn export(table: &Table, path: &Path) -> Result<(), String> {
    export_with_delimiter(table, path, b',')
}

/// Same as [`export`], but to a string (for stdout output).
pub fn export_to_string(table: &Table, delimiter: u8) -> Result<String, String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    write_records(table, &mut writer)?;
    let bytes = writer.into_inner().map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|e| e.to_string())
}

pub fn export_with_delimiter(table: &Table, path: &Path, delimiter: u8) -> Result<(), String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|e| e.to_string())?;
    write_records(table, &mut writer)?;
    writer.flush().map_err(|e| e.to_string())?;
    Ok(())
}

fn write_records<W: std::io::Write>(
    table: &Table,
    writer: &mut csv::Writer<W>,
) -> Result<(), String> {
    writer
        .write_record(&table.headers)
        .map_err(|e| e.to_string())?;

    let width = table.headers.len();
    for row in &table.rows {
        // Pad short rows so every record matches the header width.
        let mut record: Vec<&str> = row.iter().map(String::as_str).collect();
        record.resize(width, "");
        writer.write_record(&record).map_err(|e| e.to_string())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_import_basic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.csv");
        fs::write(&path, "id,address,postcode\n1,Vaulty Towers,SE1 8LN\n").unwrap();

        let table = import(&path).unwrap();
        assert_eq!(table.headers, vec!["id", "address", "postcode"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0, "address"), "Vaulty Towers");
        assert_eq!(table.get(0, "missing"), "");
    }

    #[test]
    fn test_import_quoted_commas() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.csv");
        fs::write(
            &path,
            "id,address\n1,\"Jamboree, 6 St Chad's Pl, London\"\n",
        )
        .unwrap();

        let table = import(&path).unwrap();
        assert_eq!(table.get(0, "address"), "Jamboree, 6 St Chad's Pl, London");
    }

    #[test]
    fn test_sniff_semicolon_delimiter() {
        let content = "Name;Age;City\nAlice;30;Paris\nBob;25;London\n";
        assert_eq!(sniff_delimiter(content), b';');
    }

    #[test]
    fn test_sniff_comma_delimiter() {
        let content = "Name,Age,City\nAlice,30,Paris\nBob,25,London\n";
        assert_eq!(sniff_delimiter(content), b',');
    }

    #[test]
    fn test_sniff_tab_delimiter() {
        let content = "Name\tAge\tCity\nAlice\t30\tParis\nBob\t25\tLondon\n";
        assert_eq!(sniff_delimiter(content), b'\t');
    }

    #[test]
    fn test_sniff_semicolon_with_commas_in_values() {
        // Semicolon delimiter but commas appear inside quoted fields
        let content = "Name;Address;City\n\"Doe, Jane\";\"123 Main St, Apt 4\";Paris\nBob;\"456 Elm\";London\n";
        assert_eq!(sniff_delimiter(content), b';');
    }

    #[test]
    fn test_windows_1252_fallback() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin.csv");
        // "Café" with 0xE9 (é in Windows-1252, invalid as bare UTF-8)
        fs::write(&path, b"id,address\n1,Caf\xE9 Oto\n").unwrap();

        let table = import(&path).unwrap();
        assert_eq!(table.get(0, "address"), "Café Oto");
    }

    #[test]
    fn test_export_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut table = Table::new(vec!["name".into(), "address".into()]);
        table
            .rows
            .push(vec!["Jamboree".into(), "6 St Chad's Pl, London".into()]);
        table.rows.push(vec!["Vaulty Towers".into(), "".into()]);

        export(&table, &path).unwrap();
        let back = import(&path).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_export_pads_short_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut table = Table::new(vec!["a".into(), "b".into(), "c".into()]);
        table.rows.push(vec!["1".into()]);

        export(&table, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "a,b,c\n1,,\n");
    }

    #[test]
    fn test_export_to_string() {
        let mut table = Table::new(vec!["name".into(), "address".into()]);
        table
            .rows
            .push(vec!["Jamboree".into(), "6 St Chad's Pl, London".into()]);

        let out = export_to_string(&table, b',').unwrap();
        assert_eq!(out, "name,address\nJamboree,\"6 St Chad's Pl, London\"\n");
    }

    #[test]
    fn test_export_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        let table = Table::new(vec!["name".into(), "id".into()]);
        export(&table, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "name,id\n");
    }
}
