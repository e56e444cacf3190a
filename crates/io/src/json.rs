// JSON import/export

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde_json::{Map, Value};

use crate::Table;

/// Export a table as a pretty-printed JSON array of row objects.
///
/// One object per row, keys in header order (serde_json is built with
/// `preserve_order`, so insertion order survives serialization).
pub fn export(table: &Table, path: &Path) -> Result<(), String> {
    let file = File::create(path).map_err(|e| e.to_string())?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &to_objects(table)).map_err(|e| e.to_string())
}

/// Same as [`export`], but to a string (for stdout output).
pub fn export_to_string(table: &Table) -> Result<String, String> {
    serde_json::to_string_pretty(&to_objects(table)).map_err(|e| e.to_string())
}

fn to_objects(table: &Table) -> Vec<Map<String, Value>> {
    table
        .rows
        .iter()
        .map(|row| {
            table
                .headers
                .iter()
                .enumerate()
                .map(|(i, h)| {
                    let value = row.get(i).cloned().unwrap_or_default();
                    (h.clone(), Value::String(value))
                })
                .collect()
        })
        .collect()
}

/// Import a JSON array of row objects back into a table.
///
/// Column order is the key order of the first object; later objects may add
/// columns (appended after the first object's) or omit keys (read as empty).
/// Scalar values are stringified; nested arrays/objects are rejected.
pub fn import(path: &Path) -> Result<Table, String> {
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    import_from_string(&content)
}

pub fn import_from_string(content: &str) -> Result<Table, String> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| format!("JSON parse error: {e}"))?;

    let rows = match value {
        Value::Array(rows) => rows,
        _ => return Err("JSON must be an array of row objects".into()),
    };

    let mut headers: Vec<String> = Vec::new();
    let objects: Vec<&Map<String, Value>> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| match row {
            Value::Object(obj) => Ok(obj),
            _ => Err(format!("row {i}: expected object")),
        })
        .collect::<Result<_, _>>()?;

    for obj in &objects {
        for key in obj.keys() {
            if !headers.iter().any(|h| h == key) {
                headers.push(key.clone());
            }
        }
    }

    let mut table = Table::new(headers);
    for (i, obj) in objects.iter().enumerate() {
        let row = table
            .headers
            .iter()
            .map(|h| match obj.get(h) {
                None | Some(Value::Null) => Ok(String::new()),
                Some(Value::String(s)) => Ok(s.clone()),
                Some(Value::Number(n)) => Ok(n.to_string()),
                Some(Value::Bool(b)) => Ok(b.to_string()),
                Some(Value::Array(_)) | Some(Value::Object(_)) => {
                    Err(format!("non-scalar value at row {i}, key \"{h}\""))
                }
            })
            .collect::<Result<Vec<String>, String>>()?;
        table.rows.push(row);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn venue_table() -> Table {
        let mut table = Table::new(vec!["name".into(), "id".into(), "address".into()]);
        table.rows.push(vec![
            "Jamboree".into(),
            "1".into(),
            "6 St Chad's Pl, London".into(),
        ]);
        table
            .rows
            .push(vec!["Vaulty Towers".into(), "4".into(), "".into()]);
        table
    }

    #[test]
    fn test_export_preserves_field_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");

        export(&venue_table(), &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        // "name" must come before "id" in the serialized object, even though
        // alphabetical order would swap them.
        let name_pos = content.find("\"name\"").unwrap();
        let id_pos = content.find("\"id\"").unwrap();
        assert!(name_pos < id_pos, "field order not preserved:\n{content}");

        // Pretty-printed: indented, multi-line
        assert!(content.contains("\n  "));
    }

    #[test]
    fn test_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");

        let table = venue_table();
        export(&table, &path).unwrap();
        let back = import(&path).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_import_missing_keys_read_empty() {
        let table = import_from_string(
            r#"[
                {"id": "1", "address": "Somewhere"},
                {"id": "2"}
            ]"#,
        )
        .unwrap();
        assert_eq!(table.headers, vec!["id", "address"]);
        assert_eq!(table.get(1, "address"), "");
    }

    #[test]
    fn test_import_rejects_non_array() {
        assert!(import_from_string(r#"{"id": "1"}"#).is_err());
    }

    #[test]
    fn test_import_rejects_nested_values() {
        let err = import_from_string(r#"[{"id": ["1"]}]"#).unwrap_err();
        assert!(err.contains("non-scalar"));
    }
}
