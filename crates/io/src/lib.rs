// Tabular file I/O operations

pub mod csv;
pub mod json;

/// A rectangular table: a header row plus data rows in file order.
///
/// Rows may be shorter than the header (missing trailing fields read as
/// empty); export pads them so every output row has one field per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Index of `name` in the header row, if present.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell value at (row, column name), or `""` when absent.
    pub fn get(&self, row: usize, column: &str) -> &str {
        self.column(column)
            .and_then(|c| self.rows.get(row).and_then(|r| r.get(c)))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
