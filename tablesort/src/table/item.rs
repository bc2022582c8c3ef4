//! Table markup: headers, rows and cells as handed to the engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A header cell.
///
/// Headers carry the per-column declarations read at attach time and the
/// marker classes the engine maintains afterwards.
///
/// # Examples
///
/// ```
/// use tablesort::Header;
///
/// let headers = vec![
///     Header::new("Subject"),
///     Header::new("Check"),
///     Header::new("Actions").sort_disabled(true),
/// ];
/// assert!(headers[2].is_sort_disabled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Header {
    /// Header text
    pub label: String,
    /// Sorting disabled for this column
    #[serde(default)]
    pub sort_disabled: bool,
    /// Marker classes, in the order they were added
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    classes: Vec<String>,
}

impl Header {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sort_disabled: false,
            classes: Vec::new(),
        }
    }

    /// Declare whether sorting is disabled for this column.
    pub fn sort_disabled(mut self, disabled: bool) -> Self {
        self.sort_disabled = disabled;
        self
    }

    pub fn is_sort_disabled(&self) -> bool {
        self.sort_disabled
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub(crate) fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub(crate) fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub(crate) fn clear_classes(&mut self) {
        self.classes.clear();
    }
}

/// A body cell: displayed text plus an optional override sort value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "CellRepr")]
pub struct Cell {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_value: Option<String>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sort_value: None,
        }
    }

    /// Sort this cell by `value` instead of its displayed text.
    pub fn with_sort_value(mut self, value: impl Into<String>) -> Self {
        self.sort_value = Some(value.into());
        self
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::new(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::new(text)
    }
}

/// Accepts a bare string as shorthand for a cell without override.
#[derive(Deserialize)]
#[serde(untagged)]
enum CellRepr {
    Text(String),
    Full {
        #[serde(default)]
        text: String,
        #[serde(default)]
        sort_value: Option<String>,
    },
}

impl From<CellRepr> for Cell {
    fn from(repr: CellRepr) -> Self {
        match repr {
            CellRepr::Text(text) => Cell::new(text),
            CellRepr::Full { text, sort_value } => Cell { text, sort_value },
        }
    }
}

/// A body row.
///
/// Rows are moved as whole values when the table re-sorts, so `data`
/// travels with its row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RowRepr")]
pub struct Row {
    pub cells: Vec<Cell>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, String>,
}

impl Row {
    pub fn new(cells: impl IntoIterator<Item = impl Into<Cell>>) -> Self {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            data: BTreeMap::new(),
        }
    }

    /// Attach a caller payload to the row.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }
}

/// Accepts a bare cell array as shorthand for a row without data.
#[derive(Deserialize)]
#[serde(untagged)]
enum RowRepr {
    Cells(Vec<Cell>),
    Full {
        cells: Vec<Cell>,
        #[serde(default)]
        data: BTreeMap<String, String>,
    },
}

impl From<RowRepr> for Row {
    fn from(repr: RowRepr) -> Self {
        match repr {
            RowRepr::Cells(cells) => Row {
                cells,
                data: BTreeMap::new(),
            },
            RowRepr::Full { cells, data } => Row { cells, data },
        }
    }
}

/// Trait for anything the engine can order as a table row.
///
/// Implement this for your own row type to sort it without converting
/// to [`Row`].
///
/// # Example
///
/// ```
/// use tablesort::TableRow;
///
/// struct CheckState {
///     subject: String,
///     status: u8,
/// }
///
/// impl TableRow for CheckState {
///     fn cell_text(&self, column: usize) -> Option<&str> {
///         match column {
///             0 => Some(self.subject.as_str()),
///             1 => Some(if self.status == 3 { "Critical" } else { "Warning" }),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait TableRow {
    /// Displayed text of a cell, `None` past the last cell.
    fn cell_text(&self, column: usize) -> Option<&str>;

    /// Explicit sort value of a cell, if it declares one.
    fn cell_sort_value(&self, _column: usize) -> Option<&str> {
        None
    }

    /// The value a cell is sorted by: its override if declared, else its
    /// displayed text.
    fn sort_source(&self, column: usize) -> Option<&str> {
        self.cell_sort_value(column).or_else(|| self.cell_text(column))
    }
}

impl TableRow for Row {
    fn cell_text(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(|c| c.text.as_str())
    }

    fn cell_sort_value(&self, column: usize) -> Option<&str> {
        self.cells.get(column).and_then(|c| c.sort_value.as_deref())
    }
}

/// An unattached table.
///
/// `sort_initial` holds the raw initial-order declaration, a JSON array of
/// `{"c": column, "o": ±1}` objects.
///
/// # Example
///
/// ```
/// use tablesort::{Header, Row, Table};
///
/// let table = Table::new(vec![Header::new("Subject"), Header::new("Status")])
///     .with_sort_initial(r#"[{"c":1,"o":-1}]"#)
///     .with_rows(vec![
///         Row::new(["web-01", "Warning"]),
///         Row::new(["db-02", "Critical"]),
///     ]);
/// assert_eq!(table.rows.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table<R = Row> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_initial: Option<String>,
    pub headers: Vec<Header>,
    #[serde(default)]
    pub rows: Vec<R>,
}

impl<R> Table<R> {
    pub fn new(headers: Vec<Header>) -> Self {
        Self {
            sort_initial: None,
            headers,
            rows: Vec::new(),
        }
    }

    pub fn with_rows(mut self, rows: Vec<R>) -> Self {
        self.rows = rows;
        self
    }

    /// Declare the initial sort order as raw JSON.
    pub fn with_sort_initial(mut self, declaration: impl Into<String>) -> Self {
        self.sort_initial = Some(declaration.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_source_prefers_override() {
        let row = Row::new([Cell::new("Two").with_sort_value("2"), Cell::new("x")]);
        assert_eq!(row.sort_source(0), Some("2"));
        assert_eq!(row.sort_source(1), Some("x"));
        assert_eq!(row.sort_source(2), None);
    }

    #[test]
    fn test_empty_override_is_still_an_override() {
        let row = Row::new([Cell::new("shown").with_sort_value("")]);
        assert_eq!(row.sort_source(0), Some(""));
    }

    #[test]
    fn test_row_shorthand_deserializes() {
        let row: Row =
            serde_json::from_str(r#"["web-01", {"text": "Two", "sort_value": "2"}]"#).unwrap();
        assert_eq!(row.cells[0], Cell::new("web-01"));
        assert_eq!(row.cells[1], Cell::new("Two").with_sort_value("2"));
        assert!(row.data.is_empty());

        let row: Row =
            serde_json::from_str(r#"{"cells": ["a"], "data": {"id": "42"}}"#).unwrap();
        assert_eq!(row.data("id"), Some("42"));
    }

    #[test]
    fn test_header_classes_are_unique() {
        let mut header = Header::new("Name");
        header.add_class("sortHeader");
        header.add_class("sortHeader");
        assert_eq!(header.classes(), &["sortHeader".to_string()]);
        header.remove_class("sortHeader");
        assert!(header.classes().is_empty());
    }
}
