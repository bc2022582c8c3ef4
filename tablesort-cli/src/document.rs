//! Table documents read from disk.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tablesort::{Header, Row, Table};

/// A table as described in a JSON document.
///
/// `sort_initial` may be given either as the raw declaration string or as
/// the array itself; headers may be bare labels.
#[derive(Debug, Deserialize)]
pub struct Document {
    #[serde(default)]
    sort_initial: Option<serde_json::Value>,
    headers: Vec<HeaderSpec>,
    #[serde(default)]
    rows: Vec<Row>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HeaderSpec {
    Label(String),
    Full(Header),
}

/// Rows to append: a bare array, or a document-like object with `rows`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RowsSpec {
    Rows(Vec<Row>),
    Wrapped { rows: Vec<Row> },
}

impl Document {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read document {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid document {}", path.display()))
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Convert into table markup for attaching.
    pub fn into_table(self) -> Table {
        let headers = self
            .headers
            .into_iter()
            .map(|h| match h {
                HeaderSpec::Label(label) => Header::new(label),
                HeaderSpec::Full(header) => header,
            })
            .collect();

        // The engine reads the declaration leniently, so a malformed
        // array is passed through and rejected there.
        let sort_initial = match self.sort_initial {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(raw)) => Some(raw),
            Some(value) => Some(value.to_string()),
        };

        Table {
            sort_initial,
            headers,
            rows: self.rows,
        }
    }
}

/// Load rows to append from a file.
pub fn load_rows(path: &Path) -> anyhow::Result<Vec<Row>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read rows {}", path.display()))?;
    parse_rows(&raw).with_context(|| format!("invalid rows {}", path.display()))
}

pub fn parse_rows(raw: &str) -> anyhow::Result<Vec<Row>> {
    Ok(match serde_json::from_str(raw)? {
        RowsSpec::Rows(rows) | RowsSpec::Wrapped { rows } => rows,
    })
}
