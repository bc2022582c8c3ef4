//! Attach-time declarations read from table markup.

use crate::order::{ColumnConfig, SortKey};
use crate::table::Header;

/// Parse a table's initial sort declaration.
///
/// The declaration is a JSON array of `{"c": column, "o": ±1}` objects;
/// `o` defaults to ascending. A missing or malformed declaration yields an
/// empty order, leaving rows in insertion order.
///
/// # Example
///
/// ```
/// use tablesort::{SortKey, parse_sort_initial};
///
/// let keys = parse_sort_initial(Some(r#"[{"c":0,"o":1},{"c":5,"o":-1}]"#));
/// assert_eq!(keys, vec![SortKey::asc(0), SortKey::desc(5)]);
///
/// assert!(parse_sort_initial(Some("not json")).is_empty());
/// assert!(parse_sort_initial(None).is_empty());
/// ```
pub fn parse_sort_initial(declaration: Option<&str>) -> Vec<SortKey> {
    let Some(raw) = declaration.map(str::trim).filter(|s| !s.is_empty()) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<SortKey>>(raw) {
        Ok(keys) => keys,
        Err(e) => {
            log::warn!(
                "[tablesort] ignoring malformed initial sort declaration {:?}: {}",
                raw,
                e
            );
            Vec::new()
        }
    }
}

/// Read per-column settings from the header cells, left to right.
pub fn column_configs(headers: &[Header]) -> Vec<ColumnConfig> {
    headers
        .iter()
        .map(|h| ColumnConfig {
            disabled: h.is_sort_disabled(),
        })
        .collect()
}
