//! Output of a sorted table.

use serde::Serialize;
use tablesort::{Direction, Header, Row, SortKey, SortedTable, TableRow};

/// The sorted table as written by `--format json`.
#[derive(Debug, Serialize)]
pub struct Output<'a> {
    pub sort_order: &'a [SortKey],
    pub headers: &'a [Header],
    pub rows: &'a [Row],
}

impl<'a> From<&'a SortedTable<Row>> for Output<'a> {
    fn from(table: &'a SortedTable<Row>) -> Self {
        Self {
            sort_order: table.sort_config().sort_order(),
            headers: table.headers(),
            rows: table.rows(),
        }
    }
}

/// Header label with its sort marker, e.g. `Status ▼2`.
///
/// The number is the key's priority and is only shown for multi-key
/// orders.
pub fn header_label<R: TableRow>(table: &SortedTable<R>, column: usize) -> String {
    let config = table.sort_config();
    let label = table
        .headers()
        .get(column)
        .map(|h| h.label.as_str())
        .unwrap_or_default();

    let (Some(direction), Some(position)) =
        (config.direction_of(column), config.position_of(column))
    else {
        return label.to_string();
    };
    let arrow = match direction {
        Direction::Asc => '▲',
        Direction::Desc => '▼',
    };
    if config.sort_order().len() > 1 {
        format!("{label} {arrow}{}", position + 1)
    } else {
        format!("{label} {arrow}")
    }
}

pub fn render_table<R: TableRow>(table: &SortedTable<R>) -> comfy_table::Table {
    let columns = table.headers().len();

    let mut out = comfy_table::Table::new();
    out.load_preset(comfy_table::presets::UTF8_FULL)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    out.set_header((0..columns).map(|c| {
        let cell = comfy_table::Cell::new(header_label(table, c));
        if table.sort_config().direction_of(c).is_some() {
            cell.add_attribute(comfy_table::Attribute::Bold)
        } else {
            cell
        }
    }));
    for row in table.rows() {
        out.add_row((0..columns).map(|c| row.cell_text(c).unwrap_or_default()));
    }
    out
}
