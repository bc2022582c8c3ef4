//! Attached table state.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::EngineConfig;
use crate::declare::{column_configs, parse_sort_initial};
use crate::order::{Direction, SortConfig};
use crate::sort::sort_rows;

use super::item::{Header, Table, TableRow};

/// Unique identifier for an attached table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// A table with the sort engine attached.
///
/// `SortedTable` owns the table's headers, rows and [`SortConfig`]. It
/// keeps the rows ordered by the config and the header marker classes in
/// step with it:
/// - every sortable header carries the sortable class
/// - headers in the sort order carry the ascending or descending class
/// - disabled headers carry none of them
#[derive(Debug)]
pub struct SortedTable<R: TableRow> {
    /// Unique identifier.
    id: TableId,
    /// Class names used for header markers.
    pub(super) engine: EngineConfig,
    /// Header cells, index-aligned with `config.columns()`.
    pub(super) headers: Vec<Header>,
    /// Body rows in their current order.
    pub(super) rows: Vec<R>,
    /// Sort state.
    pub(super) config: SortConfig,
}

impl<R: TableRow> SortedTable<R> {
    /// Attach the engine to a table.
    ///
    /// Reads the initial sort declaration and the per-header disabled
    /// flags, marks sortable headers, and performs the initial sort.
    /// Classes the headers already carry are dropped first, so markers
    /// left by an earlier attach never survive.
    pub fn attach(table: Table<R>, engine: &EngineConfig) -> Self {
        let Table {
            sort_initial,
            mut headers,
            rows,
        } = table;

        let columns = column_configs(&headers);
        let initial = parse_sort_initial(sort_initial.as_deref());
        let config = SortConfig::new(columns, initial);

        for (column, header) in headers.iter_mut().enumerate() {
            header.clear_classes();
            if !config.is_disabled(column) {
                header.add_class(&engine.sortable_class);
            }
        }

        let mut attached = Self {
            id: TableId::new(),
            engine: engine.clone(),
            headers,
            rows,
            config,
        };
        log::debug!(
            "[tablesort] attached {} ({} columns, {} rows, order {:?})",
            attached.id,
            attached.headers.len(),
            attached.rows.len(),
            attached.config.sort_order()
        );

        attached.update_headers();
        attached.sort();
        attached
    }

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// The current sort state.
    pub fn sort_config(&self) -> &SortConfig {
        &self.config
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    /// Marker classes currently on a header.
    pub fn header_classes(&self, column: usize) -> &[String] {
        self.headers
            .get(column)
            .map(|h| h.classes())
            .unwrap_or_default()
    }

    /// Rows in their current order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Mutable access to the rows.
    ///
    /// Changes made here are not re-sorted until [`update`](Self::update)
    /// is called.
    pub fn rows_mut(&mut self) -> &mut Vec<R> {
        &mut self.rows
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Append a row and re-apply the current order.
    pub fn push_row(&mut self, row: R) {
        self.rows.push(row);
        self.update();
    }

    /// Append rows and re-apply the current order.
    pub fn extend_rows(&mut self, rows: impl IntoIterator<Item = R>) {
        self.rows.extend(rows);
        self.update();
    }

    /// Detach the engine and hand the markup back.
    ///
    /// Rows stay in their current order and the current sort order becomes
    /// the initial declaration, so attaching again restores it.
    pub fn into_table(self) -> Table<R> {
        let sort_initial = if self.config.sort_order().is_empty() {
            None
        } else {
            serde_json::to_string(self.config.sort_order()).ok()
        };
        Table {
            sort_initial,
            headers: self.headers,
            rows: self.rows,
        }
    }

    /// Reorder the rows by the current sort order.
    pub(super) fn sort(&mut self) {
        sort_rows(&mut self.rows, self.config.sort_order());
    }

    /// Recompute direction markers from the current sort order.
    pub(super) fn update_headers(&mut self) {
        let EngineConfig {
            ascending_class,
            descending_class,
            ..
        } = &self.engine;

        for header in &mut self.headers {
            header.remove_class(ascending_class);
            header.remove_class(descending_class);
        }
        for key in self.config.sort_order() {
            if let Some(header) = self.headers.get_mut(key.column) {
                header.add_class(match key.direction {
                    Direction::Asc => ascending_class,
                    Direction::Desc => descending_class,
                });
            }
        }
    }
}
