//! Table component - rows and headers with the sort engine attached.
//!
//! The table component provides:
//! - Markup types ([`Table`], [`Header`], [`Row`], [`Cell`]) and the
//!   [`TableRow`] trait for custom row types
//! - [`SortedTable`], which owns an attached table's rows and sort state
//! - Click and update handling with header marker maintenance
//!
//! # Example
//!
//! ```
//! use tablesort::prelude::*;
//!
//! let table = Table::new(vec![
//!     Header::new("Subject"),
//!     Header::new("Failing since"),
//!     Header::new("Actions").sort_disabled(true),
//! ])
//! .with_rows(vec![
//!     Row::new([Cell::new("web-01"), Cell::new("yesterday").with_sort_value("2"), Cell::new("")]),
//!     Row::new([Cell::new("db-02"), Cell::new("last week").with_sort_value("1"), Cell::new("")]),
//! ]);
//!
//! let mut sorted = SortedTable::attach(table, &EngineConfig::default());
//! sorted.header_click(1, Modifiers::NONE);
//! assert_eq!(sorted.rows()[0].cells[0].text, "db-02");
//! assert!(sorted.headers()[1].has_class("sortHeaderAsc"));
//! ```

mod events;
mod item;
mod state;

pub use item::{Cell, Header, Row, Table, TableRow};
pub use state::{SortedTable, TableId};
