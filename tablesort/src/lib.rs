//! Click-driven, multi-key table sorting.
//!
//! A table is attached once; after that, header clicks (optionally with
//! Shift/Ctrl to add tiebreakers) reorder its rows, and an update message
//! re-applies the current order after the caller changes the rows.

pub mod config;
pub mod declare;
pub mod error;
pub mod event;
pub mod order;
pub mod registry;
pub mod sort;
pub mod table;
pub mod value;

pub use config::EngineConfig;
pub use declare::{column_configs, parse_sort_initial};
pub use error::{ConfigError, RegistryError};
pub use event::{EventResult, Modifiers, TableMessage};
pub use order::{ColumnConfig, Direction, SortConfig, SortKey};
pub use registry::TableRegistry;
pub use sort::{compare_rows, sort_rows};
pub use table::{Cell, Header, Row, SortedTable, Table, TableId, TableRow};
pub use value::SortValue;

pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::event::{EventResult, Modifiers, TableMessage};
    pub use crate::order::{Direction, SortKey};
    pub use crate::registry::TableRegistry;
    pub use crate::table::{Cell, Header, Row, SortedTable, Table, TableId, TableRow};
}
