//! Registry owning every attached table.

use std::collections::HashMap;

use crate::config::EngineConfig;
use crate::error::RegistryError;
use crate::event::{EventResult, TableMessage};
use crate::table::{Row, SortedTable, Table, TableId, TableRow};

/// Registry managing all attached tables.
///
/// Each table owns its own sort state; messages are routed by
/// [`TableId`] and never touch another table. Dispatch takes `&mut self`,
/// so a message runs to completion before the next one is handled.
pub struct TableRegistry<R: TableRow = Row> {
    /// Class names handed to every table attached through this registry.
    engine: EngineConfig,

    /// All attached tables.
    tables: HashMap<TableId, SortedTable<R>>,

    /// Attach order, oldest first.
    order: Vec<TableId>,
}

impl<R: TableRow> TableRegistry<R> {
    /// Create a new empty registry with default class names.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create a new empty registry with custom class names.
    pub fn with_config(engine: EngineConfig) -> Self {
        Self {
            engine,
            tables: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Class names used for tables attached from now on.
    pub fn config(&self) -> &EngineConfig {
        &self.engine
    }

    /// Attach the engine to a table.
    ///
    /// Returns the id to address messages to.
    pub fn attach(&mut self, table: Table<R>) -> TableId {
        let attached = SortedTable::attach(table, &self.engine);
        let id = attached.id();
        self.tables.insert(id, attached);
        self.order.push(id);
        id
    }

    /// Detach a table, returning its markup with rows in current order.
    pub fn detach(&mut self, id: TableId) -> Option<Table<R>> {
        let attached = self.tables.remove(&id)?;
        self.order.retain(|&i| i != id);
        log::debug!("[tablesort] detached {}", id);
        Some(attached.into_table())
    }

    /// Deliver a message to the table it is addressed to.
    pub fn dispatch(&mut self, message: TableMessage) -> Result<EventResult, RegistryError> {
        let id = message.table();
        let Some(table) = self.tables.get_mut(&id) else {
            log::warn!("[tablesort] dropping {:?}: table not attached", message);
            return Err(RegistryError::UnknownTable(id));
        };
        Ok(table.handle(message))
    }

    /// Get a reference to a table.
    pub fn get(&self, id: TableId) -> Option<&SortedTable<R>> {
        self.tables.get(&id)
    }

    /// Get a mutable reference to a table.
    pub fn get_mut(&mut self, id: TableId) -> Option<&mut SortedTable<R>> {
        self.tables.get_mut(&id)
    }

    pub fn contains(&self, id: TableId) -> bool {
        self.tables.contains_key(&id)
    }

    /// Ids of all attached tables, in attach order.
    pub fn ids(&self) -> &[TableId] {
        &self.order
    }

    /// Get total number of attached tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check if there are no attached tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl<R: TableRow> Default for TableRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}
