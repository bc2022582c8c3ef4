//! Message handling for attached tables.

use crate::event::{EventResult, Modifiers, TableMessage};

use super::item::TableRow;
use super::state::SortedTable;

impl<R: TableRow> SortedTable<R> {
    /// Handle a header click.
    ///
    /// Disabled and out-of-range columns are ignored. Otherwise the sort
    /// order is updated, header markers are recomputed and the rows are
    /// re-sorted.
    pub fn header_click(&mut self, column: usize, modifiers: Modifiers) -> EventResult {
        let result = self.config.click(column, modifiers);
        if !result.is_handled() {
            log::trace!("[tablesort] {} ignored click on column {}", self.id(), column);
            return result;
        }

        log::debug!(
            "[tablesort] {} sort order now {:?}",
            self.id(),
            self.config.sort_order()
        );
        self.update_headers();
        self.sort();
        result
    }

    /// Re-apply the current order after rows changed out-of-band.
    pub fn update(&mut self) {
        log::trace!("[tablesort] {} update ({} rows)", self.id(), self.rows.len());
        self.sort();
    }

    /// Handle a message addressed to this table.
    ///
    /// The caller is responsible for routing; the message's table id is
    /// not checked here.
    pub fn handle(&mut self, message: TableMessage) -> EventResult {
        match message {
            TableMessage::HeaderClick {
                column, modifiers, ..
            } => self.header_click(column, modifiers),
            TableMessage::Update { .. } => {
                self.update();
                EventResult::Consumed
            }
        }
    }
}
