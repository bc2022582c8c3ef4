//! Input messages delivered to attached tables.

use crate::table::TableId;

/// Modifier keys held during a header click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Shift key held
    pub shift: bool,
    /// Control key held
    pub ctrl: bool,
    /// Alt key held
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    /// Whether the click should extend the sort order instead of replacing it.
    ///
    /// Shift and Ctrl both mean "add a tiebreaker"; Alt is ignored.
    pub fn multi_key(&self) -> bool {
        self.shift || self.ctrl
    }
}

/// A message addressed to one attached table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMessage {
    /// A header cell was clicked.
    HeaderClick {
        table: TableId,
        column: usize,
        modifiers: Modifiers,
    },
    /// Rows were changed out-of-band; re-apply the current order.
    Update { table: TableId },
}

impl TableMessage {
    pub fn header_click(table: TableId, column: usize, modifiers: Modifiers) -> Self {
        Self::HeaderClick {
            table,
            column,
            modifiers,
        }
    }

    pub fn update(table: TableId) -> Self {
        Self::Update { table }
    }

    /// The table this message is addressed to.
    pub fn table(&self) -> TableId {
        match self {
            Self::HeaderClick { table, .. } | Self::Update { table } => *table,
        }
    }
}

/// Result of handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Message was ignored (disabled or unknown column).
    Ignored,
    /// Message was consumed and the table was re-sorted.
    Consumed,
}

impl EventResult {
    /// Check if the message was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}
