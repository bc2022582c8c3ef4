//! Sort keys and the per-table sort configuration.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::event::{EventResult, Modifiers};

/// Sort direction for one key.
///
/// On the wire a direction is the sign `+1` (ascending) or `-1`
/// (descending); any non-negative value reads as ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// The opposite direction.
    #[inline]
    pub fn toggle(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    /// `+1` for ascending, `-1` for descending.
    pub fn sign(self) -> i64 {
        match self {
            Direction::Asc => 1,
            Direction::Desc => -1,
        }
    }

    /// Apply this direction to an ascending comparison result.
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

impl From<i64> for Direction {
    fn from(sign: i64) -> Self {
        if sign < 0 {
            Direction::Desc
        } else {
            Direction::Asc
        }
    }
}

impl From<Direction> for i64 {
    fn from(direction: Direction) -> Self {
        direction.sign()
    }
}

/// One entry of a table's sort order.
///
/// Serialized as `{"c": <column>, "o": <±1>}`, the same shape tables
/// declare their initial order in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortKey {
    #[serde(rename = "c")]
    pub column: usize,
    #[serde(rename = "o", default)]
    pub direction: Direction,
}

impl SortKey {
    pub fn new(column: usize, direction: Direction) -> Self {
        Self { column, direction }
    }

    pub fn asc(column: usize) -> Self {
        Self::new(column, Direction::Asc)
    }

    pub fn desc(column: usize) -> Self {
        Self::new(column, Direction::Desc)
    }
}

/// Per-column settings read from the header at attach time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnConfig {
    /// Header declared sorting disabled; clicks on it are ignored.
    pub disabled: bool,
}

/// Sort state owned by one attached table.
///
/// `columns` is index-aligned with the table's header cells and never
/// changes after construction. `sort_order` holds each column at most once
/// and never holds a disabled or out-of-range column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortConfig {
    sort_order: Vec<SortKey>,
    columns: Vec<ColumnConfig>,
}

impl SortConfig {
    /// Build a config from per-column settings and a declared order.
    ///
    /// Keys naming a disabled column, a column past the last header, or a
    /// column that already appeared earlier are dropped.
    pub fn new(columns: Vec<ColumnConfig>, initial: impl IntoIterator<Item = SortKey>) -> Self {
        let mut config = Self {
            sort_order: Vec::new(),
            columns,
        };
        for key in initial {
            if !config.is_sortable(key.column) {
                log::debug!(
                    "[tablesort] dropping initial key for column {} (disabled or out of range)",
                    key.column
                );
                continue;
            }
            if config.position_of(key.column).is_some() {
                log::debug!(
                    "[tablesort] dropping duplicate initial key for column {}",
                    key.column
                );
                continue;
            }
            config.sort_order.push(key);
        }
        config
    }

    /// The active sort keys, primary first.
    pub fn sort_order(&self) -> &[SortKey] {
        &self.sort_order
    }

    /// Per-column settings, index-aligned with the headers.
    pub fn columns(&self) -> &[ColumnConfig] {
        &self.columns
    }

    /// Whether the column is disabled. Out-of-range columns are not.
    pub fn is_disabled(&self, column: usize) -> bool {
        self.columns.get(column).is_some_and(|c| c.disabled)
    }

    /// Whether clicks on this column can change the order.
    pub fn is_sortable(&self, column: usize) -> bool {
        self.columns.get(column).is_some_and(|c| !c.disabled)
    }

    /// Direction of the column's key, if the column is in the order.
    pub fn direction_of(&self, column: usize) -> Option<Direction> {
        self.sort_order
            .iter()
            .find(|k| k.column == column)
            .map(|k| k.direction)
    }

    /// Zero-based priority of the column's key, if present.
    pub fn position_of(&self, column: usize) -> Option<usize> {
        self.sort_order.iter().position(|k| k.column == column)
    }

    /// Apply a header click to the sort order.
    ///
    /// - Shift/Ctrl: flip the column's key if present, else append it
    ///   ascending.
    /// - Plain click on the only active key: flip it.
    /// - Any other plain click: the column becomes the sole ascending key.
    ///
    /// Disabled and out-of-range columns are ignored.
    pub fn click(&mut self, column: usize, modifiers: Modifiers) -> EventResult {
        if !self.is_sortable(column) {
            return EventResult::Ignored;
        }

        if modifiers.multi_key() {
            match self.sort_order.iter_mut().find(|k| k.column == column) {
                Some(key) => key.direction = key.direction.toggle(),
                None => self.sort_order.push(SortKey::asc(column)),
            }
        } else if self.sort_order.len() == 1 && self.sort_order[0].column == column {
            let only = &mut self.sort_order[0];
            only.direction = only.direction.toggle();
        } else {
            self.sort_order = vec![SortKey::asc(column)];
        }

        log::trace!(
            "[tablesort] click on column {} ({:?}) -> {:?}",
            column,
            modifiers,
            self.sort_order
        );
        EventResult::Consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(columns: usize, initial: Vec<SortKey>) -> SortConfig {
        SortConfig::new(vec![ColumnConfig::default(); columns], initial)
    }

    #[test]
    fn test_direction_wire_form() {
        let key: SortKey = serde_json::from_str(r#"{"c":3,"o":-1}"#).unwrap();
        assert_eq!(key, SortKey::desc(3));

        let key: SortKey = serde_json::from_str(r#"{"c":1}"#).unwrap();
        assert_eq!(key, SortKey::asc(1));

        assert_eq!(
            serde_json::to_string(&SortKey::desc(2)).unwrap(),
            r#"{"c":2,"o":-1}"#
        );
    }

    #[test]
    fn test_initial_order_drops_duplicates_and_disabled() {
        let columns = vec![
            ColumnConfig::default(),
            ColumnConfig { disabled: true },
            ColumnConfig::default(),
        ];
        let config = SortConfig::new(
            columns,
            vec![
                SortKey::desc(2),
                SortKey::asc(1),
                SortKey::asc(2),
                SortKey::asc(7),
                SortKey::asc(0),
            ],
        );
        assert_eq!(config.sort_order(), &[SortKey::desc(2), SortKey::asc(0)]);
    }

    #[test]
    fn test_alt_alone_is_a_plain_click() {
        let mut config = config(3, vec![SortKey::asc(0), SortKey::asc(1)]);
        config.click(2, Modifiers::alt());
        assert_eq!(config.sort_order(), &[SortKey::asc(2)]);
    }

    #[test]
    fn test_alt_with_shift_acts_as_shift() {
        let mut config = config(3, vec![SortKey::asc(0)]);
        let alt_shift = Modifiers {
            alt: true,
            shift: true,
            ..Default::default()
        };
        config.click(1, alt_shift);
        assert_eq!(config.sort_order(), &[SortKey::asc(0), SortKey::asc(1)]);
        config.click(1, alt_shift);
        assert_eq!(config.sort_order(), &[SortKey::asc(0), SortKey::desc(1)]);
    }

    #[test]
    fn test_is_disabled_only_for_declared_columns() {
        let config = SortConfig::new(
            vec![ColumnConfig::default(), ColumnConfig { disabled: true }],
            Vec::new(),
        );
        assert!(!config.is_disabled(0));
        assert!(config.is_disabled(1));
        assert!(!config.is_disabled(5));
        assert!(!config.is_sortable(5));
    }

    #[test]
    fn test_ctrl_matches_shift() {
        let mut config = config(3, vec![SortKey::asc(0)]);
        config.click(1, Modifiers::ctrl());
        config.click(0, Modifiers::ctrl());
        assert_eq!(config.sort_order(), &[SortKey::desc(0), SortKey::asc(1)]);
    }

    #[test]
    fn test_click_out_of_range_is_ignored() {
        let mut config = config(2, vec![SortKey::asc(0)]);
        assert_eq!(config.click(5, Modifiers::NONE), EventResult::Ignored);
        assert_eq!(config.sort_order(), &[SortKey::asc(0)]);
    }
}
