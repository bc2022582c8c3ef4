//! Comparable cell values.

use std::cmp::Ordering;

/// The value a cell contributes to a sort comparison.
///
/// Values are totally ordered: `Empty < Number < Text`. Numbers compare
/// numerically, text compares lexicographically by Unicode scalar value.
///
/// # Example
///
/// ```
/// use tablesort::SortValue;
///
/// assert!(SortValue::parse("9") < SortValue::parse("10"));
/// assert!(SortValue::parse("10") < SortValue::parse("apple"));
/// assert!(SortValue::parse("") < SortValue::parse("-3"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue<'a> {
    /// Missing cell or empty string.
    Empty,
    /// Text that parses as a finite number.
    Number(f64),
    /// Any other text.
    Text(&'a str),
}

impl<'a> SortValue<'a> {
    /// Classify a raw cell value.
    ///
    /// Surrounding whitespace is ignored when checking for a number but kept
    /// for text comparison.
    pub fn parse(raw: &'a str) -> Self {
        if raw.is_empty() {
            return SortValue::Empty;
        }
        match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => SortValue::Number(n),
            _ => SortValue::Text(raw),
        }
    }

    /// Classify an optional cell value; `None` is a missing cell.
    pub fn from_option(raw: Option<&'a str>) -> Self {
        raw.map_or(SortValue::Empty, SortValue::parse)
    }

    fn rank(&self) -> u8 {
        match self {
            SortValue::Empty => 0,
            SortValue::Number(_) => 1,
            SortValue::Text(_) => 2,
        }
    }
}

impl Eq for SortValue<'_> {}

impl PartialOrd for SortValue<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortValue<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // Finite by construction, so partial_cmp always answers.
            (SortValue::Number(a), SortValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}
