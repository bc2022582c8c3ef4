//! Multi-key row ordering.

use std::cmp::Ordering;

use crate::order::SortKey;
use crate::table::TableRow;
use crate::value::SortValue;

/// Compare two rows under a sort order.
///
/// Keys are tried primary first; the first key on which the rows differ
/// decides, reversed for descending keys. Rows that tie on every key
/// compare equal.
pub fn compare_rows<R: TableRow + ?Sized>(a: &R, b: &R, sort_order: &[SortKey]) -> Ordering {
    for key in sort_order {
        let va = SortValue::from_option(a.sort_source(key.column));
        let vb = SortValue::from_option(b.sort_source(key.column));
        match va.cmp(&vb) {
            Ordering::Equal => continue,
            ordering => return key.direction.apply(ordering),
        }
    }
    Ordering::Equal
}

/// Reorder rows in place.
///
/// The sort is stable: rows that tie on every key keep their relative
/// order, and an empty `sort_order` leaves the rows untouched.
pub fn sort_rows<R: TableRow>(rows: &mut [R], sort_order: &[SortKey]) {
    if sort_order.is_empty() || rows.len() < 2 {
        return;
    }
    rows.sort_by(|a, b| compare_rows(a, b, sort_order));
}
