//! Assign positioned events to non-overlapping grid rows.
//!
//! Greedy first-fit coloring of the interval graph formed by the events'
//! column ranges: sort by start column, then drop each event into the
//! lowest row where it collides with nothing already placed.

use std::cmp::Reverse;

use crate::event::PositionedEvent;

/// Two half-open column ranges overlap iff `a.0 < b.1 && b.0 < a.1`.
/// Ranges merely touching (`a.1 == b.0`) do not overlap.
fn overlaps(a: (u32, u32), b: (u32, u32)) -> bool {
    a.0 < b.1 && b.0 < a.1
}

/// Assign a row to every event, reordering the slice into packing order.
///
/// Order: `col_start` ascending, ties broken by `span` descending. The
/// sort is stable, so any remaining ties keep input order and the
/// assignment is deterministic for a fixed input sequence.
///
/// Returns the number of rows used (0 for an empty slice).
pub fn pack_rows(events: &mut [PositionedEvent]) -> usize {
    events.sort_by_key(|e| (e.col_start, Reverse(e.span)));

    // Occupied column ranges, per row.
    let mut rows: Vec<Vec<(u32, u32)>> = Vec::new();

    for event in events.iter_mut() {
        let range = event.columns();
        let row = rows
            .iter()
            .position(|occupied| occupied.iter().all(|&taken| !overlaps(range, taken)));
        let row = match row {
            Some(row) => row,
            None => {
                rows.push(Vec::new());
                rows.len() - 1
            }
        };
        rows[row].push(range);
        event.row = row;
    }

    rows.len()
}
