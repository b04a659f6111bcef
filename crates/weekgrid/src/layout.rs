//! Lay out all-day events onto a 7-column week grid.

use crate::event::{Event, PositionedEvent, WeekLayout};
use crate::grid;
use crate::pack;
use crate::window::WeekWindow;

/// Lay out events for one week: clamp to the window, map to columns, pack
/// into non-overlapping rows.
///
/// Total over any finite event list: entries with `end <= start` and
/// entries with no visible overlap with the window are silently excluded
/// rather than reported — the caller decides how to present a week with
/// nothing on it. Repeated calls with the same inputs yield the same
/// layout, rows and order included.
///
/// # Arguments
///
/// * `events` — Raw entries, in any order; out-of-window entries allowed.
/// * `window` — The week to lay out. Validated at construction, so no
///   geometry checks happen here.
pub fn layout_week(events: &[Event], window: &WeekWindow) -> WeekLayout {
    let mut positioned: Vec<PositionedEvent> = events
        .iter()
        .filter(|e| e.start < e.end)
        .filter_map(|e| {
            grid::place(e, window).map(|placement| PositionedEvent {
                event: e.clone(),
                row: 0,
                col_start: placement.col_start,
                span: placement.span,
                visual_start: placement.visual_start,
                visual_end: placement.visual_end,
            })
        })
        .collect();

    let row_count = pack::pack_rows(&mut positioned);

    WeekLayout {
        events: positioned,
        row_count,
        week_start: window.start(),
        week_end: window.end(),
    }
}
