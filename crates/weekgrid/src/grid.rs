//! Clamp event intervals to the week and map them onto grid columns.
//!
//! Columns are 1-based (1..=7) so they can be handed straight to a CSS-style
//! grid; day indices are 0-based internally. All intervals are half-open.

use chrono::{Duration, NaiveDateTime};

use crate::event::Event;
use crate::window::WeekWindow;

/// Where a clamped event lands on the grid, plus truncation flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// One-based start column (1..=7).
    pub col_start: u32,
    /// Columns covered, at least 1.
    pub span: u32,
    /// True when the true start is on/after the window start.
    pub visual_start: bool,
    /// True when the true end is on/before the window end.
    pub visual_end: bool,
}

/// Intersect `[start, end)` with the window, or `None` when the
/// intersection is empty.
///
/// An event touching the boundary exactly (`end == window start`, or
/// `start == window end`) has a zero-length intersection and is excluded,
/// since ends are exclusive.
pub fn clamp_interval(
    start: NaiveDateTime,
    end: NaiveDateTime,
    window: &WeekWindow,
) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let clamped_start = start.max(window.start());
    let clamped_end = end.min(window.end());
    if clamped_start < clamped_end {
        Some((clamped_start, clamped_end))
    } else {
        None
    }
}

/// Zero-based day column of a datetime inside the window (0..=6).
fn day_index(window: &WeekWindow, d: NaiveDateTime) -> u32 {
    (d - window.start()).num_days() as u32
}

/// Compute the grid placement of an event, or `None` when it has no
/// visible overlap with the week.
///
/// The exclusive clamped end is stepped back one instant before indexing,
/// so an end landing exactly on a day boundary does not count an extra
/// column.
pub fn place(event: &Event, window: &WeekWindow) -> Option<Placement> {
    let (clamped_start, clamped_end) = clamp_interval(event.start, event.end, window)?;

    let first_day = day_index(window, clamped_start);
    let last_day = day_index(window, clamped_end - Duration::nanoseconds(1));

    Some(Placement {
        col_start: first_day + 1,
        span: last_day - first_day + 1,
        visual_start: event.start >= window.start(),
        visual_end: event.end <= window.end(),
    })
}
