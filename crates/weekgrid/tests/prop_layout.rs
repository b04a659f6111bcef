//! Property-based tests for week layout using proptest.
//!
//! These verify invariants that should hold for *any* event list — sizes,
//! offsets, and durations well beyond the handcrafted cases in
//! `layout_tests.rs`, including events far outside the window and
//! zero-length events.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use weekgrid::{layout_week, Event, WeekWindow};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Start offset in hours relative to the window start: from 10 days before
/// to ~10 days after the week, so events fall before, inside, across, and
/// after the window.
fn arb_start_offset_hours() -> impl Strategy<Value = i64> {
    -240i64..=408
}

/// Duration in hours. Zero is included deliberately: zero-length events
/// must be filtered, never placed.
fn arb_duration_hours() -> impl Strategy<Value = i64> {
    0i64..=240
}

fn arb_event_specs() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((arb_start_offset_hours(), arb_duration_hours()), 0..32)
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn week() -> WeekWindow {
    WeekWindow::starting(NaiveDate::from_ymd_opt(2025, 10, 6).unwrap())
}

fn build_events(window: &WeekWindow, specs: &[(i64, i64)]) -> Vec<Event> {
    specs
        .iter()
        .enumerate()
        .map(|(i, &(offset, duration))| {
            let start: NaiveDateTime = window.start() + Duration::hours(offset);
            Event {
                id: format!("ev-{}", i),
                title: format!("Event {}", i),
                start,
                end: start + Duration::hours(duration),
            }
        })
        .collect()
}

/// An event counts as visible when it is valid and its interval intersects
/// the window.
fn is_visible(event: &Event, window: &WeekWindow) -> bool {
    event.start < event.end && event.start < window.end() && event.end > window.start()
}

// ---------------------------------------------------------------------------
// Property 1: Every placed event stays inside the 7 columns
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn columns_always_in_bounds(specs in arb_event_specs()) {
        let window = week();
        let layout = layout_week(&build_events(&window, &specs), &window);

        for e in &layout.events {
            prop_assert!((1..=7).contains(&e.col_start), "col_start {} out of range", e.col_start);
            prop_assert!(e.span >= 1, "span must be at least 1");
            prop_assert!(
                e.col_start + e.span - 1 <= 7,
                "event {} spills past column 7 (col_start {}, span {})",
                e.event.id, e.col_start, e.span
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: No two events on the same row share a column
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn same_row_events_never_overlap(specs in arb_event_specs()) {
        let window = week();
        let layout = layout_week(&build_events(&window, &specs), &window);

        for (i, a) in layout.events.iter().enumerate() {
            for b in layout.events.iter().skip(i + 1) {
                if a.row == b.row {
                    let (a0, a1) = a.columns();
                    let (b0, b1) = b.columns();
                    prop_assert!(
                        a1 <= b0 || b1 <= a0,
                        "{} and {} share row {} and overlap",
                        a.event.id, b.event.id, a.row
                    );
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Exactly the visible events are placed
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn exactly_visible_events_are_placed(specs in arb_event_specs()) {
        let window = week();
        let events = build_events(&window, &specs);
        let layout = layout_week(&events, &window);

        let expected = events.iter().filter(|e| is_visible(e, &window)).count();
        prop_assert_eq!(layout.events.len(), expected);

        for placed in &layout.events {
            prop_assert!(
                is_visible(&placed.event, &window),
                "{} was placed but is not visible",
                placed.event.id
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Layout is idempotent — same input, same output
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn layout_is_idempotent(specs in arb_event_specs()) {
        let window = week();
        let events = build_events(&window, &specs);

        let first = layout_week(&events, &window);
        let second = layout_week(&events, &window);

        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Truncation flags match the true edges
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn visual_flags_match_true_edges(specs in arb_event_specs()) {
        let window = week();
        let layout = layout_week(&build_events(&window, &specs), &window);

        for e in &layout.events {
            prop_assert_eq!(e.visual_start, e.event.start >= window.start());
            prop_assert_eq!(e.visual_end, e.event.end <= window.end());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: Row count is 1 + max assigned row (or 0 when empty)
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn row_count_matches_assignment(specs in arb_event_specs()) {
        let window = week();
        let layout = layout_week(&build_events(&window, &specs), &window);

        match layout.events.iter().map(|e| e.row).max() {
            Some(max_row) => prop_assert_eq!(layout.row_count, max_row + 1),
            None => prop_assert_eq!(layout.row_count, 0),
        }
    }
}
