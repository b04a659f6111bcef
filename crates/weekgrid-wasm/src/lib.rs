//! WASM bindings for weekgrid.
//!
//! Exposes week-window construction and all-day event layout to JavaScript
//! via `wasm-bindgen`. All complex types are passed as JSON strings, so the
//! calling code stays free of generated classes.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p weekgrid-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/weekgrid_wasm.wasm
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use weekgrid::{layout_week as layout_week_core, Event, WeekWindow};

/// Input format for events passed from JavaScript.
#[derive(Deserialize)]
struct EventInput {
    id: String,
    title: String,
    start: String,
    end: String,
}

/// Week bounds returned by [`week_containing`].
#[derive(Serialize)]
struct WeekBounds {
    week_start: String,
    week_end: String,
}

/// Parse an ISO 8601 datetime string into a wall-clock `NaiveDateTime`.
///
/// Accepts RFC 3339 (with offset, e.g., "2025-10-10T00:00:00+00:00" — the
/// offset is stripped after normalizing to UTC), bare datetimes
/// ("2025-10-10T09:00:00"), and bare dates ("2025-10-10", midnight).
fn parse_datetime(s: &str) -> Result<NaiveDateTime, JsValue> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_utc());
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(ndt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(NaiveDateTime::from)
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

fn parse_events(events_json: &str) -> Result<Vec<Event>, JsValue> {
    let inputs: Vec<EventInput> = serde_json::from_str(events_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid events JSON: {}", e)))?;

    inputs
        .into_iter()
        .map(|e| {
            Ok(Event {
                start: parse_datetime(&e.start)?,
                end: parse_datetime(&e.end)?,
                id: e.id,
                title: e.title,
            })
        })
        .collect()
}

/// Lay out all-day events for one week.
///
/// `events_json` is a JSON array of `{id, title, start, end}` records;
/// `week_start` and `week_end` must span exactly 7 days from a midnight
/// start. Returns the layout as JSON: positioned events with
/// `row`/`col_start`/`span`/`visual_start`/`visual_end`, plus `row_count`.
#[wasm_bindgen]
pub fn layout_week(
    events_json: &str,
    week_start: &str,
    week_end: &str,
) -> Result<String, JsValue> {
    let start = parse_datetime(week_start)?;
    let end = parse_datetime(week_end)?;
    let window = WeekWindow::from_bounds(start, end)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let events = parse_events(events_json)?;
    let layout = layout_week_core(&events, &window);

    serde_json::to_string(&layout).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Bounds of the Monday-based week containing `date` ("YYYY-MM-DD").
///
/// Returns `{"week_start": ..., "week_end": ...}` as JSON, ready to feed
/// back into [`layout_week`].
#[wasm_bindgen]
pub fn week_containing(date: &str) -> Result<String, JsValue> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", date, e)))?;
    let window = WeekWindow::containing(day);

    let bounds = WeekBounds {
        week_start: window.start().format("%Y-%m-%dT%H:%M:%S").to_string(),
        week_end: window.end().format("%Y-%m-%dT%H:%M:%S").to_string(),
    };
    serde_json::to_string(&bounds).map_err(|e| JsValue::from_str(&e.to_string()))
}
