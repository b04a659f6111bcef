//! # weekgrid
//!
//! All-day event layout for 7-column calendar week grids.
//!
//! Given a list of events and a week window, weekgrid clamps each event to
//! the visible week, maps it to a (start column, span) pair, and packs the
//! results into non-overlapping rows — the geometry a calendar week view
//! needs to render multi-day bars. The computation is pure and synchronous:
//! recompute on every change of the event set or the visible week.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use weekgrid::{layout_week, Event, WeekWindow};
//!
//! let window = WeekWindow::containing(NaiveDate::from_ymd_opt(2025, 10, 8).unwrap());
//! let events = vec![Event {
//!     id: "sowing-42".into(),
//!     title: "Sow winter wheat".into(),
//!     start: NaiveDate::from_ymd_opt(2025, 10, 10).unwrap().into(),
//!     end: NaiveDate::from_ymd_opt(2025, 10, 12).unwrap().into(),
//! }];
//!
//! let layout = layout_week(&events, &window);
//! assert_eq!(layout.row_count, 1);
//! assert_eq!(layout.events[0].col_start, 5); // Friday
//! assert_eq!(layout.events[0].span, 2);
//! ```
//!
//! ## Modules
//!
//! - [`window`] — validated 7-day windows, week navigation, zone projection
//! - [`grid`] — interval clamping and column/span mapping
//! - [`pack`] — greedy first-fit row assignment
//! - [`layout`] — the `layout_week` pipeline
//! - [`event`] — input/output types
//! - [`error`] — error types

pub mod error;
pub mod event;
pub mod grid;
pub mod layout;
pub mod pack;
pub mod window;

pub use error::LayoutError;
pub use event::{Event, PositionedEvent, WeekLayout};
pub use layout::layout_week;
pub use window::{wall_clock, zone, WeekWindow};
