//! Week window construction, validation, and timezone projection.
//!
//! A [`WeekWindow`] is a half-open 7-day interval starting at midnight.
//! The constructors make it impossible to hold malformed geometry, so the
//! layout routines never have to re-validate their window argument.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::error::{LayoutError, Result};

/// Number of day columns in the week grid.
pub const DAYS_PER_WEEK: i64 = 7;

/// A validated `[start, end)` week window with `end = start + 7 days` and
/// `start` at midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl WeekWindow {
    /// The week starting at midnight on `day`.
    ///
    /// Any weekday is accepted; use [`WeekWindow::containing`] for
    /// ISO-style Monday-based weeks.
    pub fn starting(day: NaiveDate) -> Self {
        let start = day.and_time(NaiveTime::MIN);
        WeekWindow {
            start,
            end: start + Duration::days(DAYS_PER_WEEK),
        }
    }

    /// The Monday-based week containing `day`.
    pub fn containing(day: NaiveDate) -> Self {
        let monday = day - Duration::days(i64::from(day.weekday().num_days_from_monday()));
        Self::starting(monday)
    }

    /// Build a window from raw bounds, validating the caller contract.
    ///
    /// # Errors
    /// Returns `LayoutError::InvalidWindow` if `start` is not at midnight
    /// or `end` is not exactly 7 days after `start`.
    pub fn from_bounds(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if start.time() != NaiveTime::MIN {
            return Err(LayoutError::InvalidWindow(format!(
                "week start {} is not at midnight",
                start
            )));
        }
        if end != start + Duration::days(DAYS_PER_WEEK) {
            return Err(LayoutError::InvalidWindow(format!(
                "week end {} is not exactly 7 days after start {}",
                end, start
            )));
        }
        Ok(WeekWindow { start, end })
    }

    /// Inclusive window start (midnight).
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Exclusive window end (midnight, 7 days after `start`).
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// The following week.
    pub fn next(&self) -> Self {
        Self::starting(self.start.date() + Duration::days(DAYS_PER_WEEK))
    }

    /// The preceding week.
    pub fn prev(&self) -> Self {
        Self::starting(self.start.date() - Duration::days(DAYS_PER_WEEK))
    }

    /// Date shown in column `index` (0-based, valid for 0..7).
    pub fn day(&self, index: u32) -> NaiveDate {
        self.start.date() + Duration::days(i64::from(index))
    }
}

/// Parse an IANA timezone identifier (e.g., "Europe/Brussels").
///
/// # Errors
/// Returns `LayoutError::InvalidTimezone` if the name is not a valid IANA
/// identifier.
pub fn zone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| LayoutError::InvalidTimezone(name.to_string()))
}

/// Project a stored UTC instant onto the wall clock of a timezone.
///
/// Layout math runs on wall-clock values, so events persisted as UTC
/// timestamps must be projected into the viewer's zone first. Making the
/// zone an explicit argument avoids any dependence on the process-wide
/// local zone.
pub fn wall_clock(instant: DateTime<Utc>, tz: Tz) -> NaiveDateTime {
    instant.with_timezone(&tz).naive_local()
}
