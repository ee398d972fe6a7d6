//! Reporting periods and the run context.
//!
//! A run writes snapshots for two periods: the month it runs in and the
//! month before. Both are fixed once, when the [`RunContext`] is built, and
//! passed explicitly to everything that stamps records.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month.
///
/// # Example
///
/// ```
/// use position_snapshot::models::Period;
///
/// let january = Period::new(2026, 1);
/// assert_eq!(january.previous(), Period::new(2025, 12));
/// assert_eq!(january.to_string(), "2026-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    /// Calendar year.
    pub year: i32,
    /// Month of the year, 1 through 12.
    pub month: i32,
}

impl Period {
    /// Creates a period for the given year and month.
    pub fn new(year: i32, month: i32) -> Self {
        Self { year, month }
    }

    /// Returns the period containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month() as i32)
    }

    /// Returns the month immediately before this one.
    pub fn previous(self) -> Self {
        if self.month <= 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// The immutable pair of periods a run writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunContext {
    /// The month before the run date; its snapshots are replaced.
    pub previous: Period,
    /// The month of the run date.
    pub current: Period,
}

impl RunContext {
    /// Builds the context for a run happening on `date`.
    ///
    /// # Example
    ///
    /// ```
    /// use position_snapshot::models::{Period, RunContext};
    /// use chrono::NaiveDate;
    ///
    /// let context = RunContext::from_date(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap());
    /// assert_eq!(context.current, Period::new(2026, 3));
    /// assert_eq!(context.previous, Period::new(2026, 2));
    /// ```
    pub fn from_date(date: NaiveDate) -> Self {
        let current = Period::containing(date);
        Self {
            previous: current.previous(),
            current,
        }
    }

    /// Builds the context from the local wall clock.
    pub fn now() -> Self {
        Self::from_date(Local::now().date_naive())
    }
}
